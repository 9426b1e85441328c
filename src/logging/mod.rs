//! Inicialização do logging (tracing).
//!
//! A biblioteca só emite eventos `tracing`; quem a usa decide se instala o
//! subscriber padrão com [`init_logging`].

use std::str::FromStr;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::types::config::GeneralConfig;
use crate::{MemoraError, MemoraResult};

/// Monta o filtro: `RUST_LOG` mais a diretiva `memora=<level>`.
pub fn build_filter(log_level: &str) -> MemoraResult<EnvFilter> {
    LevelFilter::from_str(log_level)
        .map_err(|_| MemoraError::config(format!("invalid log level '{}'", log_level)))?;

    let directive: Directive = format!("memora={}", log_level)
        .parse()
        .map_err(|e| MemoraError::config(format!("invalid log directive: {}", e)))?;

    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Instala o subscriber global, escrevendo em stderr.
///
/// Falha se já houver um subscriber instalado.
pub fn init_logging(config: &GeneralConfig) -> MemoraResult<()> {
    let filter = build_filter(&config.log_level)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.log_format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        _ => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| MemoraError::other(format!("failed to initialize logging: {}", e)))?;

    tracing::debug!(
        level = %config.log_level,
        format = %config.log_format,
        "Logging initialized"
    );
    Ok(())
}
