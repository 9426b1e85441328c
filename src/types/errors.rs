//! Tipos de erro do Memora.

use thiserror::Error;

use crate::validate::ValidationError;

/// Tipo de resultado padrão do Memora.
pub type MemoraResult<T> = Result<T, MemoraError>;

/// Erros possíveis no Memora.
///
/// Erros produzidos pelas funções memoizadas não passam por aqui: eles são
/// devolvidos intactos ao chamador.
#[derive(Error, Debug)]
pub enum MemoraError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de validação: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Other(String),
}

impl MemoraError {
    /// Cria um erro genérico.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}
