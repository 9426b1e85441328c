//! # Memora
//!
//! Utilitários funcionais genéricos para Rust.
//!
//! O núcleo é um cache de memoização limitado, com despejo FIFO e busca por
//! igualdade rasa dos argumentos. Em volta dele há utilitários pequenos e
//! independentes: comparadores, composição de funções e validadores de
//! argumento.
//!
//! ## Módulos
//!
//! - [`memo`] - Memoização com cache FIFO limitado
//! - [`equality`] - Igualdade rasa (identidade / valor primitivo)
//! - [`compare`] - Comparadores padrão e inverso
//! - [`compose`] - Builder de composição de funções
//! - [`validate`] - Validadores do primeiro argumento
//! - [`logging`] - Inicialização do tracing
//! - [`types`] - Configuração e erros

pub mod compare;
pub mod compose;
pub mod equality;
pub mod logging;
pub mod memo;
pub mod types;
pub mod validate;

pub use compare::{default_comparator, inverse_comparator};
pub use compose::{compose, void_func, FunctionComposer};
pub use equality::{are_shallowly_equal, ByRef, ShallowEq};
pub use memo::{memoize, try_memoize, CacheStats, MemoizeOptions, Memoized, TryMemoized};
pub use types::config::Config;
pub use types::errors::{MemoraError, MemoraResult};
pub use validate::{
    create_single_arg_instance_validation, create_single_arg_type_validation, is_type, TypeName,
    ValidationError,
};
