//! Memoização com cache FIFO limitado.
//!
//! Este módulo envolve uma função arbitrária e armazena os resultados das
//! chamadas anteriores, indexados pela lista de argumentos:
//!
//! - a busca é linear e usa igualdade rasa ([`crate::equality::ShallowEq`]);
//! - ao exceder `cache_size`, a chamada mais antiga é descartada (FIFO, um
//!   acerto não promove a entrada);
//! - erros e pânicos da função envolvida nunca são armazenados.

mod cache;
mod memoized;

pub use cache::{CacheStats, CallCache, CallRecord};
pub use memoized::{memoize, try_memoize, MemoizeOptions, Memoized, TryMemoized};
