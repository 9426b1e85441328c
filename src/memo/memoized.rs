//! Wrappers memoizados para funções arbitrárias.

use serde::{Deserialize, Serialize};

use super::cache::{CacheStats, CallCache, CallRecord};
use crate::equality::ShallowEq;
use crate::types::config::MemoizeConfig;

/// Opções de memoização.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoizeOptions {
    /// Número máximo de chamadas armazenadas (`None` = ilimitado).
    #[serde(default)]
    pub cache_size: Option<usize>,
}

impl MemoizeOptions {
    /// Opções com limite de entradas.
    pub fn bounded(cache_size: usize) -> Self {
        Self {
            cache_size: Some(cache_size),
        }
    }
}

impl From<&MemoizeConfig> for MemoizeOptions {
    fn from(config: &MemoizeConfig) -> Self {
        Self {
            cache_size: config.cache_size,
        }
    }
}

/// Memoiza uma função infalível.
///
/// `args` é sempre uma tupla (`(x,)` para funções de um argumento).
///
/// ```
/// use memora::{memoize, MemoizeOptions};
///
/// let mut square = memoize(|(x,): (u64,)| x * x, MemoizeOptions::bounded(16));
/// assert_eq!(square.call((4,)), 16);
/// assert_eq!(square.call((4,)), 16);
/// assert_eq!(square.stats().hits, 1);
/// ```
pub fn memoize<A, R, F>(func: F, options: MemoizeOptions) -> Memoized<A, R, F>
where
    A: ShallowEq + Clone,
    R: Clone,
    F: FnMut(A) -> R,
{
    Memoized {
        func,
        cache: CallCache::new(options.cache_size),
    }
}

/// Memoiza uma função falível. Apenas resultados `Ok` são armazenados.
pub fn try_memoize<A, T, E, F>(func: F, options: MemoizeOptions) -> TryMemoized<A, T, F>
where
    A: ShallowEq + Clone,
    T: Clone,
    F: FnMut(A) -> Result<T, E>,
{
    TryMemoized {
        func,
        cache: CallCache::new(options.cache_size),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Memoized
// ═══════════════════════════════════════════════════════════════════════════

/// Função memoizada com cache FIFO privado.
pub struct Memoized<A, R, F> {
    func: F,
    cache: CallCache<A, R>,
}

impl<A, R, F> Memoized<A, R, F>
where
    A: ShallowEq + Clone,
    R: Clone,
    F: FnMut(A) -> R,
{
    /// Chama a função, reaproveitando o resultado de uma chamada anterior
    /// com argumentos rasamente iguais.
    ///
    /// Se a função entrar em pânico, nada é armazenado.
    pub fn call(&mut self, args: A) -> R {
        if let Some(result) = self.cache.lookup(&args) {
            return result.clone();
        }

        let result = (self.func)(args.clone());
        self.cache.insert(args, result.clone());
        result
    }
}

impl<A, R, F> Memoized<A, R, F> {
    /// Remove todas as chamadas armazenadas.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Zera os contadores de hit/miss.
    pub fn reset_stats(&mut self) {
        self.cache.reset_stats();
    }

    /// Número de chamadas armazenadas.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Verifica se não há chamadas armazenadas.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Limite configurado.
    pub fn cache_size(&self) -> Option<usize> {
        self.cache.capacity()
    }

    /// Chamadas armazenadas, da mais antiga para a mais recente.
    pub fn records(&self) -> impl Iterator<Item = &CallRecord<A, R>> {
        self.cache.records()
    }

    /// Retorna estatísticas do cache.
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl<A, R, F> std::fmt::Debug for Memoized<A, R, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memoized")
            .field("stats", &self.cache.stats())
            .finish_non_exhaustive()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TryMemoized
// ═══════════════════════════════════════════════════════════════════════════

/// Função falível memoizada.
///
/// Erros são devolvidos ao chamador sem alteração e nunca entram no cache:
/// a próxima chamada idêntica executa a função de novo.
pub struct TryMemoized<A, T, F> {
    func: F,
    cache: CallCache<A, T>,
}

impl<A, T, F> TryMemoized<A, T, F>
where
    A: ShallowEq + Clone,
    T: Clone,
{
    /// Chama a função, reaproveitando resultados `Ok` anteriores.
    pub fn call<E>(&mut self, args: A) -> Result<T, E>
    where
        F: FnMut(A) -> Result<T, E>,
    {
        if let Some(result) = self.cache.lookup(&args) {
            return Ok(result.clone());
        }

        let result = (self.func)(args.clone())?;
        self.cache.insert(args, result.clone());
        Ok(result)
    }
}

impl<A, T, F> TryMemoized<A, T, F> {
    /// Remove todas as chamadas armazenadas.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Zera os contadores de hit/miss.
    pub fn reset_stats(&mut self) {
        self.cache.reset_stats();
    }

    /// Número de chamadas armazenadas.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Verifica se não há chamadas armazenadas.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Limite configurado.
    pub fn cache_size(&self) -> Option<usize> {
        self.cache.capacity()
    }

    /// Chamadas armazenadas, da mais antiga para a mais recente.
    pub fn records(&self) -> impl Iterator<Item = &CallRecord<A, T>> {
        self.cache.records()
    }

    /// Retorna estatísticas do cache.
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl<A, T, F> std::fmt::Debug for TryMemoized<A, T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryMemoized")
            .field("stats", &self.cache.stats())
            .finish_non_exhaustive()
    }
}
