//! Armazenamento FIFO de chamadas memoizadas.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use crate::equality::ShallowEq;

/// Registro de uma chamada: argumentos e o resultado produzido para eles.
#[derive(Debug, Clone)]
pub struct CallRecord<A, R> {
    args: A,
    result: R,
    cached_at: DateTime<Utc>,
}

impl<A, R> CallRecord<A, R> {
    /// Cria um novo registro.
    pub fn new(args: A, result: R) -> Self {
        Self {
            args,
            result,
            cached_at: Utc::now(),
        }
    }

    /// Argumentos da chamada.
    pub fn args(&self) -> &A {
        &self.args
    }

    /// Resultado armazenado.
    pub fn result(&self) -> &R {
        &self.result
    }

    /// Momento em que foi armazenado.
    pub fn cached_at(&self) -> DateTime<Utc> {
        self.cached_at
    }
}

/// Estatísticas do cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Número atual de entradas.
    pub size: usize,

    /// Capacidade máxima (`None` = ilimitada).
    pub capacity: Option<usize>,

    /// Número de acertos (cache hits).
    pub hits: u64,

    /// Número de erros (cache misses).
    pub misses: u64,
}

impl CacheStats {
    /// Calcula a taxa de acerto.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Cache FIFO de registros de chamada.
///
/// A busca é linear e usa [`ShallowEq`]; um acerto nunca reordena as
/// entradas. Ao exceder `capacity`, a entrada mais antiga é removida.
#[derive(Debug, Clone)]
pub struct CallCache<A, R> {
    records: VecDeque<CallRecord<A, R>>,
    capacity: Option<usize>,
    hits: u64,
    misses: u64,
}

impl<A: ShallowEq, R> CallCache<A, R> {
    /// Cria um cache vazio. `None` = sem limite.
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            records: VecDeque::new(),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    /// Busca o primeiro registro cujos argumentos são rasamente iguais a `args`.
    ///
    /// Atualiza os contadores de hit/miss.
    pub fn lookup(&mut self, args: &A) -> Option<&R> {
        match self.records.iter().position(|r| r.args.shallow_eq(args)) {
            Some(index) => {
                self.hits += 1;
                tracing::trace!(index, size = self.records.len(), "Memoized call hit");
                Some(&self.records[index].result)
            }
            None => {
                self.misses += 1;
                tracing::trace!(size = self.records.len(), "Memoized call miss");
                None
            }
        }
    }

    /// Acrescenta um registro ao final, removendo o mais antigo se o limite
    /// for excedido.
    ///
    /// Se já existe um registro com argumentos rasamente iguais, nada é
    /// alterado e retorna `false`. Não conta como hit nem como miss.
    pub fn insert(&mut self, args: A, result: R) -> bool {
        if self.records.iter().any(|r| r.args.shallow_eq(&args)) {
            tracing::trace!(size = self.records.len(), "Memoized call already stored");
            return false;
        }

        self.records.push_back(CallRecord::new(args, result));

        if let Some(capacity) = self.capacity {
            if self.records.len() > capacity {
                self.records.pop_front();
                tracing::debug!(capacity, "Evicted oldest memoized call");
            }
        }
        true
    }
}

impl<A, R> CallCache<A, R> {
    /// Limpa todo o cache. O limite e os contadores são preservados.
    pub fn clear(&mut self) {
        if !self.records.is_empty() {
            tracing::debug!(removed = self.records.len(), "Clearing memoized calls");
        }
        self.records.clear();
    }

    /// Zera os contadores de hit/miss.
    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }

    /// Número de registros armazenados.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Verifica se o cache está vazio.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Limite configurado.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Registros do mais antigo para o mais recente.
    pub fn records(&self) -> impl Iterator<Item = &CallRecord<A, R>> {
        self.records.iter()
    }

    /// Retorna estatísticas do cache.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.records.len(),
            capacity: self.capacity,
            hits: self.hits,
            misses: self.misses,
        }
    }
}
