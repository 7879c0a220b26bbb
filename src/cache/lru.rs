//! Cache LRU com TTL para avaliações de complexidade.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use lru::LruCache;

use super::clock::{Clock, SystemClock};
use super::key::CacheKey;
use super::stats::{hit_rate, CacheStats, MethodDistribution};
use crate::types::assessment::ComplexityAssessment;
use crate::types::config::{default_max_size, CacheConfig};
use crate::types::method::AnalysisMethod;

/// Entrada em cache.
#[derive(Debug, Clone)]
pub struct CacheEntry<A> {
    /// Avaliação armazenada.
    pub assessment: A,

    /// Método que produziu a avaliação.
    pub method: AnalysisMethod,

    /// Momento da inserção, em milissegundos.
    pub created_at: i64,
}

impl<A> CacheEntry<A> {
    /// Idade da entrada em `now`. Um relógio que voltou no tempo resulta em 0.
    pub fn age_millis(&self, now: i64) -> u64 {
        u64::try_from(now.saturating_sub(self.created_at)).unwrap_or(0)
    }

    /// Verifica se a entrada expirou.
    pub fn is_expired(&self, now: i64, ttl_ms: u64) -> bool {
        self.age_millis(now) > ttl_ms
    }
}

/// Cache LRU de avaliações indexado pelo texto de entrada.
///
/// Entradas expiradas são removidas apenas quando observadas (em [`get`],
/// [`invalidate`] ou [`purge_expired`]); até lá ocupam capacidade mas nunca
/// são retornadas.
///
/// [`get`]: AssessmentCache::get
/// [`invalidate`]: AssessmentCache::invalidate
/// [`purge_expired`]: AssessmentCache::purge_expired
pub struct AssessmentCache<A = ComplexityAssessment> {
    entries: LruCache<CacheKey, CacheEntry<A>>,
    ttl_ms: u64,
    clock: Arc<dyn Clock>,
    distribution: MethodDistribution,
    hits: u64,
    lookups: u64,
}

impl<A> AssessmentCache<A> {
    /// Cria um novo cache usando o relógio do sistema.
    ///
    /// # Argumentos
    /// - `max_size`: Número máximo de entradas (0 usa o padrão)
    /// - `ttl`: Tempo de vida das entradas
    pub fn new(max_size: usize, ttl: Duration) -> Self {
        Self::with_clock(max_size, ttl, SystemClock)
    }

    /// Cria um cache com uma fonte de tempo específica.
    pub fn with_clock(max_size: usize, ttl: Duration, clock: impl Clock + 'static) -> Self {
        let cap = NonZeroUsize::new(max_size).unwrap_or_else(|| {
            let fallback = default_max_size();
            tracing::warn!(fallback, "Cache max_size is zero, using default capacity");
            NonZeroUsize::new(fallback).unwrap_or(NonZeroUsize::MIN)
        });
        Self {
            entries: LruCache::new(cap),
            ttl_ms: u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX),
            clock: Arc::new(clock),
            distribution: MethodDistribution::default(),
            hits: 0,
            lookups: 0,
        }
    }

    /// Cria um cache a partir da configuração.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.max_size, config.ttl())
    }

    /// Busca a avaliação de um texto.
    ///
    /// Retorna `None` se não encontrada ou se expirada; uma entrada expirada
    /// é removida neste momento.
    pub fn get(&mut self, text: &str) -> Option<&A> {
        let key = CacheKey::derive(text);
        self.lookups += 1;

        // peek não altera a ordem LRU
        let now = self.clock.now_millis();
        let is_expired = self
            .entries
            .peek(&key)
            .map(|e| e.is_expired(now, self.ttl_ms));

        match is_expired {
            Some(true) => {
                self.remove(&key);
                tracing::debug!(key = %key, "Cache entry expired");
                None
            }
            Some(false) => {
                self.hits += 1;
                tracing::trace!(key = %key, "Cache hit");
                self.entries.get(&key).map(|e| &e.assessment)
            }
            None => {
                tracing::trace!(key = %key, "Cache miss");
                None
            }
        }
    }

    /// Insere ou substitui a avaliação de um texto.
    ///
    /// Se o cache ultrapassar a capacidade, a entrada menos usada
    /// recentemente é removida.
    pub fn set(&mut self, text: &str, assessment: A, method: AnalysisMethod) {
        let key = CacheKey::derive(text);
        let entry = CacheEntry {
            assessment,
            method,
            created_at: self.clock.now_millis(),
        };

        // push devolve a entrada substituída (mesma chave) ou a despejada
        if let Some((old_key, old)) = self.entries.push(key, entry) {
            self.distribution.decrement(old.method);
            if old_key != key {
                tracing::debug!(
                    evicted = %old_key,
                    method = %old.method,
                    "Evicted least recently used entry"
                );
            }
        }
        self.distribution.increment(method);
    }

    /// Verifica se existe uma entrada válida, sem promovê-la nem contar lookup.
    pub fn contains(&self, text: &str) -> bool {
        let now = self.clock.now_millis();
        self.entries
            .peek(&CacheKey::derive(text))
            .is_some_and(|e| !e.is_expired(now, self.ttl_ms))
    }

    /// Invalida a entrada de um texto.
    ///
    /// Retorna `true` se uma entrada válida foi removida.
    pub fn invalidate(&mut self, text: &str) -> bool {
        let now = self.clock.now_millis();
        self.remove(&CacheKey::derive(text))
            .is_some_and(|e| !e.is_expired(now, self.ttl_ms))
    }

    /// Remove todas as entradas expiradas e retorna quantas foram removidas.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now_millis();
        let expired_keys: Vec<CacheKey> = self
            .entries
            .iter()
            .filter(|(_, e)| e.is_expired(now, self.ttl_ms))
            .map(|(k, _)| *k)
            .collect();

        for key in &expired_keys {
            self.remove(key);
        }

        if !expired_keys.is_empty() {
            tracing::debug!(removed = expired_keys.len(), "Purged expired entries");
        }
        expired_keys.len()
    }

    /// Limpa todas as entradas.
    ///
    /// Os contadores de hits e lookups são preservados; use
    /// [`reset_stats`](Self::reset_stats) para zerá-los.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        self.distribution = MethodDistribution::default();
        tracing::debug!(removed, "Cache cleared");
    }

    /// Zera os contadores de hits e lookups.
    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.lookups = 0;
    }

    /// Retorna estatísticas do cache.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.entries.len(),
            max_size: self.max_size(),
            hit_rate: hit_rate(self.hits, self.lookups),
            method_distribution: self.distribution,
            hits: self.hits,
            lookups: self.lookups,
        }
    }

    /// Número de entradas armazenadas, incluindo expiradas ainda não removidas.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Verifica se o cache está vazio.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Capacidade máxima.
    pub fn max_size(&self) -> usize {
        self.entries.cap().get()
    }

    /// Tempo de vida das entradas.
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    fn remove(&mut self, key: &CacheKey) -> Option<CacheEntry<A>> {
        let entry = self.entries.pop(key)?;
        self.distribution.decrement(entry.method);
        Some(entry)
    }
}

impl<A> std::fmt::Debug for AssessmentCache<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssessmentCache")
            .field("len", &self.entries.len())
            .field("max_size", &self.max_size())
            .field("ttl_ms", &self.ttl_ms)
            .field("hits", &self.hits)
            .field("lookups", &self.lookups)
            .finish()
    }
}
