//! Handle compartilhável do cache para uso entre threads.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use super::clock::Clock;
use super::lru::AssessmentCache;
use super::stats::CacheStats;
use crate::types::assessment::ComplexityAssessment;
use crate::types::config::CacheConfig;
use crate::types::method::AnalysisMethod;

/// Cache de avaliações protegido por um único `Mutex`.
///
/// Cada operação adquire o lock, executa até o fim e o libera; nenhuma
/// operação faz I/O ou aguarda enquanto segura o lock. Valores retornados
/// são clones, então quem chama não altera o que está armazenado.
pub struct SharedAssessmentCache<A = ComplexityAssessment> {
    inner: Arc<Mutex<AssessmentCache<A>>>,
}

impl<A> Clone for SharedAssessmentCache<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: Clone> SharedAssessmentCache<A> {
    /// Cria um novo cache compartilhado usando o relógio do sistema.
    pub fn new(max_size: usize, ttl: Duration) -> Self {
        Self::from_cache(AssessmentCache::new(max_size, ttl))
    }

    /// Cria um cache compartilhado com uma fonte de tempo específica.
    pub fn with_clock(max_size: usize, ttl: Duration, clock: impl Clock + 'static) -> Self {
        Self::from_cache(AssessmentCache::with_clock(max_size, ttl, clock))
    }

    /// Cria um cache compartilhado a partir da configuração.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::from_cache(AssessmentCache::from_config(config))
    }

    /// Envolve um cache existente.
    pub fn from_cache(cache: AssessmentCache<A>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Busca a avaliação de um texto. Veja [`AssessmentCache::get`].
    pub fn get(&self, text: &str) -> Option<A> {
        self.lock().get(text).cloned()
    }

    /// Insere ou substitui a avaliação de um texto. Veja [`AssessmentCache::set`].
    pub fn set(&self, text: &str, assessment: A, method: AnalysisMethod) {
        self.lock().set(text, assessment, method);
    }

    /// Verifica se existe uma entrada válida.
    pub fn contains(&self, text: &str) -> bool {
        self.lock().contains(text)
    }

    /// Invalida a entrada de um texto.
    pub fn invalidate(&self, text: &str) -> bool {
        self.lock().invalidate(text)
    }

    /// Remove entradas expiradas.
    pub fn purge_expired(&self) -> usize {
        self.lock().purge_expired()
    }

    /// Limpa todas as entradas.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Zera os contadores de hits e lookups.
    pub fn reset_stats(&self) {
        self.lock().reset_stats();
    }

    /// Retorna estatísticas do cache.
    pub fn stats(&self) -> CacheStats {
        self.lock().stats()
    }

    // Um panic em outra thread não deixa o cache em estado inconsistente:
    // nenhuma operação chama código externo enquanto segura o lock.
    fn lock(&self) -> MutexGuard<'_, AssessmentCache<A>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A> std::fmt::Debug for SharedAssessmentCache<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedAssessmentCache").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::clock::ManualClock;
    use crate::types::assessment::ComplexityLevel;

    #[test]
    fn test_clones_share_state() {
        let cache: SharedAssessmentCache = SharedAssessmentCache::new(10, Duration::from_secs(60));
        let other = cache.clone();

        cache.set(
            "problem",
            ComplexityAssessment::new(ComplexityLevel::Medium),
            AnalysisMethod::LocalNlp,
        );

        let cached = other.get("problem").unwrap();
        assert_eq!(cached.level, ComplexityLevel::Medium);
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn test_returned_value_is_a_copy() {
        let cache: SharedAssessmentCache = SharedAssessmentCache::new(10, Duration::from_secs(60));
        cache.set(
            "problem",
            ComplexityAssessment::new(ComplexityLevel::Low),
            AnalysisMethod::Fallback,
        );

        let mut cached = cache.get("problem").unwrap();
        cached.factors.push("mutated".to_string());

        assert!(cache.get("problem").unwrap().factors.is_empty());
    }

    #[test]
    fn test_expiry_through_handle() {
        let clock = ManualClock::new(0);
        let cache: SharedAssessmentCache<&'static str> =
            SharedAssessmentCache::with_clock(10, Duration::from_millis(100), clock.clone());

        cache.set("x", "value", AnalysisMethod::McpSampling);
        clock.advance_millis(150);

        assert!(!cache.contains("x"));
        assert_eq!(cache.purge_expired(), 1);
        assert_eq!(cache.stats().size, 0);
    }

    #[test]
    fn test_survives_poisoned_lock() {
        let cache: SharedAssessmentCache<u32> =
            SharedAssessmentCache::new(10, Duration::from_secs(60));
        cache.set("a", 1, AnalysisMethod::LocalNlp);

        let poisoner = cache.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(cache.get("a"), Some(1));
        cache.clear();
        assert_eq!(cache.stats().size, 0);
    }
}
