//! # complexity-cache
//!
//! Cache limitado e sensível ao tempo para avaliações de complexidade.
//!
//! Mapeia o texto de um problema para a avaliação já calculada por um
//! classificador externo, removendo entradas por recência (LRU) e por idade
//! (TTL), e reportando taxa de acerto e distribuição por método de análise.
//!
//! ## Módulos
//!
//! - [`cache`] - Cache LRU com TTL e estatísticas
//! - [`logging`] - Inicialização do tracing
//! - [`types`] - Tipos compartilhados (configuração, erros, métodos)
//!
//! ## Exemplo
//!
//! ```
//! use std::time::Duration;
//! use complexity_cache::{AnalysisMethod, AssessmentCache, ComplexityAssessment, ComplexityLevel};
//!
//! let mut cache: AssessmentCache = AssessmentCache::new(100, Duration::from_secs(60));
//! cache.set(
//!     "How can we reduce onboarding time?",
//!     ComplexityAssessment::new(ComplexityLevel::Medium),
//!     AnalysisMethod::LocalNlp,
//! );
//!
//! assert!(cache.get("How can we reduce onboarding time?").is_some());
//! assert_eq!(cache.stats().hit_rate, 1.0);
//! ```

pub mod cache;
pub mod logging;
pub mod types;

pub use cache::{AssessmentCache, CacheKey, CacheStats, MethodDistribution, SharedAssessmentCache};
pub use types::assessment::{ComplexityAssessment, ComplexityLevel};
pub use types::config::Config;
pub use types::errors::{CacheError, CacheResult};
pub use types::method::AnalysisMethod;
