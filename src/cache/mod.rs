//! Cache LRU com TTL para avaliações de complexidade.
//!
//! Este módulo armazena avaliações já calculadas, indexadas pelo hash do
//! texto de entrada, evitando reclassificar o mesmo problema. Entradas são
//! removidas por recência (LRU), por idade (TTL, verificada apenas na
//! leitura), por sobrescrita ou por `clear`.

mod clock;
mod key;
mod lru;
mod shared;
mod stats;

pub use clock::{Clock, ManualClock, SystemClock};
pub use key::CacheKey;
pub use self::lru::{AssessmentCache, CacheEntry};
pub use shared::SharedAssessmentCache;
pub use stats::{CacheStats, MethodDistribution};
