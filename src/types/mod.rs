//! Tipos compartilhados do complexity-cache.

pub mod assessment;
pub mod config;
pub mod errors;
pub mod method;
