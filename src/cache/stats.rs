//! Estatísticas do cache.

use serde::{Deserialize, Serialize};

use crate::types::method::AnalysisMethod;
use crate::CacheResult;

/// Quantidade de entradas atualmente em cache por método de análise.
///
/// Reflete o conteúdo vivo do cache, não o histórico de inserções.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDistribution {
    #[serde(rename = "local-nlp")]
    pub local_nlp: usize,

    #[serde(rename = "mcp-sampling")]
    pub mcp_sampling: usize,

    #[serde(rename = "fallback")]
    pub fallback: usize,
}

impl MethodDistribution {
    /// Contagem de um método.
    pub fn get(&self, method: AnalysisMethod) -> usize {
        self[method]
    }

    /// Soma de todas as contagens.
    pub fn total(&self) -> usize {
        self.local_nlp + self.mcp_sampling + self.fallback
    }

    fn slot(&mut self, method: AnalysisMethod) -> &mut usize {
        match method {
            AnalysisMethod::LocalNlp => &mut self.local_nlp,
            AnalysisMethod::McpSampling => &mut self.mcp_sampling,
            AnalysisMethod::Fallback => &mut self.fallback,
        }
    }

    pub(crate) fn increment(&mut self, method: AnalysisMethod) {
        *self.slot(method) += 1;
    }

    pub(crate) fn decrement(&mut self, method: AnalysisMethod) {
        let slot = self.slot(method);
        *slot = slot.saturating_sub(1);
    }
}

impl std::ops::Index<AnalysisMethod> for MethodDistribution {
    type Output = usize;

    fn index(&self, method: AnalysisMethod) -> &usize {
        match method {
            AnalysisMethod::LocalNlp => &self.local_nlp,
            AnalysisMethod::McpSampling => &self.mcp_sampling,
            AnalysisMethod::Fallback => &self.fallback,
        }
    }
}

/// Fotografia das estatísticas do cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Número atual de entradas.
    pub size: usize,

    /// Capacidade máxima.
    pub max_size: usize,

    /// Taxa de acerto (`hits / lookups`, 0 sem lookups).
    pub hit_rate: f64,

    /// Distribuição das entradas atuais por método.
    pub method_distribution: MethodDistribution,

    /// Número de acertos (cache hits).
    pub hits: u64,

    /// Número total de lookups.
    pub lookups: u64,
}

impl CacheStats {
    /// Número de erros (cache misses).
    pub fn misses(&self) -> u64 {
        self.lookups.saturating_sub(self.hits)
    }

    /// Serializa as estatísticas em JSON para diagnóstico.
    pub fn to_json(&self) -> CacheResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Calcula a taxa de acerto.
pub(crate) fn hit_rate(hits: u64, lookups: u64) -> f64 {
    if lookups == 0 {
        0.0
    } else {
        hits as f64 / lookups as f64
    }
}
