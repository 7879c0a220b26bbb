//! Método de análise que produziu uma avaliação.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::types::errors::CacheError;

/// Técnica externa que gerou uma avaliação de complexidade.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisMethod {
    /// Classificação local por heurísticas de NLP.
    LocalNlp,
    /// Classificação delegada ao cliente via MCP sampling.
    McpSampling,
    /// Heurística de fallback quando os outros métodos não respondem.
    Fallback,
}

impl AnalysisMethod {
    /// Todos os métodos, na ordem da tabela de distribuição.
    pub const ALL: [AnalysisMethod; 3] = [
        AnalysisMethod::LocalNlp,
        AnalysisMethod::McpSampling,
        AnalysisMethod::Fallback,
    ];

    /// Tag textual do método.
    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisMethod::LocalNlp => "local-nlp",
            AnalysisMethod::McpSampling => "mcp-sampling",
            AnalysisMethod::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for AnalysisMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisMethod {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnalysisMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| CacheError::UnknownMethod(s.to_string()))
    }
}
