//! Avaliação de complexidade produzida por um classificador externo.
//!
//! O cache nunca inspeciona este valor; o tipo existe como payload padrão
//! para quem não precisa de um tipo próprio.

use serde::{Deserialize, Serialize};

/// Resultado de uma avaliação de complexidade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityAssessment {
    /// Nível de complexidade detectado.
    pub level: ComplexityLevel,

    /// Fatores que levaram à classificação.
    #[serde(default)]
    pub factors: Vec<String>,

    /// Técnicas sugeridas para o problema.
    #[serde(default)]
    pub suggested_techniques: Vec<String>,
}

impl ComplexityAssessment {
    /// Cria uma avaliação sem fatores.
    pub fn new(level: ComplexityLevel) -> Self {
        Self {
            level,
            factors: Vec::new(),
            suggested_techniques: Vec::new(),
        }
    }

    /// Define os fatores.
    pub fn with_factors(mut self, factors: Vec<String>) -> Self {
        self.factors = factors;
        self
    }

    /// Define as técnicas sugeridas.
    pub fn with_suggested_techniques(mut self, techniques: Vec<String>) -> Self {
        self.suggested_techniques = techniques;
        self
    }
}

/// Nível de complexidade.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityLevel {
    /// Problema simples.
    Low,
    /// Complexidade moderada.
    Medium,
    /// Alta complexidade, várias dimensões interagindo.
    High,
}

impl std::fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplexityLevel::Low => write!(f, "low"),
            ComplexityLevel::Medium => write!(f, "medium"),
            ComplexityLevel::High => write!(f, "high"),
        }
    }
}
