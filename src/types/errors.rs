//! Tipos de erro do complexity-cache.
//!
//! As operações do cache são totais e nunca falham; estes erros cobrem
//! apenas a camada ao redor (configuração, logging, serialização).

use thiserror::Error;

/// Tipo de resultado padrão do crate.
pub type CacheResult<T> = Result<T, CacheError>;

/// Erros possíveis fora das operações do cache.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Método de análise desconhecido: '{0}'")]
    UnknownMethod(String),

    #[error("Erro ao inicializar logging: {0}")]
    Logging(String),

    #[error("{0}")]
    Other(String),
}

impl CacheError {
    /// Cria um erro genérico.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}
