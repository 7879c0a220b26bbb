//! Inicialização de logging.

use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::types::config::GeneralConfig;
use crate::{CacheError, CacheResult};

/// Monta o filtro de log para o crate.
///
/// `RUST_LOG` continua valendo para outros alvos; o nível do crate vem da
/// configuração. Um nível inválido cai para `info`.
pub fn env_filter(log_level: &str) -> EnvFilter {
    let directive: Result<Directive, _> = format!("complexity_cache={}", log_level)
        .parse()
        .or_else(|_| "complexity_cache=info".parse());

    match directive {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Instala o subscriber global escrevendo em stderr, em texto ou JSON.
///
/// Falha se um subscriber global já estiver instalado.
pub fn init(config: &GeneralConfig) -> CacheResult<()> {
    let filter = env_filter(&config.log_level);
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.log_format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        "text" => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        other => {
            return Err(CacheError::config(format!("Unknown log format: {other}")));
        }
    };

    result.map_err(|e| CacheError::Logging(e.to_string()))
}
