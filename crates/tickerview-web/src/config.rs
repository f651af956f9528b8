use std::fmt::{Debug, Formatter};
use std::net::SocketAddr;

use clap::Parser;
use tickerview_core::adapters::DEFAULT_BASE_URL;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_BIND: &str = "127.0.0.1:5001";

/// Secondary variable checked for the API key when the prefixed one is unset.
pub const LEGACY_API_KEY_VAR: &str = "ALPHAVANTAGE_API_KEY";

/// Command-line flags; each falls back to an environment variable.
#[derive(Debug, Parser)]
#[command(
    name = "tickerview",
    version,
    about = "Intraday stock quotes over HTTP with a generated fallback"
)]
pub struct Cli {
    /// Socket address to listen on.
    #[arg(long, env = "TICKERVIEW_BIND", default_value = DEFAULT_BIND)]
    pub bind: String,

    /// Alpha Vantage API key; without one every request is served generated data.
    #[arg(long, env = "TICKERVIEW_ALPHAVANTAGE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the quote provider.
    #[arg(long, env = "TICKERVIEW_PROVIDER_URL", default_value = DEFAULT_BASE_URL)]
    pub provider_url: String,
}

impl Cli {
    pub fn resolve(self) -> Result<ServerConfig, ConfigError> {
        let legacy_key = std::env::var(LEGACY_API_KEY_VAR).ok();
        self.resolve_with(legacy_key)
    }

    pub fn resolve_with(self, legacy_key: Option<String>) -> Result<ServerConfig, ConfigError> {
        let bind = self
            .bind
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddress {
                value: self.bind.clone(),
            })?;

        let provider_url = validate_provider_url(&self.provider_url)?;

        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .or_else(|| legacy_key.filter(|key| !key.trim().is_empty()));

        Ok(ServerConfig {
            bind,
            api_key,
            provider_url,
        })
    }
}

fn validate_provider_url(value: &str) -> Result<String, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidProviderUrl {
        value: value.to_owned(),
        reason: reason.to_owned(),
    };

    let parsed = Url::parse(value.trim()).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }

    Ok(parsed.as_str().trim_end_matches('/').to_owned())
}

/// Resolved server settings.
#[derive(Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub api_key: Option<String>,
    pub provider_url: String,
}

impl Debug for ServerConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("bind", &self.bind)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("provider_url", &self.provider_url)
            .finish()
    }
}
