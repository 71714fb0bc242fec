//! Server configuration from the environment.

use arcade_core::Tier;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a port number, got '{0}'")]
    InvalidPort(String),

    #[error("ARCADE_TIER must be 'trial' or 'pro', got '{0}'")]
    InvalidTier(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Plan the server gates games with.
    pub tier: Tier,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            tier: Tier::Pro,
        }
    }
}

impl Config {
    /// Read `HOST`, `PORT` and `ARCADE_TIER`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };
        let tier = match lookup("ARCADE_TIER") {
            Some(raw) => Tier::from_str(raw.trim()).ok_or(ConfigError::InvalidTier(raw))?,
            None => defaults.tier,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            tier,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
