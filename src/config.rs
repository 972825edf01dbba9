//! Process configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Credential presence decides which generation route the service takes, so
//! it is captured once at start-up into [`ProviderCredentials`] and passed to
//! the service. Handlers never inspect the environment themselves. Parsing
//! goes through a lookup function so tests can feed values directly.

use std::path::PathBuf;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
pub const GOOGLE_API_KEY: &str = "GOOGLE_GENERATIVE_AI_API_KEY";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),
}

// =============================================================================
// PROVIDER CREDENTIALS
// =============================================================================

/// Credential values for each supported provider. Only presence matters for
/// routing; the `OpenAI` key is also handed to the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderCredentials {
    pub openai: Option<String>,
    pub anthropic: Option<String>,
    pub google: Option<String>,
}

impl ProviderCredentials {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Empty values count as absent.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self { openai: present(OPENAI_API_KEY), anthropic: present(ANTHROPIC_API_KEY), google: present(GOOGLE_API_KEY) }
    }

    #[must_use]
    pub fn none_present(&self) -> bool {
        self.openai.is_none() && self.anthropic.is_none() && self.google.is_none()
    }
}

// =============================================================================
// APP CONFIG
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub static_dir: PathBuf,
    pub credentials: ProviderCredentials,
}

impl AppConfig {
    /// Build the server config from environment variables.
    ///
    /// - `PORT`: listen port, default 3000
    /// - `QOTD_STATIC_DIR`: directory served at `/`, default `static`
    /// - `OPENAI_API_KEY`, `ANTHROPIC_API_KEY`, `GOOGLE_GENERATIVE_AI_API_KEY`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is not a valid port number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let static_dir = lookup("QOTD_STATIC_DIR").map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from);
        let credentials = ProviderCredentials::from_lookup(&lookup);
        Ok(Self { port, static_dir, credentials })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
