#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::{DevUrlError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const MAX_TIMEOUT_SECONDS: u64 = 600;

/// Connection settings for the remote DevURL service.
#[derive(Clone)]
pub struct ServiceSettings {
    pub base_url: String,
    pub session_token: String,
    pub timeout_seconds: u64,
}

impl std::fmt::Debug for ServiceSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceSettings")
            .field("base_url", &self.base_url)
            .field("session_token", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl ServiceSettings {
    /// Explicit values (flags or env vars) take precedence over the file.
    pub fn merge(
        url: Option<String>,
        session_token: Option<String>,
        timeout_seconds: Option<u64>,
        file: Option<TomlConfig>,
    ) -> Result<Self> {
        let file = file.unwrap_or_default().service;

        let base_url = url.or(file.url).ok_or_else(|| {
            DevUrlError::config("no service URL: pass --url, set DEVURL_URL or add [service].url")
        })?;
        let session_token = session_token.or(file.session_token).ok_or_else(|| {
            DevUrlError::config(
                "no session token: pass --token, set DEVURL_TOKEN or add [service].session_token",
            )
        })?;
        let timeout_seconds = timeout_seconds
            .or(file.timeout_seconds)
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        Ok(Self {
            base_url,
            session_token,
            timeout_seconds,
        })
    }
}

impl ConfigProvider for ServiceSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn session_token(&self) -> &str {
        &self.session_token
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for ServiceSettings {
    fn validate(&self) -> Result<()> {
        validate_url("service.url", &self.base_url)?;
        validate_non_empty_string("service.session_token", &self.session_token)?;
        validate_range(
            "service.timeout_seconds",
            self.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        Ok(())
    }
}
