use crate::utils::error::{DevUrlError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\$\{([^}]+)\}").expect("valid regex")
});

/// On-disk configuration. Every field is optional; flags and env vars win.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub service: ServiceSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceSection {
    pub url: Option<String>,
    pub session_token: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    /// Loads the config from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            DevUrlError::config(format!(
                "failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses the config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content)
            .map_err(|e| DevUrlError::config(format!("TOML parsing error: {}", e)))
    }

    /// Expands `${VAR}` references; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}
