use crate::prompt_engine::llm::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use secrecy::SecretString;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_MODEL: &str = "GEMINI_MODEL";
pub const ENV_BASE_URL: &str = "GEMINI_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "REPORT_TIMEOUT_SECS";
pub const ENV_MAX_RETRIES: &str = "REPORT_MAX_RETRIES";
pub const ENV_BIND_ADDR: &str = "REPORT_BIND_ADDR";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_MAX_RETRIES: u8 = 2;
pub const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 500;
pub const DEFAULT_RETRY_MAX_DELAY_MS: u64 = 8_000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Runtime settings for the report pipeline and its HTTP boundary
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Only ever sourced from the environment, never from a file
    #[serde(skip)]
    pub gemini_api_key: Option<SecretString>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub request_timeout_secs: u64,
    pub max_retries: u8,
    pub retry_base_delay_ms: u64,
    pub retry_max_delay_ms: u64,
    pub bind_addr: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: DEFAULT_MODEL.to_string(),
            gemini_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base_delay_ms: DEFAULT_RETRY_BASE_DELAY_MS,
            retry_max_delay_ms: DEFAULT_RETRY_MAX_DELAY_MS,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl ReportConfig {
    /// Load from an optional JSON file, then apply process environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;

        tracing::info!(
            "Config loaded: model={}, timeout={}s, max_retries={}, api_key={}",
            config.gemini_model,
            config.request_timeout_secs,
            config.max_retries,
            if config.has_api_key() { "set" } else { "missing" }
        );
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: ReportConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        normalize_config(&mut config);
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in production)
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY).filter(|k| !k.trim().is_empty()) {
            self.gemini_api_key = Some(SecretString::from(key.trim().to_string()));
        }
        if let Some(model) = lookup(ENV_MODEL).filter(|m| !m.trim().is_empty()) {
            self.gemini_model = model.trim().to_string();
        }
        if let Some(url) = lookup(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            self.gemini_base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.request_timeout_secs = parse_env(ENV_TIMEOUT_SECS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MAX_RETRIES) {
            self.max_retries = parse_env(ENV_MAX_RETRIES, &raw)?;
        }
        if let Some(addr) = lookup(ENV_BIND_ADDR).filter(|a| !a.trim().is_empty()) {
            self.bind_addr = addr.trim().to_string();
        }
        normalize_config(self);
        Ok(())
    }

    pub fn has_api_key(&self) -> bool {
        self.gemini_api_key.is_some()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn retry_base_delay(&self) -> Duration {
        Duration::from_millis(self.retry_base_delay_ms)
    }

    pub fn retry_max_delay(&self) -> Duration {
        Duration::from_millis(self.retry_max_delay_ms)
    }
}

fn parse_env<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

fn normalize_config(config: &mut ReportConfig) {
    config.gemini_base_url = config.gemini_base_url.trim_end_matches('/').to_string();
    if config.gemini_model.trim().is_empty() {
        config.gemini_model = DEFAULT_MODEL.to_string();
    }
    if config.request_timeout_secs == 0 {
        config.request_timeout_secs = 1;
    }
    if config.retry_max_delay_ms < config.retry_base_delay_ms {
        config.retry_max_delay_ms = config.retry_base_delay_ms;
    }
}
