//! # Intake Configuration
//!
//! Where the form posts to, and how long it waits.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     ADMISSION_API_ENDPOINT=https://host/api/admissions                 │
//! │     ADMISSION_API_BASE_URL=https://host                                │
//! │     ADMISSION_API_TIMEOUT_SECS=30                                      │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/intake/intake.toml (Linux)                               │
//! │     ~/Library/Application Support/org.growwithguidance.intake/ (macOS) │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     endpoint = "/api/admissions", timeout = 30s                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # intake.toml
//! [api]
//! endpoint = "https://admission-form-backend-4sz2.onrender.com/api/admissions"
//! timeout_secs = 30
//! ```
//!
//! ## Endpoint Resolution
//! An absolute `endpoint` is used as-is. A relative one (the default
//! `/api/admissions`) is joined onto `base_url`; without a base URL it cannot
//! be resolved and submission fails with [`SubmitError::InvalidUrl`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{SubmitError, SubmitResult};

/// Endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "/api/admissions";

const ENV_ENDPOINT: &str = "ADMISSION_API_ENDPOINT";
const ENV_BASE_URL: &str = "ADMISSION_API_BASE_URL";
const ENV_TIMEOUT: &str = "ADMISSION_API_TIMEOUT_SECS";

// =============================================================================
// API Settings
// =============================================================================

/// Settings for the outbound admissions API call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Absolute URL, or a path resolved against `base_url`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Origin that relative endpoints are joined onto.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Whole-request timeout (seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            endpoint: default_endpoint(),
            base_url: None,
            timeout_secs: default_timeout(),
        }
    }
}

// =============================================================================
// Main Intake Configuration
// =============================================================================

/// Complete intake configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeConfig {
    #[serde(default)]
    pub api: ApiSettings,
}

impl IntakeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config posting to `endpoint` with every other setting at its default.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        IntakeConfig {
            api: ApiSettings {
                endpoint: endpoint.into(),
                ..Default::default()
            },
        }
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (intake.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> SubmitResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading intake config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load intake config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> SubmitResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| SubmitError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SubmitError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| SubmitError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Intake config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> SubmitResult<()> {
        let endpoint = self.api.endpoint.trim();
        if endpoint.is_empty() {
            return Err(SubmitError::InvalidConfig("api.endpoint must not be empty".into()));
        }

        if self.api.timeout_secs == 0 {
            return Err(SubmitError::InvalidConfig(
                "api.timeout_secs must be greater than 0".into(),
            ));
        }

        match Url::parse(endpoint) {
            Ok(url) => require_http(&url)?,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                if !endpoint.starts_with('/') {
                    return Err(SubmitError::InvalidUrl(format!(
                        "Relative endpoint must start with '/', got: {}",
                        endpoint
                    )));
                }
            }
            Err(e) => return Err(e.into()),
        }

        if let Some(ref base) = self.api.base_url {
            require_http(&Url::parse(base)?)?;
        }

        Ok(())
    }

    /// Resolves the URL the form posts to.
    pub fn endpoint_url(&self) -> SubmitResult<Url> {
        let endpoint = self.api.endpoint.trim();
        match Url::parse(endpoint) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base = self.api.base_url.as_deref().ok_or_else(|| {
                    SubmitError::InvalidUrl(format!(
                        "Relative endpoint '{}' needs api.base_url",
                        endpoint
                    ))
                })?;
                Ok(Url::parse(base)?.join(endpoint)?)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    /// Applies overrides from a key lookup (the process environment in
    /// production).
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            debug!(endpoint = %endpoint, "Overriding endpoint from environment");
            self.api.endpoint = endpoint;
        }

        if let Some(base) = lookup(ENV_BASE_URL) {
            debug!(base_url = %base, "Overriding base URL from environment");
            self.api.base_url = Some(base);
        }

        if let Some(timeout) = lookup(ENV_TIMEOUT) {
            match timeout.parse::<u64>() {
                Ok(secs) => self.api.timeout_secs = secs,
                Err(_) => warn!(value = %timeout, "Ignoring non-numeric timeout in environment"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "growwithguidance", "intake")
            .map(|dirs| dirs.config_dir().join("intake.toml"))
    }
}

fn require_http(url: &Url) -> SubmitResult<()> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(SubmitError::InvalidUrl(format!(
            "URL must use http or https, got: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = IntakeConfig::default();
        assert_eq!(config.api.endpoint, "/api/admissions");
        assert_eq!(config.api.base_url, None);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = IntakeConfig::default();

        config.api.endpoint = "   ".into();
        assert!(config.validate().is_err());

        config.api.endpoint = "api/admissions".into();
        assert!(config.validate().is_err());

        config.api.endpoint = "ftp://example.com/api".into();
        assert!(config.validate().is_err());

        config.api.endpoint = "https://example.com/api/admissions".into();
        assert!(config.validate().is_ok());

        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_endpoint_resolution() {
        let absolute =
            IntakeConfig::with_endpoint("https://admission-form-backend-4sz2.onrender.com/api/admissions");
        assert_eq!(
            absolute.endpoint_url().unwrap().as_str(),
            "https://admission-form-backend-4sz2.onrender.com/api/admissions"
        );

        let mut relative = IntakeConfig::default();
        assert!(matches!(
            relative.endpoint_url(),
            Err(SubmitError::InvalidUrl(_))
        ));

        relative.api.base_url = Some("http://localhost:8080/ignored/path".into());
        assert_eq!(
            relative.endpoint_url().unwrap().as_str(),
            "http://localhost:8080/api/admissions"
        );
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("ADMISSION_API_ENDPOINT", "https://api.example.com/apply"),
            ("ADMISSION_API_TIMEOUT_SECS", "5"),
        ]);

        let mut config = IntakeConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.endpoint, "https://api.example.com/apply");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.base_url, None);
    }

    #[test]
    fn test_bad_timeout_override_is_ignored() {
        let mut config = IntakeConfig::default();
        config.apply_overrides(|key| (key == "ADMISSION_API_TIMEOUT_SECS").then(|| "soon".into()));
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_toml_round_trip_through_file() {
        let dir = std::env::temp_dir().join(format!("intake-config-{}", std::process::id()));
        let path = dir.join("intake.toml");

        let mut config = IntakeConfig::with_endpoint("/api/admissions");
        config.api.base_url = Some("https://forms.example.org".into());
        config.save(Some(path.clone())).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[api]"));

        let loaded: IntakeConfig = toml::from_str(&contents).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: IntakeConfig = toml::from_str("[api]\ntimeout_secs = 10\n").unwrap();
        assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.api.timeout_secs, 10);

        let empty: IntakeConfig = toml::from_str("").unwrap();
        assert_eq!(empty, IntakeConfig::default());
    }

    #[test]
    fn test_load_or_default_falls_back_on_broken_file() {
        let dir = std::env::temp_dir().join(format!("intake-broken-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("intake.toml");
        std::fs::write(&path, "[api]\ntimeout_secs = 0\n").unwrap();

        assert!(IntakeConfig::load(Some(path.clone())).is_err());
        assert_eq!(IntakeConfig::load_or_default(Some(path)).api.timeout_secs, 30);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
