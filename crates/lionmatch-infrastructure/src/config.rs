//! Configuration loading.
//!
//! Two files under the user config directory (`~/.config/lionmatch/`):
//!
//! - `config.toml` — tunables ([`AppConfig`]); missing file or missing keys
//!   fall back to defaults.
//! - `secret.json` — backend coordinates ([`BackendSecrets`]); when the file
//!   is absent the `LIONMATCH_SUPABASE_URL` / `LIONMATCH_SUPABASE_ANON_KEY`
//!   environment variables are used instead.
//!
//! The base directory is overridable for tests.

use std::path::{Path, PathBuf};
use std::time::Duration;

use lionmatch_core::discovery::DiscoverySettings;
use lionmatch_core::error::{MatchError, Result};
use serde::{Deserialize, Serialize};

/// Directory name under the platform config dir.
const CONFIG_DIR_NAME: &str = "lionmatch";
const CONFIG_FILE: &str = "config.toml";
const SECRET_FILE: &str = "secret.json";

/// Env fallbacks for [`BackendSecrets`].
const ENV_URL: &str = "LIONMATCH_SUPABASE_URL";
const ENV_ANON_KEY: &str = "LIONMATCH_SUPABASE_ANON_KEY";

fn default_home_location() -> String {
    "León, Guanajuato".to_string()
}

fn default_batch_size() -> usize {
    lionmatch_core::discovery::DEFAULT_BATCH_SIZE
}

fn default_settle_delay_ms() -> u64 {
    300
}

/// Application tunables loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_home_location")]
    pub home_location: String,
    #[serde(default = "default_batch_size")]
    pub candidate_batch_size: usize,
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            home_location: default_home_location(),
            candidate_batch_size: default_batch_size(),
            settle_delay_ms: default_settle_delay_ms(),
        }
    }
}

impl AppConfig {
    /// Loads the config, falling back to defaults when the file is missing.
    ///
    /// # Arguments
    ///
    /// * `base_dir` - Override for the config directory (for testing)
    pub fn load(base_dir: Option<&Path>) -> Result<Self> {
        let path = config_path(base_dir, CONFIG_FILE)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .map_err(|e| MatchError::config(format!("failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&raw)
            .map_err(|e| MatchError::config(format!("invalid {}: {}", path.display(), e)))
    }

    /// The discovery settings this config describes.
    pub fn discovery_settings(&self) -> DiscoverySettings {
        DiscoverySettings {
            home_location: self.home_location.clone(),
            batch_size: self.candidate_batch_size,
            settle_delay: Duration::from_millis(self.settle_delay_ms),
        }
    }
}

/// Backend coordinates loaded from `secret.json` or the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSecrets {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`
    pub url: String,
    /// Publishable (anon) API key
    pub anon_key: String,
}

impl BackendSecrets {
    /// Loads the secrets file, falling back to environment variables.
    ///
    /// # Arguments
    ///
    /// * `base_dir` - Override for the config directory (for testing)
    pub fn load(base_dir: Option<&Path>) -> Result<Self> {
        let path = config_path(base_dir, SECRET_FILE)?;
        if path.exists() {
            let raw = std::fs::read_to_string(&path).map_err(|e| {
                MatchError::config(format!("failed to read {}: {}", path.display(), e))
            })?;
            return serde_json::from_str(&raw)
                .map_err(|e| MatchError::config(format!("invalid {}: {}", path.display(), e)));
        }

        match (std::env::var(ENV_URL), std::env::var(ENV_ANON_KEY)) {
            (Ok(url), Ok(anon_key)) => Ok(Self { url, anon_key }),
            _ => Err(MatchError::config(format!(
                "no {} found and {}/{} not set",
                path.display(),
                ENV_URL,
                ENV_ANON_KEY
            ))),
        }
    }
}

fn config_path(base_dir: Option<&Path>, file: &str) -> Result<PathBuf> {
    let dir = match base_dir {
        Some(dir) => dir.to_path_buf(),
        None => dirs::config_dir()
            .ok_or_else(|| MatchError::config("no config directory on this platform"))?
            .join(CONFIG_DIR_NAME),
    };
    Ok(dir.join(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_app_config_defaults_when_missing() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load(Some(dir.path())).unwrap();
        assert_eq!(config.home_location, "León, Guanajuato");
        assert_eq!(config.candidate_batch_size, 20);
        assert_eq!(config.settle_delay_ms, 300);
    }

    #[test]
    fn test_app_config_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "home_location = \"Guadalajara\"\n",
        )
        .unwrap();

        let config = AppConfig::load(Some(dir.path())).unwrap();
        assert_eq!(config.home_location, "Guadalajara");
        assert_eq!(config.candidate_batch_size, 20);
    }

    #[test]
    fn test_app_config_invalid_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.toml"), "candidate_batch_size = \"x\"").unwrap();

        let err = AppConfig::load(Some(dir.path())).unwrap_err();
        assert!(matches!(err, MatchError::Config(_)));
    }

    #[test]
    fn test_discovery_settings_conversion() {
        let config = AppConfig {
            home_location: "Testville".to_string(),
            candidate_batch_size: 5,
            settle_delay_ms: 10,
        };
        let settings = config.discovery_settings();
        assert_eq!(settings.home_location, "Testville");
        assert_eq!(settings.batch_size, 5);
        assert_eq!(settings.settle_delay, Duration::from_millis(10));
    }

    #[test]
    fn test_secrets_from_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("secret.json"),
            r#"{"url":"https://example.supabase.co","anon_key":"key"}"#,
        )
        .unwrap();

        let secrets = BackendSecrets::load(Some(dir.path())).unwrap();
        assert_eq!(secrets.url, "https://example.supabase.co");
        assert_eq!(secrets.anon_key, "key");
    }

    #[test]
    fn test_secrets_malformed_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("secret.json"), "{").unwrap();

        let err = BackendSecrets::load(Some(dir.path())).unwrap_err();
        assert!(matches!(err, MatchError::Config(_)));
    }
}
