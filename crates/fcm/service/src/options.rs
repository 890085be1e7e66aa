use std::path::{Path, PathBuf};
use std::time::Duration;

use fcm_client::ClientSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "FCM_CONFIG";

/// Environment variable that overrides the credentials path.
pub const CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Config file not found at {0}")]
    NotFound(PathBuf),
}

/// Module options: where the service account lives and how to reach FCM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FcmOptions {
    /// Path to the Firebase service account JSON.
    pub firebase_specs_path: PathBuf,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_iid_url")]
    pub iid_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    fcm_client::DEFAULT_BASE_URL.to_string()
}

fn default_iid_url() -> String {
    fcm_client::DEFAULT_IID_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl FcmOptions {
    /// Options with defaults for everything but the credentials path.
    pub fn new(firebase_specs_path: impl Into<PathBuf>) -> Self {
        Self {
            firebase_specs_path: firebase_specs_path.into(),
            project_id: None,
            base_url: default_base_url(),
            iid_url: default_iid_url(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Load from `path`, else `$FCM_CONFIG`, else the default location.
    ///
    /// `$GOOGLE_APPLICATION_CREDENTIALS` replaces the credentials path.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => std::env::var_os(CONFIG_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(Self::config_path),
        };

        let mut options = Self::from_file(&config_path)?;
        if let Some(credentials) = std::env::var_os(CREDENTIALS_ENV) {
            options.firebase_specs_path = PathBuf::from(credentials);
        }
        Ok(options)
    }

    /// Parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("/etc"))
            .join("fcm")
            .join("config.toml")
    }

    /// Settings for the HTTP messaging client.
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.base_url.clone(),
            iid_url: self.iid_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            project_id: self.project_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "firebase_specs_path = \"/secrets/firebase.json\"\n").unwrap();

        let options = FcmOptions::from_file(&path).unwrap();
        assert_eq!(options, FcmOptions::new("/secrets/firebase.json"));
        assert_eq!(options.client_settings().timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
firebase_specs_path = "firebase.json"
project_id = "my-project"
base_url = "http://localhost:9000/"
timeout_secs = 5
"#,
        )
        .unwrap();

        let settings = FcmOptions::from_file(&path).unwrap().client_settings();
        assert_eq!(settings.project_id.as_deref(), Some("my-project"));
        assert_eq!(settings.base_url, "http://localhost:9000/");
        assert_eq!(settings.iid_url, fcm_client::DEFAULT_IID_URL);
        assert_eq!(settings.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(
            FcmOptions::from_file(&path),
            Err(ConfigError::NotFound(p)) if p == path
        ));
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timeout_secs = \"soon\"").unwrap();
        assert!(matches!(
            FcmOptions::from_file(&path),
            Err(ConfigError::ParseError(_))
        ));
    }
}
