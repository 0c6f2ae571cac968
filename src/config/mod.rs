//! Configuration management for cirrusop

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::client::pagination::DEFAULT_PAGE_SIZE;
use crate::error::{ConfigError, Result};

/// Default GraphQL API host
pub const DEFAULT_API_HOST: &str = "https://api.cirrus-ci.com";

/// Default web dashboard host used for navigation links
pub const DEFAULT_WEB_HOST: &str = "https://cirrus-ci.com";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Personal API token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Default organization name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    /// Custom GraphQL API host (development/testing)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Custom web dashboard host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_host: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Default page size for paginated requests
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            page_size: default_page_size(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".cirrusop").join("config.yaml"))
    }

    /// Resolve an optional override to a concrete config path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional override path
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        if config.preferences.page_size == 0 {
            return Err(
                ConfigError::Invalid("page_size must be greater than zero".to_string()).into(),
            );
        }

        Ok(config)
    }

    /// Save configuration to an optional override path
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Token lives in this file
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Validate that an API token is present
    pub fn validate_auth(&self) -> Result<()> {
        match self.api_token.as_deref() {
            Some(token) if !token.trim().is_empty() => Ok(()),
            _ => Err(ConfigError::MissingToken.into()),
        }
    }

    /// API host, falling back to the public endpoint
    pub fn api_host(&self) -> &str {
        self.api_host.as_deref().unwrap_or(DEFAULT_API_HOST)
    }

    /// Web dashboard host, falling back to the public dashboard
    pub fn web_host(&self) -> &str {
        self.web_host.as_deref().unwrap_or(DEFAULT_WEB_HOST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api_token.is_none());
        assert!(config.organization.is_none());
        assert_eq!(config.preferences.page_size, 100);
        assert_eq!(config.api_host(), DEFAULT_API_HOST);
        assert_eq!(config.web_host(), DEFAULT_WEB_HOST);
    }

    #[test]
    fn test_validate_auth() {
        let mut config = Config::default();
        assert!(config.validate_auth().is_err());

        config.api_token = Some("   ".to_string());
        assert!(config.validate_auth().is_err());

        config.api_token = Some("secret".to_string());
        assert!(config.validate_auth().is_ok());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = Config {
            api_token: Some("token-1".to_string()),
            organization: Some("cirruslabs".to_string()),
            api_host: Some("http://localhost:8080".to_string()),
            ..Config::default()
        };
        config.save_to(path.clone()).unwrap();

        let loaded = Config::load_from(path).unwrap();
        assert_eq!(loaded.api_token.as_deref(), Some("token-1"));
        assert_eq!(loaded.organization.as_deref(), Some("cirruslabs"));
        assert_eq!(loaded.api_host(), "http://localhost:8080");
        assert_eq!(loaded.preferences.page_size, 100);
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_config_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        Config::default().save_to(path.clone()).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Config::load_from(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, crate::error::Error::Config(ConfigError::NotFound)));
    }

    #[test]
    fn test_load_rejects_zero_page_size() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "api_token: t\npreferences:\n  page_size: 0\n").unwrap();

        let err = Config::load_from(path).unwrap_err();
        assert!(matches!(err, crate::error::Error::Config(ConfigError::Invalid(_))));
    }
}
