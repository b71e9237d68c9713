//! Persisted user preferences.
//!
//! One TOML file under the platform config directory holds the model-variant
//! choice (and, optionally, an API key for setups without the environment
//! variable). Read at request-build time, written when the seeker changes
//! the model.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use zy_oracle::ModelVariant;

use crate::error::{SessionError, SessionResult};

/// Environment variable overriding the config directory, mainly for tests.
pub const CONFIG_DIR_ENV: &str = "ZHOUYI_CONFIG_DIR";

const FILE_NAME: &str = "config.toml";

/// User preferences surviving across sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Which model variant to query.
    #[serde(default)]
    pub model: ModelVariant,
    /// Optional API key; the `GEMINI_API_KEY` environment variable wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Preferences {
    /// The directory holding the preference file.
    pub fn config_dir() -> SessionResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        dirs::config_dir()
            .map(|dir| dir.join("zhouyi"))
            .ok_or(SessionError::NoConfigDir)
    }

    /// The preference file path.
    pub fn path() -> SessionResult<PathBuf> {
        Ok(Self::config_dir()?.join(FILE_NAME))
    }

    /// Load preferences, falling back to defaults when the file is missing.
    pub fn load() -> SessionResult<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load preferences from an explicit path.
    pub fn load_from(path: &Path) -> SessionResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Persist preferences to the default path.
    pub fn save(&self) -> SessionResult<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist preferences to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> SessionResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let prefs = Preferences::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.model, ModelVariant::Flash);
    }

    #[test]
    fn round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let prefs = Preferences {
            model: ModelVariant::Pro,
            api_key: Some("k".into()),
        };
        prefs.save_to(&path).unwrap();

        let loaded = Preferences::load_from(&path).unwrap();
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn model_alone_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let prefs = Preferences {
            model: ModelVariant::Pro,
            api_key: None,
        };
        prefs.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("pro"));
        assert!(!content.contains("api_key"));

        assert_eq!(Preferences::load_from(&path).unwrap().model, ModelVariant::Pro);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "model = [not toml").unwrap();
        assert!(matches!(
            Preferences::load_from(&path),
            Err(SessionError::PrefsParse(_))
        ));
    }
}
