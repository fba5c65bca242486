use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the question-answering backend. `None` means offline
    /// (scripted) mode.
    pub backend_url: Option<String>,

    /// Milliseconds between revealed characters of an answer.
    #[serde(default = "default_reveal_interval_ms")]
    pub reveal_interval_ms: u64,

    #[serde(default)]
    pub theme: ThemeChoice,

    /// Scripture pre-selected on startup; the picker is shown when unset.
    pub default_scripture: Option<String>,
}

fn default_reveal_interval_ms() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: None,
            reveal_interval_ms: default_reveal_interval_ms(),
            theme: ThemeChoice::default(),
            default_scripture: None,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/versewise");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn reveal_interval(&self) -> Duration {
        Duration::from_millis(self.reveal_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/versewise/config.toml"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.reveal_interval_ms, 10);
        assert_eq!(config.reveal_interval(), Duration::from_millis(10));
        assert_eq!(config.theme, ThemeChoice::Dark);
        assert!(config.backend_url.is_none());
        assert!(config.default_scripture.is_none());
    }

    #[test]
    fn test_minimal_toml_fills_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_full_toml_parses() {
        let config_content = r#"
backend_url = "http://localhost:8000"
reveal_interval_ms = 20
theme = "light"
default_scripture = "bhagavad-gita"
"#;

        let config: Config = toml::from_str(config_content).unwrap();
        assert_eq!(config.backend_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.reveal_interval_ms, 20);
        assert_eq!(config.theme, ThemeChoice::Light);
        assert_eq!(config.default_scripture.as_deref(), Some("bhagavad-gita"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            backend_url: Some("http://localhost:8000".to_string()),
            reveal_interval_ms: 20,
            theme: ThemeChoice::Light,
            default_scripture: Some("dhammapada".to_string()),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let test_config = Config {
            backend_url: Some("http://localhost:8000".to_string()),
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_malformed_toml_reports_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "reveal_interval_ms = \"fast\"").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }
}
