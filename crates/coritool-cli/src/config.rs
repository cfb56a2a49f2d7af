//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use coritool_sources::Endpoints;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
///
/// Every field is optional in the file. Credentials are never read from
/// here; they come from the environment only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// API endpoints and timeouts
    #[serde(default)]
    pub endpoints: Endpoints,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain-text report
    #[default]
    Text,
    /// JSON report
    Json,
}

impl Config {
    /// Get the default configuration file path under `home`.
    pub fn path_in(home: &Path) -> PathBuf {
        home.join(".coritool").join("config.toml")
    }

    /// Load configuration from an explicit path, or the default path.
    ///
    /// An explicit path must exist. The default path may be missing, as may
    /// the home directory itself; either yields the defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load_explicit(Path::new(path)),
            None => Self::load_default(dirs::home_dir().as_deref()),
        }
    }

    /// Load configuration from a path the user named.
    pub fn load_explicit(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Self::load_from(path)
    }

    /// Load configuration from `~/.coritool/config.toml` under `home`.
    pub fn load_default(home: Option<&Path>) -> Result<Self> {
        match home {
            Some(home) => Self::load_from(&Self::path_in(home)),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, using the defaults if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the loaded values.
    pub fn validate(&self) -> Result<()> {
        self.endpoints
            .validate()
            .map_err(|e| CliError::Config(format!("Invalid [endpoints]: {}", e)))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Text);
        assert_eq!(config.endpoints.sanctions_timeout_secs, 20);
        assert_eq!(config.endpoints.search_timeout_secs, 15);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_no_home_directory_gives_defaults() {
        assert_eq!(Config::load_default(None).unwrap(), Config::default());
    }

    #[test]
    fn test_default_path_under_home() {
        let home = tempfile::tempdir().unwrap();
        let dir = home.path().join(".coritool");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), "[settings]\ncolor = false\n").unwrap();

        let config = Config::load_default(Some(home.path())).unwrap();
        assert!(!config.settings.color);
    }

    #[test]
    fn test_missing_explicit_path_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("typo.toml");
        match Config::load(path.to_str()) {
            Err(CliError::Config(msg)) => assert!(msg.contains("typo.toml")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_file() {
        let file = write_config(
            r#"
[settings]
format = "json"

[endpoints]
sanctions_url = "http://127.0.0.1:8080"
"#,
        );
        let config = Config::load_from(file.path()).unwrap();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert_eq!(config.endpoints.sanctions_url, "http://127.0.0.1:8080");
        assert_eq!(config.endpoints.search_timeout_secs, 15);
    }

    #[test]
    fn test_invalid_toml() {
        let file = write_config("[settings\ncolor = ");
        assert!(matches!(Config::load_from(file.path()), Err(CliError::Toml(_))));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let file = write_config("[endpoints]\nsearch_timeout_secs = 0\n");
        match Config::load_from(file.path()) {
            Err(CliError::Config(msg)) => assert!(msg.contains("search_timeout_secs")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_format_rejected() {
        let file = write_config("[settings]\nformat = \"yaml\"\n");
        assert!(Config::load_from(file.path()).is_err());
    }
}
