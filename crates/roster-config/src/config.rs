use std::path::Path;

use roster_types::{Record, Role, MAX_RECORDS};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::paths::get_config_path;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Reported by `roster info`; insertion is never capped.
    #[serde(default = "default_max_records")]
    pub max_records: usize,
    #[serde(default)]
    pub default_role: Role,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_records: default_max_records(),
            default_role: Role::default(),
        }
    }
}

fn default_max_records() -> usize {
    MAX_RECORDS
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub records: Vec<Record>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&get_config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        debug!(
            "Loaded config from {} with {} seed record(s)",
            path.display(),
            config.records.len()
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.service.max_records, MAX_RECORDS);
        assert_eq!(config.service.default_role, Role::User);
        assert!(config.records.is_empty());
    }

    #[test]
    fn test_load_seed_records_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[logging]
level = "debug"

[service]
default_role = "guest"

[[records]]
name = "Alice"
email = "alice@example.com"
age = 30

[[records]]
name = "Bob"
"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.service.default_role, Role::Guest);
        assert_eq!(config.service.max_records, MAX_RECORDS);
        assert_eq!(
            config.records,
            vec![
                Record::new("Alice", "alice@example.com", 30),
                Record::new("Bob", "", 0),
            ]
        );
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[service\nmax_records = ").unwrap();
        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::TomlParse(_))
        ));
    }
}
