//! Configuration types, loading and validation

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::utils::{is_valid_log_level, UtilityConfig};

/// Top-level configuration, as read from a JSON or YAML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoostConfig {
    pub random: RandomConfig,
    pub walk: WalkConfig,
    pub logging: LoggingConfig,
}

/// Random generator selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Draw from operating-system entropy
    pub secure: bool,
    /// Fixed seed for reproducible output; excludes `secure`
    pub seed: Option<u64>,
}

/// Tree walk defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    pub include_directories: bool,
    pub recurse: bool,
    pub skip_hidden: bool,
    /// Accepted file extensions; empty accepts every file
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

// Defaults
impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            include_directories: false,
            recurse: true,
            skip_hidden: false,
            extensions: Vec::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".into() }
    }
}

impl BoostConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a `.json`, `.yaml` or `.yml` file.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let text = fs::read_to_string(path)?;
        let config = match ext.as_deref() {
            Some("json") => Self::from_json_str(&text)?,
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text)?,
            _ => {
                return Err(Error::ConfigError(format!(
                    "Unsupported config format: {}",
                    path.display()
                )))
            }
        };
        debug!(?config, "configuration loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.random.validate()?;
        self.walk.validate()?;
        self.logging.validate()
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::ValidationError(format!("Invalid value for {}: {}", key, value)))
}

fn unknown_key(key: &str) -> Error {
    Error::ValidationError(format!("Unknown key: {}", key))
}

impl UtilityConfig for RandomConfig {
    fn validate(&self) -> Result<()> {
        if self.secure && self.seed.is_some() {
            return Err(Error::ValidationError(
                "A seeded generator cannot be secure".into(),
            ));
        }
        Ok(())
    }

    fn get(&self, key: &str) -> Option<String> {
        match key {
            "secure" => Some(self.secure.to_string()),
            "seed" => self.seed.map(|v| v.to_string()),
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        match key {
            "secure" => self.secure = parse_value(key, &value)?,
            "seed" => self.seed = Some(parse_value(key, &value)?),
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

impl UtilityConfig for WalkConfig {
    fn validate(&self) -> Result<()> {
        if self.extensions.iter().any(|e| e.trim_start_matches('.').is_empty()) {
            return Err(Error::ValidationError("Empty file extension".into()));
        }
        Ok(())
    }

    fn get(&self, key: &str) -> Option<String> {
        match key {
            "include_directories" => Some(self.include_directories.to_string()),
            "recurse" => Some(self.recurse.to_string()),
            "skip_hidden" => Some(self.skip_hidden.to_string()),
            "extensions" => Some(self.extensions.join(",")),
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        match key {
            "include_directories" => self.include_directories = parse_value(key, &value)?,
            "recurse" => self.recurse = parse_value(key, &value)?,
            "skip_hidden" => self.skip_hidden = parse_value(key, &value)?,
            "extensions" => {
                self.extensions = value
                    .split(',')
                    .map(str::trim)
                    .filter(|e| !e.is_empty())
                    .map(String::from)
                    .collect()
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

impl UtilityConfig for LoggingConfig {
    fn validate(&self) -> Result<()> {
        if !is_valid_log_level(&self.level) {
            return Err(Error::ValidationError(format!("Unknown log level: {}", self.level)));
        }
        Ok(())
    }

    fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.level.clone()),
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        match key {
            "level" => self.level = value,
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = BoostConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.walk.recurse);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_json_partial_config() {
        let config = BoostConfig::from_json_str(r#"{"random": {"seed": 42}, "walk": {"extensions": ["txt"]}}"#).unwrap();
        assert_eq!(config.random.seed, Some(42));
        assert_eq!(config.walk.extensions, vec!["txt".to_string()]);
        assert!(config.walk.recurse);
    }

    #[test]
    fn test_yaml_config() {
        let yaml = "walk:\n  include_directories: true\n  skip_hidden: true\nlogging:\n  level: debug\n";
        let config = BoostConfig::from_yaml_str(yaml).unwrap();
        assert!(config.walk.include_directories);
        assert!(config.walk.skip_hidden);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_invalid_configs() {
        assert!(BoostConfig::from_json_str(r#"{"random": {"secure": true, "seed": 1}}"#).is_err());
        assert!(BoostConfig::from_json_str(r#"{"logging": {"level": "loud"}}"#).is_err());
        assert!(matches!(BoostConfig::from_json_str("{"), Err(Error::JsonError(_))));
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::TempDir::new().unwrap();
        let json = dir.path().join("boost.json");
        fs::write(&json, r#"{"walk": {"recurse": false}}"#).unwrap();
        assert!(!BoostConfig::load(&json).unwrap().walk.recurse);

        let toml = dir.path().join("boost.toml");
        fs::write(&toml, "").unwrap();
        assert!(matches!(BoostConfig::load(&toml), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_get_set() {
        let mut walk = WalkConfig::default();
        walk.set("extensions", "txt, md".into()).unwrap();
        assert_eq!(walk.get("extensions").as_deref(), Some("txt,md"));
        assert!(walk.set("recurse", "maybe".into()).is_err());
        assert!(walk.set("depth", "3".into()).is_err());

        let mut random = RandomConfig::default();
        random.set("seed", "7".into()).unwrap();
        assert_eq!(random.get("seed").as_deref(), Some("7"));
        assert_eq!(random.get("other"), None);
    }
}
