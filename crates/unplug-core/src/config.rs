//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Catalog override (path to a user-supplied TOML catalog)
//! - Shuffle seed for reproducible sampling
//! - Presentation hints (theme, accent color, reduced motion)
//!
//! Configuration is stored at `~/.config/unplug/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/unplug[-dev]/` based on UNPLUG_ENV.
///
/// Set UNPLUG_ENV=dev to use a development data directory, or
/// UNPLUG_STATE_DIR to point at an explicit directory (used by tests).
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let dir = if let Ok(explicit) = std::env::var("UNPLUG_STATE_DIR") {
        PathBuf::from(explicit)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");
        let env = std::env::var("UNPLUG_ENV").unwrap_or_else(|_| "production".to_string());
        if env == "dev" {
            base_dir.join("unplug-dev")
        } else {
            base_dir.join("unplug")
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Catalog source configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a user catalog TOML replacing the built-in mock data.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Shuffle configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShuffleConfig {
    /// Fixed RNG seed for reproducible shuffles (None = entropy).
    #[serde(default)]
    pub seed: Option<u64>,
}

/// UI configuration. Presentation hints only; the core never reads these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
    /// Skip staggered entrance transitions.
    #[serde(default)]
    pub reduce_motion: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/unplug/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub shuffle: ShuffleConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

// Default functions
fn default_dark_mode() -> bool {
    true
}
fn default_accent_color() -> String {
    "#3b82f6".into()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: default_dark_mode(),
            accent_color: default_accent_color(),
            reduce_motion: false,
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidKey {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err(invalid("config key is empty".into()));
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| invalid("unknown config key".into()))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| invalid("unknown config key".into()))?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| {
                                    invalid(format!("cannot parse '{value}' as number"))
                                })?
                        } else {
                            return Err(invalid(format!("cannot parse '{value}' as number")));
                        }
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| invalid("unknown config key".into()))?;
        }
        Ok(())
    }

    /// Path of the config file inside the data directory.
    pub fn path() -> Result<PathBuf, std::io::Error> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// A missing file yields the default config, persisted immediately so
    /// the user has something to edit.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("<data_dir>"),
            message: e.to_string(),
        })?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::SaveFailed {
            path: PathBuf::from("<data_dir>"),
            message: e.to_string(),
        })?;
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key and persist. Fails on unknown keys.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self)
            .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self =
            serde_json::from_value(json).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        self.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = Config::default();
        assert!(cfg.ui.dark_mode);
        assert!(!cfg.ui.reduce_motion);
        assert!(cfg.catalog.path.is_none());
        assert!(cfg.shuffle.seed.is_none());
    }

    #[test]
    fn empty_toml_parses_to_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert!(cfg.ui.dark_mode);
        assert_eq!(cfg.ui.accent_color, "#3b82f6");
    }

    #[test]
    fn get_by_dot_path() {
        let cfg = Config::default();
        assert_eq!(cfg.get("ui.dark_mode").as_deref(), Some("true"));
        assert_eq!(cfg.get("ui.accent_color").as_deref(), Some("#3b82f6"));
        assert!(cfg.get("ui.nope").is_none());
    }

    #[test]
    fn set_unknown_key_fails() {
        let cfg = Config::default();
        let mut json = serde_json::to_value(&cfg).unwrap();
        let err = Config::set_json_value_by_path(&mut json, "ui.nope", "1").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidKey { .. }));
        assert!(cfg.get("ui.nope").is_none());
    }

    #[test]
    fn set_bool_by_dot_path_in_json() {
        let cfg = Config::default();
        let mut json = serde_json::to_value(&cfg).unwrap();
        Config::set_json_value_by_path(&mut json, "ui.reduce_motion", "true").unwrap();
        let updated: Config = serde_json::from_value(json).unwrap();
        assert!(updated.ui.reduce_motion);
    }

    #[test]
    fn shuffle_seed_roundtrips_via_toml() {
        let mut cfg = Config::default();
        cfg.shuffle.seed = Some(42);
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.shuffle.seed, Some(42));
    }
}
