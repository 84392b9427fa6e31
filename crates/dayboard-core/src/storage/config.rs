//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - UI settings (dark mode, accent color, locale tag)
//! - AI collaborator settings (model, endpoint, team for the match lookup)
//! - Countdown tick interval
//!
//! Configuration is stored at `~/.config/dayboard/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
    /// BCP 47 tag used when formatting dates for display.
    #[serde(default = "default_locale")]
    pub locale: String,
}

/// AI collaborator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL of the generateContent-style endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// API key; the DAYBOARD_AI_KEY environment variable takes precedence.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Club whose next match the lookup asks about.
    #[serde(default = "default_team")]
    pub team: String,
}

/// Countdown engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownConfig {
    /// Seconds between ticks while watching a deadline.
    #[serde(default = "default_tick_secs")]
    pub tick_secs: u64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/dayboard/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub countdown: CountdownConfig,
}

// Default functions
fn default_dark_mode() -> bool {
    true
}
fn default_accent_color() -> String {
    "#3b82f6".into()
}
fn default_locale() -> String {
    "ar".into()
}
fn default_model() -> String {
    "gemini-1.5-flash".into()
}
fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/".into()
}
fn default_team() -> String {
    "Al-Hilal Saudi FC".into()
}
fn default_tick_secs() -> u64 {
    1
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: default_dark_mode(),
            accent_color: default_accent_color(),
            locale: default_locale(),
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            api_key: None,
            team: default_team(),
        }
    }
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            tick_secs: default_tick_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            ai: AiConfig::default(),
            countdown: CountdownConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/dayboard"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    fn pointer(key: &str) -> String {
        format!("/{}", key.replace('.', "/"))
    }

    /// Load from disk, writing the defaults on first run.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        match json.pointer(&Self::pointer(key))? {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key and persist.
    ///
    /// The new value must parse into the same JSON type as the existing
    /// one, so a bool stays a bool and a number stays a number.
    ///
    /// # Errors
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.into(),
            message: e.to_string(),
        })?;

        let slot = json
            .pointer_mut(&Self::pointer(key))
            .ok_or_else(|| ConfigError::UnknownKey(key.into()))?;

        *slot = match slot {
            serde_json::Value::Bool(_) => {
                serde_json::Value::Bool(value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.into(),
                    message: format!("cannot parse '{value}' as bool"),
                })?)
            }
            serde_json::Value::Number(_) => {
                if let Ok(n) = value.parse::<u64>() {
                    serde_json::Value::Number(n.into())
                } else {
                    value
                        .parse::<f64>()
                        .ok()
                        .and_then(serde_json::Number::from_f64)
                        .map(serde_json::Value::Number)
                        .ok_or_else(|| ConfigError::InvalidValue {
                            key: key.into(),
                            message: format!("cannot parse '{value}' as number"),
                        })?
                }
            }
            _ => serde_json::Value::String(value.into()),
        };

        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.into(),
            message: e.to_string(),
        })?;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert!(parsed.ui.dark_mode);
        assert_eq!(parsed.countdown.tick_secs, 1);
        assert_eq!(parsed.ai.model, cfg.ai.model);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("ui.dark_mode").as_deref(), Some("true"));
        assert_eq!(cfg.get("countdown.tick_secs").as_deref(), Some("1"));
        assert!(cfg.get("ui.missing_key").is_none());
    }

    #[test]
    fn empty_sections_fill_with_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.ai.endpoint, default_endpoint());
        assert_eq!(cfg.ui.accent_color, "#3b82f6");
    }

    #[test]
    fn get_returns_strings_for_all_value_types() {
        let cfg = Config::default();
        assert_eq!(cfg.get("ui.dark_mode"), Some("true".to_string()));
        assert_eq!(cfg.get("countdown.tick_secs"), Some("1".to_string()));
        assert_eq!(cfg.get("ai.team"), Some(default_team()));
    }
}
