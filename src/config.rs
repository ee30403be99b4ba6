use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub const TEXT_TYPES: [&str; 3] = ["narrative", "persuasive", "descriptive"];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_text_type")]
    pub text_type: String,
    /// Delay before a scheduled buddy reply is delivered, in milliseconds.
    #[serde(default = "default_buddy_reply_delay_ms")]
    pub buddy_reply_delay_ms: u64,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_text_type() -> String {
    "narrative".to_string()
}
fn default_buddy_reply_delay_ms() -> u64 {
    1500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            text_type: default_text_type(),
            buddy_reply_delay_ms: default_buddy_reply_delay_ms(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quillr")
            .join("config.toml")
    }

    pub fn buddy_reply_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.buddy_reply_delay_ms)
    }

    /// Clamp values and reset stale keys after deserialization.
    pub fn validate(&mut self) {
        if !TEXT_TYPES.contains(&self.text_type.as_str()) {
            self.text_type = default_text_type();
        }
        self.buddy_reply_delay_ms = self.buddy_reply_delay_ms.clamp(0, 10_000);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        // Simulates loading an old config file with no fields
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, "catppuccin-mocha");
        assert_eq!(config.text_type, "narrative");
        assert_eq!(config.buddy_reply_delay_ms, 1500);
    }

    #[test]
    fn test_config_serde_partial_fields() {
        let config: Config = toml::from_str("text_type = \"persuasive\"").unwrap();
        assert_eq!(config.text_type, "persuasive");
        assert_eq!(config.buddy_reply_delay_ms, 1500);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.theme, deserialized.theme);
        assert_eq!(config.text_type, deserialized.text_type);
        assert_eq!(config.buddy_reply_delay_ms, deserialized.buddy_reply_delay_ms);
    }

    #[test]
    fn test_validate_resets_unknown_text_type() {
        let mut config = Config::default();
        config.text_type = "haiku".to_string();
        config.validate();
        assert_eq!(config.text_type, "narrative");
    }

    #[test]
    fn test_validate_clamps_delay() {
        let mut config = Config::default();
        config.buddy_reply_delay_ms = 999_999;
        config.validate();
        assert_eq!(config.buddy_reply_delay_ms, 10_000);
    }
}
