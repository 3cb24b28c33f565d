//! Configuration file support for dialtui.
//!
//! Configuration is loaded from `~/.config/dialtui/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/dialtui/config.toml
//! modem = "0"
//! settings_command = ["gnome-control-center", "privacy"]
//!
//! [notifications]
//! enabled = true
//! dedupe_interval_secs = 30
//! ```

use std::path::PathBuf;

use serde::Deserialize;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// ModemManager modem selector (index or D-Bus path)
    pub modem: Option<String>,

    /// Desktop notification behavior
    #[serde(default)]
    pub notifications: NotificationSettings,

    /// Command spawned to open the system permission settings
    pub settings_command: Option<Vec<String>>,
}

/// Desktop notification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// Whether notifications are enabled
    pub enabled: bool,

    /// Minimum seconds between same notification type (prevents spam)
    pub dedupe_interval_secs: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            dedupe_interval_secs: 30,
        }
    }
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dialtui")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, modem: Option<String>) -> Self {
        if modem.is_some() {
            self.modem = modem;
        }
        self
    }

    /// Get the modem selector, falling back to environment variable or default.
    pub fn modem(&self) -> String {
        self.modem
            .clone()
            .or_else(|| std::env::var("DIALTUI_MODEM").ok())
            .unwrap_or_else(|| "0".to_string())
    }

    /// Get the settings command used for the permanently-denied redirect.
    pub fn settings_command(&self) -> Vec<String> {
        self.settings_command.clone().unwrap_or_else(|| {
            vec!["gnome-control-center".to_string(), "privacy".to_string()]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.modem.is_none());
        assert!(config.settings_command.is_none());
        assert!(config.notifications.enabled);
        assert_eq!(config.notifications.dedupe_interval_secs, 30);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            modem = "/org/freedesktop/ModemManager1/Modem/3"
            settings_command = ["xdg-open", "settings://privacy"]

            [notifications]
            enabled = false
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.modem.as_deref(),
            Some("/org/freedesktop/ModemManager1/Modem/3")
        );
        assert_eq!(
            config.settings_command,
            Some(vec!["xdg-open".to_string(), "settings://privacy".to_string()])
        );
        assert!(!config.notifications.enabled);
        assert_eq!(config.notifications.dedupe_interval_secs, 30);
    }

    #[test]
    fn test_cli_override_wins() {
        let config = Config {
            modem: Some("0".to_string()),
            ..Default::default()
        };
        let config = config.with_overrides(Some("2".to_string()));
        assert_eq!(config.modem(), "2");
    }
}
