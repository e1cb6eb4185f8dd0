//! TOML-based application configuration.
//!
//! Stores:
//! - The shared unlock password
//! - Splash timing handed to rendering hosts
//! - The selectable platform roster
//! - The default theme
//!
//! Configuration is stored at `~/.config/hourglass/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::session::Theme;

/// Unlock gate configuration. The password is a plain shared secret and
/// carries no security contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_password")]
    pub password: String,
}

/// Timing a rendering host uses around the splash animation. The core
/// never schedules these; they are handed to the host verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplashConfig {
    /// Splash display time before the fade-out starts.
    #[serde(default = "default_splash_duration_ms")]
    pub duration_ms: u64,
    /// Pause between splash fade-out and the password prompt.
    #[serde(default = "default_prompt_delay_ms")]
    pub prompt_delay_ms: u64,
}

/// Selectable platform roster shown in the Apps section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppsConfig {
    #[serde(default = "default_platforms")]
    pub platforms: Vec<String>,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: Theme,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/hourglass/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub splash: SplashConfig,
    #[serde(default)]
    pub apps: AppsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

// Default functions
fn default_password() -> String {
    "uts123".into()
}
fn default_splash_duration_ms() -> u64 {
    1800
}
fn default_prompt_delay_ms() -> u64 {
    300
}
fn default_platforms() -> Vec<String> {
    vec![
        "Instagram".into(),
        "TikTok".into(),
        "Snapchat".into(),
        "Facebook".into(),
        "YouTube".into(),
    ]
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password: default_password(),
        }
    }
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_splash_duration_ms(),
            prompt_delay_ms: default_prompt_delay_ms(),
        }
    }
}

impl Default for AppsConfig {
    fn default() -> Self {
        Self {
            platforms: default_platforms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth: AuthConfig::default(),
            splash: SplashConfig::default(),
            apps: AppsConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    /// Path of the config file inside the active data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be resolved.
    pub fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
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
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
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
        assert_eq!(parsed.auth.password, "uts123");
        assert_eq!(parsed.splash.duration_ms, 1800);
        assert_eq!(parsed.splash.prompt_delay_ms, 300);
        assert_eq!(parsed.ui.theme, Theme::LightBlue);
    }

    #[test]
    fn default_roster_has_five_platforms() {
        let cfg = Config::default();
        assert_eq!(cfg.apps.platforms.len(), 5);
        assert!(cfg.apps.platforms.iter().any(|p| p == "Instagram"));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg: Config = toml::from_str("[auth]\npassword = \"secret\"\n").unwrap();
        assert_eq!(cfg.auth.password, "secret");
        assert_eq!(cfg.splash.duration_ms, 1800);
        assert_eq!(cfg.apps.platforms.len(), 5);
    }

    #[test]
    fn load_writes_defaults_to_the_data_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        std::env::set_var("HOURGLASS_DATA_DIR", dir.path());
        let cfg = Config::load().unwrap();
        assert_eq!(cfg.auth.password, "uts123");
        assert!(dir.path().join("config.toml").exists());
        std::env::remove_var("HOURGLASS_DATA_DIR");
    }
}
