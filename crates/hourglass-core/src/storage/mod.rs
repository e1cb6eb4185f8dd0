mod config;
pub mod database;

pub use config::{AppsConfig, AuthConfig, Config, SplashConfig, UiConfig};
pub use database::{CountdownRecord, Database, Stats};

use std::path::PathBuf;

/// Returns `~/.config/hourglass[-dev]/` based on HOURGLASS_ENV, or the
/// directory named by HOURGLASS_DATA_DIR when set (tests use this to stay
/// isolated).
///
/// Set HOURGLASS_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(dir) = std::env::var("HOURGLASS_DATA_DIR") {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir)?;
        return Ok(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("HOURGLASS_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("hourglass-dev")
    } else {
        base_dir.join("hourglass")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
