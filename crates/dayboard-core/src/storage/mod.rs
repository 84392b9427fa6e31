mod config;
pub mod store;

pub use config::{AiConfig, Config, CountdownConfig, UiConfig};
pub use store::{KvStore, Persisted};

use std::path::PathBuf;

use crate::error::StoreError;

/// Returns `~/.config/dayboard[-dev]/` based on DAYBOARD_ENV.
///
/// Set DAYBOARD_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DAYBOARD_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("dayboard-dev")
    } else {
        base_dir.join("dayboard")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StoreError::DataDir(e.to_string()))?;
    Ok(dir)
}
