//! Game settings
//!
//! Read once at startup from a JSON file. Every field has a default, so a
//! partial file is fine and a missing or broken one falls back to defaults.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TICK_INTERVAL_MS;

/// Default settings file, relative to the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "block-breaker.json";
/// Environment variable overriding the settings file path
pub const SETTINGS_ENV: &str = "BLOCK_BREAKER_SETTINGS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Title font (TTF/OTF); the built-in font is used if it can't be loaded
    pub font_path: PathBuf,
    /// Delay between ticks in milliseconds
    pub tick_interval_ms: u64,
    /// Fixed RNG seed; random per run when absent
    pub seed: Option<u64>,
    /// Present with vsync
    pub vsync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from("fonts/maplestory_bold.ttf"),
            tick_interval_ms: TICK_INTERVAL_MS,
            seed: None,
            vsync: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.tick_interval_ms = settings.tick_interval_ms.max(1);
        Ok(settings)
    }

    /// Read settings from a file
    pub fn try_load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Settings file location: `$BLOCK_BREAKER_SETTINGS` or `./block-breaker.json`
    pub fn default_path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                log::info!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Configured seed, or one derived from the clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}
