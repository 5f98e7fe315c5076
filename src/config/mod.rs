//! Application Configuration
//!
//! User settings and preferences stored in TOML format.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::capture::CaptureConfig;

/// Hotkey used when the configuration does not name one
pub const DEFAULT_CAPTURE_HOTKEY: &str = "Ctrl+PrintScreen";

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// General settings
    pub general: GeneralConfig,
    /// Screenshot directory settings
    pub storage: StorageSettings,
    /// Capture settings
    pub capture: CaptureSettings,
}

impl AppConfig {
    /// Directory screenshots are saved to
    pub fn screenshot_dir(&self) -> Result<PathBuf> {
        match &self.storage.directory {
            Some(dir) => Ok(dir.clone()),
            None => crate::storage::default_screenshot_dir(),
        }
    }

    /// Capture configuration derived from these settings
    pub fn capture_config(&self) -> CaptureConfig {
        CaptureConfig {
            monitor: self.capture.monitor,
        }
    }
}

/// General application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Start minimized to tray
    pub start_minimized: bool,
}

/// Where screenshots live
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageSettings {
    /// Screenshot directory, or `None` for `<Pictures>/Screenshots`
    pub directory: Option<PathBuf>,
}

/// Capture-related settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CaptureSettings {
    /// Global hotkey, e.g. "Ctrl+PrintScreen"
    pub hotkey: String,
    /// Monitor index to capture, or `None` for the primary monitor
    pub monitor: Option<usize>,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            hotkey: DEFAULT_CAPTURE_HOTKEY.to_string(),
            monitor: None,
        }
    }
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to file
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
