//! Storage Layer
//!
//! Locates the application directories and gives access to the flat
//! directory of screenshot files.

pub mod directory;

pub use directory::{is_bare_name, ScreenshotStore, StorageError, SCREENSHOT_EXTENSION};

use anyhow::Result;
use std::path::PathBuf;

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "screenshotmanager", "ScreenshotManager")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    let config_dir = proj_dirs.config_dir().to_path_buf();
    std::fs::create_dir_all(&config_dir)?;

    Ok(config_dir)
}

/// Default location for saved screenshots: `<Pictures>/Screenshots`,
/// or `<home>/Screenshots` when the platform has no pictures folder.
pub fn default_screenshot_dir() -> Result<PathBuf> {
    let user_dirs = directories::UserDirs::new()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

    let base = user_dirs
        .picture_dir()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| user_dirs.home_dir().to_path_buf());

    Ok(base.join("Screenshots"))
}

/// Open a directory in the platform file manager
pub fn open_in_file_manager(path: &std::path::Path) -> Result<()> {
    #[cfg(target_os = "windows")]
    let program = "explorer";
    #[cfg(target_os = "macos")]
    let program = "open";
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let program = "xdg-open";

    std::process::Command::new(program)
        .arg(path)
        .spawn()
        .map_err(|e| anyhow::anyhow!("Failed to launch {}: {}", program, e))?;

    Ok(())
}
