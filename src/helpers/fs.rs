//! File System Utilities
//!
//! Configuration directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/castadmin/` or `$XDG_CONFIG_HOME/castadmin/`
/// - **macOS**: `~/Library/Application Support/sh.castadmin.castadmin/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\castadmin\castadmin\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("sh", "castadmin", "castadmin") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Get or create the data directory, used for log files
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("sh", "castadmin", "castadmin") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let data_dir = project_dirs.data_dir();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}
