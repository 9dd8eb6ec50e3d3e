//! Unified path management for AiCAD configuration files.
//!
//! All durable state lives under a single per-user directory so the
//! layout stays consistent across platforms (Linux, macOS, Windows).
//!
//! # Directory Structure
//!
//! ```text
//! <config_dir>/aicad/          # e.g. ~/.config/aicad on Linux
//! ├── app_user.toml            # durable identity entry (absent = logged out)
//! └── config.toml              # optional application configuration
//! ```

use std::path::PathBuf;

use aicad_core::{AicadError, Result};

/// Fixed namespaced key for the durable identity entry.
pub const APP_USER_KEY: &str = "app_user";

/// Resolves the paths AiCAD stores durable state under.
///
/// A base directory override is supported for tests and for running
/// multiple isolated profiles side by side; with `None` the platform
/// config directory is used.
#[derive(Debug, Clone, Default)]
pub struct AicadPaths {
    base_dir: Option<PathBuf>,
}

impl AicadPaths {
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    /// The application's config directory (not guaranteed to exist yet).
    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base_dir {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join("aicad"))
            .ok_or_else(|| AicadError::config("Cannot find config directory"))
    }

    /// Path of the durable identity entry (`app_user.toml`).
    pub fn profile_path(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(format!("{APP_USER_KEY}.toml")))
    }

    /// Path of the optional application config (`config.toml`).
    pub fn config_path(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }
}
