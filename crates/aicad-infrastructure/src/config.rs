//! Application configuration.
//!
//! Loads `config.toml` from the config directory. This function is purely
//! responsible for reading the TOML file from disk; a missing, empty, or
//! malformed file falls back to the defaults so configuration problems
//! never prevent startup.

use std::fs;

use serde::{Deserialize, Serialize};

use crate::paths::AicadPaths;

/// Tunable application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Simulated generation latency in milliseconds.
    #[serde(default = "default_generation_delay_ms")]
    pub generation_delay_ms: u64,
}

fn default_generation_delay_ms() -> u64 {
    1500
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generation_delay_ms: default_generation_delay_ms(),
        }
    }
}

/// Loads the application config, falling back to defaults.
pub fn load_config(paths: &AicadPaths) -> AppConfig {
    let Ok(config_path) = paths.config_path() else {
        return AppConfig::default();
    };
    if !config_path.exists() {
        return AppConfig::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %config_path.display(), error = %e, "failed to read config");
            return AppConfig::default();
        }
    };
    if content.trim().is_empty() {
        return AppConfig::default();
    }

    match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %config_path.display(), error = %e, "malformed config, using defaults");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn paths_in(dir: &TempDir) -> AicadPaths {
        AicadPaths::new(Some(PathBuf::from(dir.path())))
    }

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(&paths_in(&dir));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.generation_delay_ms, 1500);
    }

    #[test]
    fn test_config_is_loaded_from_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "generation_delay_ms = 50\n").unwrap();

        let config = load_config(&paths_in(&dir));
        assert_eq!(config.generation_delay_ms, 50);
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "generation_delay_ms = }").unwrap();

        let config = load_config(&paths_in(&dir));
        assert_eq!(config, AppConfig::default());
    }
}
