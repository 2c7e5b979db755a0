//! Settings persistence
//!
//! Reads user preferences from `~/.config/keycalc/config.toml`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Calculator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default log filter when `RUST_LOG` is not set (e.g. "warn", "debug").
    pub log_level: String,

    /// Record the left operand of evaluations that end in `Error`, so that
    /// clear-entry can bring it back.
    pub record_failed_evaluations: bool,

    /// Wipe a visible `Error` / `Invalid Input` before applying new input.
    pub clear_markers_on_input: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            record_failed_evaluations: true,
            clear_markers_on_input: true,
        }
    }
}

impl Settings {
    /// Default location of the settings file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("keycalc").join("config.toml"))
    }

    /// Load settings from the default location, or return defaults if the
    /// file is missing or unreadable.
    ///
    /// Runs before logging is set up, so problems go to stderr directly.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Warning: {:#}; using default settings", e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse settings at {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
