//! # Configuration
//!
//! Habitz configuration is managed by [`confique`], which layers environment
//! variables over a TOML file over compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Values are resolved in priority order:
//! 1. **Environment variables**: `HABITZ_DATA_FILE`, `HABITZ_AUTO_SHORT_NAME`.
//! 2. **Config file**: `--config <path>`, or `config.toml` in the platform
//!    config directory (via `directories`). A missing file is not an error.
//! 3. **Compiled defaults**.
//!
//! The `--data-file` flag sits above all of these; see [`resolve_data_file`].
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `<data dir>/habitz/habits.json` | JSON file holding all habits |
//! | `auto_short_name` | `false` | Derive a short name from initials on `add` |

use crate::error::{HabitzError, Result};
use confique::Config;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const DATA_FILENAME: &str = "habits.json";

#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct HabitzConfig {
    /// Path of the habits data file.
    #[config(env = "HABITZ_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Give habits added without `--short` a short name built from initials.
    #[config(env = "HABITZ_AUTO_SHORT_NAME", default = false)]
    pub auto_short_name: bool,
}

impl Default for HabitzConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            auto_short_name: false,
        }
    }
}

impl HabitzConfig {
    /// Loads configuration from the environment and `config_file`.
    pub fn load(config_file: &Path) -> Result<Self> {
        Self::builder()
            .env()
            .file(config_file)
            .load()
            .map_err(|e| HabitzError::Config(e.to_string()))
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "habitz")
        .ok_or_else(|| HabitzError::Config("could not determine a home directory".into()))
}

/// `<platform config dir>/habitz/config.toml`
pub fn default_config_file() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILENAME))
}

/// `<platform data dir>/habitz/habits.json`
pub fn default_data_file() -> Result<PathBuf> {
    Ok(project_dirs()?.data_dir().join(DATA_FILENAME))
}

/// Picks the data file: explicit flag, then configuration, then the platform default.
pub fn resolve_data_file(flag: Option<PathBuf>, config: &HabitzConfig) -> Result<PathBuf> {
    match flag.or_else(|| config.data_file.clone()) {
        Some(path) => Ok(path),
        None => default_data_file(),
    }
}
