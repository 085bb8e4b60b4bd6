//! Command implementations for the simple-bulma CLI
//!
//! Each command module handles the CLI interface and delegates to
//! simple-bulma-css for the actual work.

pub mod build;
pub mod hsl;
pub mod vars;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use simple_bulma_css::BulmaSettings;
use tracing::debug;

/// Settings file looked up in the working directory when none is given.
const DEFAULT_SETTINGS_FILE: &str = "bulma.toml";

/// Load settings from an explicit path, or from `bulma.toml` if it exists.
///
/// Without either, the default (empty) settings apply.
pub fn load_settings(path: Option<&Path>) -> Result<BulmaSettings> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_SETTINGS_FILE);
            if !default.exists() {
                debug!("No {} found, using default settings", DEFAULT_SETTINGS_FILE);
                return Ok(BulmaSettings::default());
            }
            default
        }
    };

    BulmaSettings::load(&path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))
}
