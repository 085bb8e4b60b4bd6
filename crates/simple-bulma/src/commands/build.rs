//! Build command implementation.
//!
//! Patches the pre-compiled Bulma stylesheet once per theme and writes the
//! results below the output directory:
//!
//! ```text
//! <out-dir>/css/bulma.css          default theme
//! <out-dir>/css/<theme>_bulma.css  one per `<theme>_variables` table
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use simple_bulma_css::{build_theme_stylesheets, load_precompiled};
use tracing::{debug, info};

use super::load_settings;

/// Arguments for the build command
#[derive(Debug)]
pub struct BuildArgs {
    /// Pre-compiled Bulma CSS
    pub css: PathBuf,
    /// Static root to write into
    pub out_dir: PathBuf,
    /// Settings file
    pub settings: Option<PathBuf>,
    /// Suppress console output
    pub quiet: bool,
}

/// Execute the build command
pub fn execute(args: BuildArgs) -> Result<()> {
    let written = build(&args)?;

    if !args.quiet {
        info!("Wrote {} stylesheet(s) to {}", written.len(), args.out_dir.display());
    }

    Ok(())
}

/// Write every themed stylesheet, returning the paths written.
fn build(args: &BuildArgs) -> Result<Vec<PathBuf>> {
    let settings = load_settings(args.settings.as_deref())?;
    let base_css = load_precompiled(&args.css)?;

    let mut written = Vec::new();
    for stylesheet in build_theme_stylesheets(&base_css, &settings) {
        let output_path = args.out_dir.join(&stylesheet.path);

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory {}", parent.display())
            })?;
        }

        std::fs::write(&output_path, &stylesheet.css)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;

        match &stylesheet.theme {
            Some(theme) => debug!("Wrote theme '{}' to {}", theme, output_path.display()),
            None => debug!("Wrote default theme to {}", output_path.display()),
        }
        if !args.quiet {
            info!("{}", stylesheet.path);
        }

        written.push(output_path);
    }

    Ok(written)
}
