//! Vars command implementation.
//!
//! Prints the `:root` block of Bulma custom properties for one theme, for
//! pasting into a stylesheet by hand.

use std::path::PathBuf;

use anyhow::Result;
use simple_bulma_css::convert_variables;

use super::load_settings;

/// Arguments for the vars command
#[derive(Debug)]
pub struct VarsArgs {
    /// Settings file
    pub settings: Option<PathBuf>,
    /// Theme name, `None` for the default theme
    pub theme: Option<String>,
}

/// Execute the vars command
pub fn execute(args: VarsArgs) -> Result<()> {
    print!("{}", render(&args)?);
    Ok(())
}

fn render(args: &VarsArgs) -> Result<String> {
    let settings = load_settings(args.settings.as_deref())?;
    let variables = settings.theme_variables(args.theme.as_deref())?;
    Ok(convert_variables(variables))
}
