//! Hsl command implementation

use anyhow::Result;
use simple_bulma_css::hex_to_hsl;

/// Execute the hsl command
pub fn execute(color: &str) -> Result<()> {
    let hsl = hex_to_hsl(color)?;
    println!("{hsl}");
    Ok(())
}
