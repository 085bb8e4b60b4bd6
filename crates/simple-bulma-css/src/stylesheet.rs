//! Themed stylesheets from pre-compiled Bulma CSS.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! Bulma 1.0+ is themed without recompiling: every theme gets a copy of the
//! pre-compiled `bulma.css` with a `:root` block of custom properties appended.
//! The appended block comes last, so its declarations win the cascade.

use std::path::Path;

use crate::error::BulmaError;
use crate::settings::BulmaSettings;
use crate::variables::{StyleVariables, convert_variables};

/// Output path of the default theme's stylesheet, relative to the static root.
pub const DEFAULT_STYLESHEET: &str = "css/bulma.css";

/// A stylesheet generated for one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeStylesheet {
    /// Theme name, `None` for the default theme
    pub theme: Option<String>,

    /// Output path relative to the static root
    pub path: String,

    /// Complete CSS content
    pub css: String,
}

/// Output path for a theme's stylesheet.
///
/// ```
/// use simple_bulma_css::stylesheet_path;
///
/// assert_eq!(stylesheet_path(None), "css/bulma.css");
/// assert_eq!(stylesheet_path(Some("alt")), "css/alt_bulma.css");
/// ```
pub fn stylesheet_path(theme: Option<&str>) -> String {
    match theme {
        None => DEFAULT_STYLESHEET.to_string(),
        Some(name) => format!("css/{name}_bulma.css"),
    }
}

/// Append the custom property block for `variables` to `base_css`.
///
/// Returns `base_css` unchanged when there are no variables.
pub fn inject_variables(base_css: &str, variables: &StyleVariables) -> String {
    let block = convert_variables(variables);
    if block.is_empty() {
        return base_css.to_string();
    }

    let mut css = String::with_capacity(base_css.len() + block.len() + 1);
    css.push_str(base_css);
    if !css.is_empty() && !css.ends_with('\n') {
        css.push('\n');
    }
    css.push_str(&block);
    css
}

/// Build the default stylesheet followed by one stylesheet per named theme.
pub fn build_theme_stylesheets(base_css: &str, settings: &BulmaSettings) -> Vec<ThemeStylesheet> {
    let default = ThemeStylesheet {
        theme: None,
        path: stylesheet_path(None),
        css: inject_variables(base_css, &settings.variables),
    };

    std::iter::once(default)
        .chain(settings.themes.iter().map(|(name, variables)| ThemeStylesheet {
            theme: Some(name.clone()),
            path: stylesheet_path(Some(name)),
            css: inject_variables(base_css, variables),
        }))
        .collect()
}

/// Read the pre-compiled Bulma stylesheet.
///
/// # Errors
///
/// Returns `BulmaError::MissingPrecompiled` if the file does not exist, and
/// `BulmaError::Io` for other read failures.
pub fn load_precompiled(path: &Path) -> Result<String, BulmaError> {
    match std::fs::read_to_string(path) {
        Ok(css) => Ok(css),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Err(BulmaError::MissingPrecompiled {
                path: path.to_path_buf(),
            })
        }
        Err(err) => Err(err.into()),
    }
}
