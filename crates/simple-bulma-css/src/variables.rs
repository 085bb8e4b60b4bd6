//! Legacy SASS variables to Bulma 1.0+ CSS custom properties.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! Themes written for Bulma 0.x set SASS variables such as `$primary` before
//! compiling Bulma. Bulma 1.0+ ships pre-compiled CSS themed through custom
//! properties instead, so the same settings are translated into a `:root`
//! block that is appended to the stylesheet:
//!
//! ```text
//! primary = "#007bff"         :root {
//! family-primary = "Arial" →    --bulma-primary-h: 211deg;
//!                               --bulma-primary-s: 100%;
//!                               --bulma-primary-l: 50%;
//!                               --bulma-family-primary: Arial;
//!                             }
//! ```

use std::collections::HashMap;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::color::{hex_to_hsl, is_color_value};

/// Legacy variable names and the custom property each one maps to.
const VARIABLE_MAPPING: &[(&str, &str)] = &[
    // Primary color palette
    ("primary", "--bulma-primary"),
    ("link", "--bulma-link"),
    ("info", "--bulma-info"),
    ("success", "--bulma-success"),
    ("warning", "--bulma-warning"),
    ("danger", "--bulma-danger"),
    // Scheme colors
    ("white", "--bulma-white"),
    ("black", "--bulma-black"),
    ("light", "--bulma-light"),
    ("dark", "--bulma-dark"),
    // Typography
    ("family-primary", "--bulma-family-primary"),
    ("family-secondary", "--bulma-family-secondary"),
    ("family-code", "--bulma-family-code"),
    // Sizes
    ("size-1", "--bulma-size-1"),
    ("size-2", "--bulma-size-2"),
    ("size-3", "--bulma-size-3"),
    ("size-4", "--bulma-size-4"),
    ("size-5", "--bulma-size-5"),
    ("size-6", "--bulma-size-6"),
    ("size-7", "--bulma-size-7"),
    ("size-small", "--bulma-size-small"),
    ("size-normal", "--bulma-size-normal"),
    ("size-medium", "--bulma-size-medium"),
    ("size-large", "--bulma-size-large"),
    // Weights
    ("weight-light", "--bulma-weight-light"),
    ("weight-normal", "--bulma-weight-normal"),
    ("weight-medium", "--bulma-weight-medium"),
    ("weight-semibold", "--bulma-weight-semibold"),
    ("weight-bold", "--bulma-weight-bold"),
    ("weight-extrabold", "--bulma-weight-extrabold"),
    // Border radius
    ("radius", "--bulma-radius"),
    ("radius-small", "--bulma-radius-small"),
    ("radius-medium", "--bulma-radius-medium"),
    ("radius-large", "--bulma-radius-large"),
    ("radius-rounded", "--bulma-radius-rounded"),
    // Spacing
    ("block-spacing", "--bulma-block-spacing"),
    // Animation
    ("duration", "--bulma-duration"),
    ("easing", "--bulma-easing"),
    ("speed", "--bulma-speed"),
];

static VARIABLE_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| VARIABLE_MAPPING.iter().copied().collect());

/// Prefix given to variables that have no entry in the mapping table.
const CSS_VARIABLE_PREFIX: &str = "--bulma-";

/// Theme variables in the order they were configured.
///
/// Order only affects the order of the emitted declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleVariables(IndexMap<String, String>);

impl StyleVariables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, keeping its original position if it already exists.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleVariables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// The built-in table from legacy SASS variable names to Bulma CSS variables.
pub fn variable_mapping() -> &'static HashMap<&'static str, &'static str> {
    &VARIABLE_MAP
}

/// Resolve the custom property name for a legacy variable.
///
/// Unmapped names are prefixed with `--bulma-` unchanged.
pub fn css_variable_name(name: &str) -> String {
    match VARIABLE_MAP.get(name) {
        Some(css_var) => (*css_var).to_string(),
        None => format!("{CSS_VARIABLE_PREFIX}{name}"),
    }
}

/// Convert legacy theme variables into a `:root` block of CSS declarations.
///
/// Color values (see [`is_color_value`]) are split into `-h`, `-s` and `-l`
/// properties. Values that look like colors but cannot be converted, such as
/// `rgb(...)`, are emitted verbatim like any other value so that arbitrary
/// CSS keeps working.
///
/// Returns an empty string when there are no variables.
///
/// # Example
///
/// ```
/// use simple_bulma_css::{StyleVariables, convert_variables};
///
/// let variables: StyleVariables = [("primary", "#007bff"), ("radius", "8px")]
///     .into_iter()
///     .collect();
///
/// let css = convert_variables(&variables);
/// assert!(css.contains("  --bulma-primary-h: 211deg;"));
/// assert!(css.contains("  --bulma-radius: 8px;"));
/// ```
pub fn convert_variables(variables: &StyleVariables) -> String {
    if variables.is_empty() {
        return String::new();
    }

    let mut declarations: Vec<String> = Vec::new();

    for (name, value) in variables.iter() {
        let css_var = css_variable_name(name);

        if is_color_value(value) {
            match hex_to_hsl(value) {
                Ok(hsl) => {
                    declarations.push(format!("  {css_var}-h: {}deg;", hsl.hue));
                    declarations.push(format!("  {css_var}-s: {}%;", hsl.saturation));
                    declarations.push(format!("  {css_var}-l: {}%;", hsl.lightness));
                    continue;
                }
                Err(err) => {
                    tracing::debug!(variable = name, %err, "emitting color value verbatim");
                }
            }
        }

        declarations.push(format!("  {css_var}: {value};"));
    }

    format!(":root {{\n{}\n}}\n", declarations.join("\n"))
}

/// Render variables as SASS assignments (`$name: value;`).
///
/// This is the preamble Bulma 0.x themes expect before Bulma's own sources
/// are imported.
pub fn unpack_sass_variables(variables: &StyleVariables) -> String {
    variables
        .iter()
        .map(|(name, value)| format!("${name}: {value};\n"))
        .collect()
}
