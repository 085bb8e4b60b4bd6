//! Bulma settings extraction from a TOML document.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! Settings are read once by the caller and passed around explicitly.
//!
//! # Configuration Format
//!
//! ```toml
//! # "all", or a list of extension names. Absent means none.
//! extensions = ["bulma-tooltip", "bulma-calendar"]
//!
//! # Variables for the default theme (css/bulma.css)
//! [variables]
//! primary = "#007bff"
//! family-primary = "Arial"
//!
//! # Any `<name>_variables` table defines an extra theme (css/<name>_bulma.css)
//! [alt_variables]
//! primary = "#ff6b6b"
//! ```

use std::path::Path;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::BulmaError;
use crate::variables::StyleVariables;

/// Settings keys that define a named theme, capturing the theme name.
static THEME_VARIABLES_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<name>\w+)_variables$").unwrap());

/// Which extensions are enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extensions {
    /// Every bundled extension
    All,
    /// Only the named extensions
    Named(Vec<String>),
}

impl Default for Extensions {
    fn default() -> Self {
        Extensions::Named(Vec::new())
    }
}

impl Extensions {
    /// Check if the extension with the given directory name is enabled.
    pub fn is_enabled(&self, extension: &str) -> bool {
        match self {
            Extensions::All => true,
            Extensions::Named(names) => names.iter().any(|name| name == extension),
        }
    }
}

/// Parsed Bulma settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulmaSettings {
    /// Enabled extensions
    pub extensions: Extensions,

    /// Variables for the default theme
    pub variables: StyleVariables,

    /// Named themes in document order
    pub themes: IndexMap<String, StyleVariables>,
}

impl BulmaSettings {
    /// Read and parse a settings file.
    ///
    /// # Errors
    ///
    /// Returns `BulmaError::Io` if the file cannot be read, and any error
    /// [`BulmaSettings::from_toml_str`] returns.
    pub fn load(path: &Path) -> Result<Self, BulmaError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse settings from TOML source.
    ///
    /// Keys other than `extensions`, `variables` and `<name>_variables` are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns `BulmaError::Toml` for malformed TOML and
    /// `BulmaError::Settings` when a known key has an unexpected shape.
    ///
    /// # Example
    ///
    /// ```
    /// use simple_bulma_css::BulmaSettings;
    ///
    /// let settings = BulmaSettings::from_toml_str(r##"
    /// extensions = "all"
    ///
    /// [variables]
    /// primary = "#000000"
    ///
    /// [dark_variables]
    /// primary = "#ffffff"
    /// "##).unwrap();
    ///
    /// assert!(settings.is_enabled("bulma-tooltip"));
    /// assert_eq!(settings.theme_names().collect::<Vec<_>>(), ["dark"]);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, BulmaError> {
        let table: toml::Table = toml::from_str(source)?;
        Self::from_table(&table)
    }

    /// Extract settings from an already parsed TOML table.
    pub fn from_table(table: &toml::Table) -> Result<Self, BulmaError> {
        let extensions = match table.get("extensions") {
            None => Extensions::default(),
            Some(value) => extract_extensions(value)?,
        };

        let variables = match table.get("variables") {
            None => StyleVariables::new(),
            Some(value) => extract_variables("variables", value)?,
        };

        let mut themes = IndexMap::new();
        for (key, value) in table {
            if let Some(captures) = THEME_VARIABLES_KEY.captures(key) {
                let name = captures["name"].to_string();
                tracing::debug!(theme = %name, "found theme settings");
                themes.insert(name, extract_variables(key, value)?);
            }
        }

        Ok(Self {
            extensions,
            variables,
            themes,
        })
    }

    /// Check if an extension is enabled.
    pub fn is_enabled(&self, extension: &str) -> bool {
        self.extensions.is_enabled(extension)
    }

    /// Names of the configured extra themes, in document order.
    pub fn theme_names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// Variables for a theme, or for the default theme when `theme` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `BulmaError::UnknownTheme` if no such theme is configured.
    pub fn theme_variables(&self, theme: Option<&str>) -> Result<&StyleVariables, BulmaError> {
        match theme {
            None => Ok(&self.variables),
            Some(name) => self
                .themes
                .get(name)
                .ok_or_else(|| BulmaError::UnknownTheme(name.to_string())),
        }
    }
}

fn extract_extensions(value: &toml::Value) -> Result<Extensions, BulmaError> {
    if let Some(s) = value.as_str() {
        return match s {
            "all" | "_all" => Ok(Extensions::All),
            other => Err(BulmaError::Settings {
                message: format!(
                    "extensions must be \"all\" or an array of extension names, got \"{other}\""
                ),
            }),
        };
    }

    if let Some(items) = value.as_array() {
        let mut names = Vec::with_capacity(items.len());
        for item in items {
            match item.as_str() {
                Some(name) => names.push(name.to_string()),
                None => {
                    return Err(BulmaError::Settings {
                        message: "extensions array must contain only strings".to_string(),
                    });
                }
            }
        }
        return Ok(Extensions::Named(names));
    }

    Err(BulmaError::Settings {
        message: "extensions must be \"all\" or an array of extension names".to_string(),
    })
}

fn extract_variables(key: &str, value: &toml::Value) -> Result<StyleVariables, BulmaError> {
    let Some(table) = value.as_table() else {
        return Err(BulmaError::Settings {
            message: format!("{key} must be a table of variable names to values"),
        });
    };

    let mut variables = StyleVariables::new();
    for (name, value) in table {
        let value = match value {
            toml::Value::String(s) => s.clone(),
            toml::Value::Integer(i) => i.to_string(),
            // Debug keeps the decimal point of whole floats (`1.0`, not `1`)
            toml::Value::Float(f) => format!("{f:?}"),
            _ => {
                return Err(BulmaError::Settings {
                    message: format!("{key}.{name} must be a string or a number"),
                });
            }
        };
        variables.insert(name.as_str(), value);
    }
    Ok(variables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_settings() {
        let settings = BulmaSettings::from_toml_str("").unwrap();
        assert_eq!(settings, BulmaSettings::default());
        assert!(settings.variables.is_empty());
        assert!(settings.themes.is_empty());
        assert!(!settings.is_enabled("bulma-tooltip"));
    }

    #[test]
    fn test_extensions_list() {
        let settings =
            BulmaSettings::from_toml_str(r#"extensions = ["bulma-tooltip", "bulma-calendar"]"#)
                .unwrap();
        assert!(settings.is_enabled("bulma-tooltip"));
        assert!(settings.is_enabled("bulma-calendar"));
        assert!(!settings.is_enabled("bulma-slider"));
    }

    #[test]
    fn test_extensions_all() {
        for source in [r#"extensions = "all""#, r#"extensions = "_all""#] {
            let settings = BulmaSettings::from_toml_str(source).unwrap();
            assert_eq!(settings.extensions, Extensions::All);
            assert!(settings.is_enabled("any-extension"));
        }
    }

    #[test]
    fn test_extensions_empty_list() {
        let settings = BulmaSettings::from_toml_str("extensions = []").unwrap();
        assert!(!settings.is_enabled("bulma-tooltip"));
    }

    #[test]
    fn test_extensions_invalid() {
        for source in [
            r#"extensions = "some""#,
            "extensions = 3",
            "extensions = [1, 2]",
        ] {
            let err = BulmaSettings::from_toml_str(source).unwrap_err();
            assert!(matches!(err, BulmaError::Settings { .. }), "{source}: {err:?}");
        }
    }

    #[test]
    fn test_variables_preserve_document_order() {
        let settings = BulmaSettings::from_toml_str(
            r##"
[variables]
size-1 = "6rem"
primary = "#000000"
family-primary = "Arial"
"##,
        )
        .unwrap();
        let names: Vec<&str> = settings.variables.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["size-1", "primary", "family-primary"]);
    }

    #[test]
    fn test_numeric_variables() {
        let settings = BulmaSettings::from_toml_str(
            r#"
[variables]
weight-bold = 700
speed = 86.5
"#,
        )
        .unwrap();
        assert_eq!(settings.variables.get("weight-bold"), Some("700"));
        assert_eq!(settings.variables.get("speed"), Some("86.5"));
    }

    #[test]
    fn test_whole_float_variables_keep_decimal_point() {
        let settings =
            BulmaSettings::from_toml_str("[variables]\nline-height = 1.0\nscale = 2.50\n").unwrap();
        assert_eq!(settings.variables.get("line-height"), Some("1.0"));
        assert_eq!(settings.variables.get("scale"), Some("2.5"));
    }

    #[test]
    fn test_invalid_variable_value() {
        let err = BulmaSettings::from_toml_str("[variables]\nprimary = true").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid Bulma settings: variables.primary must be a string or a number"
        );
    }

    #[test]
    fn test_variables_not_a_table() {
        let err = BulmaSettings::from_toml_str(r#"variables = "primary""#).unwrap_err();
        assert!(matches!(err, BulmaError::Settings { .. }));
    }

    #[test]
    fn test_theme_discovery() {
        let settings = BulmaSettings::from_toml_str(
            r##"
[variables]
primary = "#007bff"

[alt_variables]
primary = "#ff6b6b"
link = "#28a745"

[high_contrast_variables]
primary = "black"

[not-a-theme]
primary = "red"
"##,
        )
        .unwrap();

        let names: Vec<&str> = settings.theme_names().collect();
        assert_eq!(names, ["alt", "high_contrast"]);
        assert_eq!(
            settings.theme_variables(Some("alt")).unwrap().get("link"),
            Some("#28a745")
        );
        assert_eq!(
            settings.theme_variables(None).unwrap().get("primary"),
            Some("#007bff")
        );
    }

    #[test]
    fn test_unknown_theme() {
        let settings = BulmaSettings::from_toml_str("").unwrap();
        let err = settings.theme_variables(Some("missing")).unwrap_err();
        assert!(matches!(err, BulmaError::UnknownTheme(name) if name == "missing"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = BulmaSettings::from_toml_str("[variables").unwrap_err();
        assert!(matches!(err, BulmaError::Toml(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = BulmaSettings::load(&dir.path().join("bulma.toml")).unwrap_err();
        assert!(matches!(err, BulmaError::Io(_)));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bulma.toml");
        std::fs::write(&path, "[variables]\nprimary = \"#000000\"\n").unwrap();
        let settings = BulmaSettings::load(&path).unwrap();
        assert_eq!(settings.variables.get("primary"), Some("#000000"));
    }
}
