//! HTML for including Bulma in a page.
//!
//! Copyright (c) 2025 Posit, PBC

use crate::settings::BulmaSettings;
use crate::stylesheet::stylesheet_path;

/// `id` attribute of the default theme's stylesheet link.
const STYLESHEET_ID: &str = "bulma-css";

/// Join a static URL prefix (e.g., `/static/`) and a relative asset path.
pub fn static_url(prefix: &str, path: &str) -> String {
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// The theme to link for a requested theme name.
///
/// A name that is not one of the configured `<name>_variables` themes has no
/// stylesheet, so it falls back to the default theme with a warning.
pub fn resolve_theme<'a>(settings: &BulmaSettings, theme: Option<&'a str>) -> Option<&'a str> {
    let theme = theme?;
    if settings.theme_names().any(|name| name == theme) {
        return Some(theme);
    }

    let available: Vec<&str> = settings.theme_names().collect();
    tracing::warn!(
        "Theme '{}' does not match any configured theme ({}), using the default theme",
        theme,
        available.join(", ")
    );
    None
}

/// The tags that load a theme's stylesheet and, with `include_js`, one
/// deferred `<script>` per extension script. One tag per line.
///
/// The stylesheet is preloaded, then linked with an `id` of `bulma-css`
/// (default theme) or `bulma-css-<theme>`. Unknown themes fall back to the
/// default theme, see [`resolve_theme`].
///
/// # Example
///
/// ```
/// use simple_bulma_css::{BulmaSettings, bulma_tags};
///
/// let settings = BulmaSettings::from_toml_str("[dark_variables]\nprimary = \"#333\"").unwrap();
/// let html = bulma_tags("/static/", &settings, Some("dark"), &[], true);
/// assert_eq!(
///     html,
///     "<link rel=\"preload\" href=\"/static/css/dark_bulma.css\" as=\"style\">\n\
///      <link rel=\"stylesheet\" href=\"/static/css/dark_bulma.css\" id=\"bulma-css-dark\">"
/// );
/// ```
pub fn bulma_tags(
    static_prefix: &str,
    settings: &BulmaSettings,
    theme: Option<&str>,
    scripts: &[String],
    include_js: bool,
) -> String {
    let theme = resolve_theme(settings, theme);
    let css = static_url(static_prefix, &stylesheet_path(theme));
    let id = match theme {
        Some(theme) => format!("{STYLESHEET_ID}-{theme}"),
        None => STYLESHEET_ID.to_string(),
    };

    let mut html = vec![
        format!(r#"<link rel="preload" href="{css}" as="style">"#),
        format!(r#"<link rel="stylesheet" href="{css}" id="{id}">"#),
    ];

    if include_js {
        for script in scripts {
            let src = static_url(static_prefix, script);
            html.push(format!(
                r#"<script defer type="text/javascript" src="{src}"></script>"#
            ));
        }
    }

    html.join("\n")
}
