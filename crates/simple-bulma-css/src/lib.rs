//! Bulma theming and static asset infrastructure.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! This crate provides:
//! - Color classification and hex to HSL conversion
//! - Conversion of legacy SASS theme variables into Bulma 1.0+ CSS custom properties
//! - Settings parsing with multi-theme support
//! - Stylesheet and script resolution for Bulma extensions
//! - Themed stylesheets patched from pre-compiled Bulma CSS
//! - HTML tags for including the results in a page

mod assets;
mod color;
mod error;
mod html;
mod settings;
mod stylesheet;
mod variables;

pub use assets::{EXTENSIONS_DIR, ExtensionListing, STYLESHEET_SEARCHES, enabled_scripts};
pub use color::{Hsl, hex_to_hsl, is_color_value, named_color_hex};
pub use error::BulmaError;
pub use html::{bulma_tags, resolve_theme, static_url};
pub use settings::{BulmaSettings, Extensions};
pub use stylesheet::{
    DEFAULT_STYLESHEET, ThemeStylesheet, build_theme_stylesheets, inject_variables,
    load_precompiled, stylesheet_path,
};
pub use variables::{
    StyleVariables, convert_variables, css_variable_name, unpack_sass_variables, variable_mapping,
};
