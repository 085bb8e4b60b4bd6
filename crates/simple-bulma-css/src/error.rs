//! Error types for Bulma theme operations.
//!
//! Copyright (c) 2025 Posit, PBC

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving colors, settings and stylesheets
#[derive(Debug, Error)]
pub enum BulmaError {
    /// A color could not be normalized into six hex digits
    #[error("Invalid hex color: {input}")]
    InvalidColor { input: String },

    /// A theme name was requested that has no `<name>_variables` table
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Settings have an unexpected structure
    #[error("Invalid Bulma settings: {message}")]
    Settings { message: String },

    /// Settings document is not valid TOML
    #[error("Failed to parse Bulma settings: {0}")]
    Toml(#[from] toml::de::Error),

    /// The pre-compiled Bulma stylesheet to patch does not exist
    #[error("Pre-compiled Bulma CSS not found at {}", .path.display())]
    MissingPrecompiled { path: PathBuf },

    /// File I/O error
    #[error("Failed to read Bulma file: {0}")]
    Io(#[from] std::io::Error),
}
