//! Stylesheet and script resolution for Bulma extensions.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! Bulma extensions are third-party packages with no common layout: some ship
//! SASS sources under `src/sass`, some only a compiled `dist/*.css`. The
//! resolution policy here picks the "best" stylesheet set and script for an
//! extension from a listing of its files, so the result only depends on the
//! listing and never on directory iteration order.
//!
//! Listing the files is left to the caller.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use once_cell::sync::Lazy;

use crate::settings::Extensions;

/// Directory holding the bundled extensions, relative to the static root.
pub const EXTENSIONS_DIR: &str = "extensions";

/// Stylesheet searches as (directory, file name glob), in priority order.
///
/// The first search with any match wins. Matches are recursive below the
/// directory; an empty directory means the whole extension.
pub const STYLESHEET_SEARCHES: &[(&str, &str)] = &[
    ("src/sass", "_all.sass"),
    ("src/sass", "index.sass"),
    ("src/sass", "*.sass"),
    ("src", "*.s[ac]ss"),
    ("dist", "*.sass"),
    ("dist", "*.min.css"),
    ("dist", "*.css"),
    ("", "*.s[ac]ss"),
];

/// Script searches below `dist`, in priority order.
const SCRIPT_SEARCHES: &[&str] = &["*.min.js", "*.js"];

/// Directory scripts are searched in.
const SCRIPT_DIR: &str = "dist";

/// Extensions that are enabled whenever the extension they accompany is.
const COMPANION_EXTENSIONS: &[(&str, &str)] = &[("bulma-collapsible", "bulma-collapsible-runner")];

static STYLESHEET_MATCHERS: Lazy<Vec<GlobMatcher>> = Lazy::new(|| {
    STYLESHEET_SEARCHES
        .iter()
        .map(|(_, glob)| Glob::new(glob).unwrap().compile_matcher())
        .collect()
});

static SCRIPT_MATCHERS: Lazy<Vec<GlobMatcher>> = Lazy::new(|| {
    SCRIPT_SEARCHES
        .iter()
        .map(|glob| Glob::new(glob).unwrap().compile_matcher())
        .collect()
});

/// The files of one extension, relative to the extension's own directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionListing {
    /// Extension directory name (e.g., `bulma-tooltip`)
    pub name: String,

    /// File paths relative to the extension directory, sorted
    files: Vec<PathBuf>,
}

impl ExtensionListing {
    /// Create a listing. Files are sorted so resolution is deterministic.
    pub fn new(name: impl Into<String>, files: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        let mut files: Vec<PathBuf> = files.into_iter().map(Into::into).collect();
        files.sort();
        Self {
            name: name.into(),
            files,
        }
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Stylesheets to import for this extension.
    ///
    /// Paths are `/`-separated and relative to the static root
    /// (`extensions/<name>/...`).
    /// Compiled `.css` matches lose their suffix so that a SASS `@import`
    /// inlines them instead of emitting a plain CSS import.
    ///
    /// Returns an empty list for an extension without stylesheets.
    ///
    /// # Example
    ///
    /// ```
    /// use simple_bulma_css::ExtensionListing;
    ///
    /// let listing = ExtensionListing::new(
    ///     "bulma-tooltip",
    ///     ["dist/css/bulma-tooltip.min.css", "dist/css/bulma-tooltip.css"],
    /// );
    /// assert_eq!(
    ///     listing.stylesheets(),
    ///     ["extensions/bulma-tooltip/dist/css/bulma-tooltip.min"]
    /// );
    /// ```
    pub fn stylesheets(&self) -> Vec<String> {
        for ((dir, glob), matcher) in STYLESHEET_SEARCHES.iter().zip(STYLESHEET_MATCHERS.iter()) {
            let strip_suffix = glob.ends_with(".css");
            let found: Vec<String> = self
                .files_below(dir)
                .filter(|file| file_name_matches(file, matcher))
                .map(|file| {
                    let file = if strip_suffix {
                        file.with_extension("")
                    } else {
                        file.to_path_buf()
                    };
                    self.static_path(&file)
                })
                .collect();

            if !found.is_empty() {
                return found;
            }
        }

        Vec::new()
    }

    /// The script to include for this extension, preferring minified builds.
    ///
    /// Returns a `/`-separated path relative to the static root.
    pub fn script(&self) -> Option<String> {
        SCRIPT_MATCHERS.iter().find_map(|matcher| {
            self.files_below(SCRIPT_DIR)
                .find(|file| file_name_matches(file, matcher))
                .map(|file| self.static_path(file))
        })
    }

    fn files_below<'a>(&'a self, dir: &'a str) -> impl Iterator<Item = &'a Path> + 'a {
        self.files
            .iter()
            .map(PathBuf::as_path)
            .filter(move |file| dir.is_empty() || file.starts_with(dir))
    }

    fn static_path(&self, file: &Path) -> String {
        to_posix(&Path::new(EXTENSIONS_DIR).join(&self.name).join(file))
    }
}

/// Scripts for every enabled extension, in listing order.
///
/// An extension listed in the companion table is included whenever the
/// extension it accompanies is enabled.
pub fn enabled_scripts(listings: &[ExtensionListing], extensions: &Extensions) -> Vec<String> {
    listings
        .iter()
        .filter(|listing| is_enabled_with_companions(&listing.name, extensions))
        .filter_map(ExtensionListing::script)
        .collect()
}

fn is_enabled_with_companions(name: &str, extensions: &Extensions) -> bool {
    extensions.is_enabled(name)
        || COMPANION_EXTENSIONS
            .iter()
            .any(|(parent, companion)| *companion == name && extensions.is_enabled(parent))
}

fn file_name_matches(file: &Path, matcher: &GlobMatcher) -> bool {
    file.file_name().is_some_and(|name| matcher.is_match(name))
}

fn to_posix(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ext_path(path: &str) -> String {
        format!("extensions/ext/{path}")
    }

    #[test]
    fn test_stylesheets_prefer_all_sass() {
        let listing = ExtensionListing::new("ext", ["src/sass/other.sass", "src/sass/_all.sass"]);
        assert_eq!(listing.stylesheets(), [ext_path("src/sass/_all.sass")]);
    }

    #[test]
    fn test_stylesheets_fall_back_to_index() {
        let listing = ExtensionListing::new("ext", ["src/sass/index.sass", "dist/ext.css"]);
        assert_eq!(listing.stylesheets(), [ext_path("src/sass/index.sass")]);
    }

    #[test]
    fn test_stylesheets_any_sass_in_src_sass_is_recursive() {
        let listing = ExtensionListing::new(
            "ext",
            ["src/sass/b.sass", "src/sass/parts/a.sass", "src/ext.scss"],
        );
        assert_eq!(
            listing.stylesheets(),
            [ext_path("src/sass/b.sass"), ext_path("src/sass/parts/a.sass")]
        );
    }

    #[test]
    fn test_stylesheets_src_accepts_scss() {
        let listing = ExtensionListing::new("ext", ["src/ext.scss", "dist/ext.sass"]);
        assert_eq!(listing.stylesheets(), [ext_path("src/ext.scss")]);
    }

    #[test]
    fn test_stylesheets_dist_sass_before_css() {
        let listing = ExtensionListing::new("ext", ["dist/ext.sass", "dist/ext.min.css"]);
        assert_eq!(listing.stylesheets(), [ext_path("dist/ext.sass")]);
    }

    #[test]
    fn test_stylesheets_minified_css_loses_suffix() {
        let listing = ExtensionListing::new("ext", ["dist/ext.css", "dist/ext.min.css"]);
        assert_eq!(listing.stylesheets(), [ext_path("dist/ext.min")]);
    }

    #[test]
    fn test_stylesheets_plain_css_loses_suffix() {
        let listing = ExtensionListing::new("ext", ["dist/style.css"]);
        let stylesheets = listing.stylesheets();
        assert_eq!(stylesheets, [ext_path("dist/style")]);
        assert!(!stylesheets[0].ends_with(".css"));
    }

    #[test]
    fn test_stylesheets_root_scss_last() {
        let listing = ExtensionListing::new("ext", ["ext.scss", "README.md"]);
        assert_eq!(listing.stylesheets(), [ext_path("ext.scss")]);
    }

    #[test]
    fn test_stylesheets_none() {
        let listing = ExtensionListing::new("ext", ["README.md", "dist/ext.js"]);
        assert!(listing.stylesheets().is_empty());
    }

    #[test]
    fn test_stylesheets_ignore_directory_name_prefixes() {
        // `distribution/` is not `dist/`
        let listing = ExtensionListing::new("ext", ["distribution/ext.css"]);
        assert!(listing.stylesheets().is_empty());
    }

    #[test]
    fn test_script_prefers_minified() {
        let listing =
            ExtensionListing::new("bulma-tooltip", ["dist/bulma-tooltip.js", "dist/bulma-tooltip.min.js"]);
        assert_eq!(
            listing.script().as_deref(),
            Some("extensions/bulma-tooltip/dist/bulma-tooltip.min.js")
        );
    }

    #[test]
    fn test_script_falls_back_to_plain_js() {
        let listing = ExtensionListing::new("ext", ["dist/js/ext.js", "src/ext.min.js"]);
        assert_eq!(listing.script().as_deref(), Some("extensions/ext/dist/js/ext.js"));
    }

    #[test]
    fn test_script_none() {
        let listing = ExtensionListing::new("ext", ["dist/ext.css"]);
        assert_eq!(listing.script(), None);
    }

    #[test]
    fn test_enabled_scripts() {
        let listings = [
            ExtensionListing::new("bulma-tooltip", ["dist/bulma-tooltip.min.js"]),
            ExtensionListing::new("bulma-slider", ["dist/bulma-slider.min.js"]),
            ExtensionListing::new("bulma-divider", ["dist/bulma-divider.min.css"]),
        ];
        let extensions = Extensions::Named(vec![
            "bulma-tooltip".to_string(),
            "bulma-divider".to_string(),
        ]);
        assert_eq!(
            enabled_scripts(&listings, &extensions),
            ["extensions/bulma-tooltip/dist/bulma-tooltip.min.js"]
        );
    }

    #[test]
    fn test_enabled_scripts_collapsible_runner() {
        let listings = [
            ExtensionListing::new("bulma-collapsible", ["dist/bulma-collapsible.min.js"]),
            ExtensionListing::new(
                "bulma-collapsible-runner",
                ["dist/js/bulma-collapsible-runner.js"],
            ),
        ];
        let extensions = Extensions::Named(vec!["bulma-collapsible".to_string()]);
        assert_eq!(
            enabled_scripts(&listings, &extensions),
            [
                "extensions/bulma-collapsible/dist/bulma-collapsible.min.js",
                "extensions/bulma-collapsible-runner/dist/js/bulma-collapsible-runner.js",
            ]
        );
    }

    #[test]
    fn test_enabled_scripts_none_enabled() {
        let listings = [ExtensionListing::new("bulma-tooltip", ["dist/bulma-tooltip.min.js"])];
        assert!(enabled_scripts(&listings, &Extensions::default()).is_empty());
    }

    #[test]
    fn test_stylesheets_and_script_use_forward_slashes() {
        let listing = ExtensionListing::new(
            "bulma-calendar",
            [
                Path::new("dist").join("css").join("bulma-calendar.min.css"),
                Path::new("dist").join("js").join("bulma-calendar.min.js"),
            ],
        );
        assert_eq!(
            listing.stylesheets(),
            ["extensions/bulma-calendar/dist/css/bulma-calendar.min"]
        );
        assert_eq!(
            listing.script().as_deref(),
            Some("extensions/bulma-calendar/dist/js/bulma-calendar.min.js")
        );
    }

    #[test]
    fn test_stylesheet_searches_structure() {
        assert_eq!(STYLESHEET_SEARCHES.len(), 8);
        assert_eq!(STYLESHEET_SEARCHES[0], ("src/sass", "_all.sass"));
        assert_eq!(STYLESHEET_SEARCHES[7], ("", "*.s[ac]ss"));
    }
}
