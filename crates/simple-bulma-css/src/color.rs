//! Color classification and hex to HSL conversion.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! Bulma 1.0+ themes colors through three custom properties per color
//! (`--bulma-primary-h`, `--bulma-primary-s`, `--bulma-primary-l`), so legacy
//! theme colors given as hex strings or CSS color names have to be split into
//! hue, saturation and lightness before they can be emitted.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::BulmaError;

/// CSS color names recognized in legacy theme variables, with their hex value.
const NAMED_COLORS: &[(&str, &str)] = &[
    ("white", "#ffffff"),
    ("black", "#000000"),
    ("red", "#ff0000"),
    ("green", "#00ff00"),
    ("blue", "#0000ff"),
    ("yellow", "#ffff00"),
    ("cyan", "#00ffff"),
    ("magenta", "#ff00ff"),
    ("orange", "#ffa500"),
    ("purple", "#800080"),
    ("pink", "#ffc0cb"),
    ("brown", "#a52a2a"),
    ("gray", "#808080"),
    ("grey", "#808080"),
];

/// `#rgb` or `#rrggbb`.
static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// Functional notation such as `hsl(`, `rgba (`.
static COLOR_FUNCTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:hsla?|rgba?)\s*\(").unwrap());

/// A color in hue/saturation/lightness form.
///
/// Hue is in whole degrees within `0..360`, saturation and lightness are
/// whole percentages within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    pub fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

impl From<Hsl> for (u16, u8, u8) {
    fn from(hsl: Hsl) -> Self {
        (hsl.hue, hsl.saturation, hsl.lightness)
    }
}

/// Look up the hex value of a CSS color name (case-insensitive).
pub fn named_color_hex(name: &str) -> Option<&'static str> {
    NAMED_COLORS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|(_, hex)| *hex)
}

/// Check whether a theme variable value looks like a color.
///
/// Recognizes `#rgb`/`#rrggbb` hex colors, the named colors in
/// [`named_color_hex`], and `hsl()`/`hsla()`/`rgb()`/`rgba()` notation.
/// Values that look like colors are not guaranteed to convert: functional
/// notation is detected here but rejected by [`hex_to_hsl`].
///
/// # Example
///
/// ```
/// use simple_bulma_css::is_color_value;
///
/// assert!(is_color_value("#007bff"));
/// assert!(is_color_value("Blue"));
/// assert!(is_color_value("rgba(0, 123, 255, 0.8)"));
/// assert!(!is_color_value("1rem"));
/// ```
pub fn is_color_value(value: &str) -> bool {
    HEX_COLOR.is_match(value) || named_color_hex(value).is_some() || COLOR_FUNCTION.is_match(value)
}

/// Convert a hex color or color name into HSL components.
///
/// The input is normalized before conversion:
/// - color names are replaced by their hex value
/// - a leading `#` is optional
/// - three-digit shorthand expands to six digits (`f0a` → `ff00aa`)
///
/// Components are rounded half away from zero; a hue that rounds up to 360
/// wraps to 0.
///
/// # Errors
///
/// Returns [`BulmaError::InvalidColor`] if the normalized input is not
/// exactly six hex digits.
///
/// # Example
///
/// ```
/// use simple_bulma_css::{Hsl, hex_to_hsl};
///
/// assert_eq!(hex_to_hsl("#f00").unwrap(), Hsl::new(0, 100, 50));
/// assert_eq!(hex_to_hsl("white").unwrap(), Hsl::new(0, 0, 100));
/// assert!(hex_to_hsl("#12345").is_err());
/// ```
pub fn hex_to_hsl(color: &str) -> Result<Hsl, BulmaError> {
    let invalid = || BulmaError::InvalidColor {
        input: color.to_string(),
    };

    let hex = named_color_hex(color).unwrap_or(color);
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    let hex: String = if hex.chars().count() == 3 {
        hex.chars().flat_map(|c| [c, c]).collect()
    } else {
        hex.to_string()
    };

    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |start: usize| -> Result<f64, BulmaError> {
        u8::from_str_radix(&hex[start..start + 2], 16)
            .map(|value| f64::from(value) / 255.0)
            .map_err(|_| invalid())
    };
    let red = channel(0)?;
    let green = channel(2)?;
    let blue = channel(4)?;

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let diff = max - min;

    let lightness = (max + min) / 2.0;

    // Achromatic colors have no hue; checking first avoids dividing by zero.
    let (hue, saturation) = if diff == 0.0 {
        (0.0, 0.0)
    } else {
        let saturation = if lightness < 0.5 {
            diff / (max + min)
        } else {
            diff / (2.0 - max - min)
        };

        let hue = if max == red {
            (green - blue) / diff + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / diff + 2.0
        } else {
            (red - green) / diff + 4.0
        };

        (hue / 6.0, saturation)
    };

    Ok(Hsl {
        hue: ((hue * 360.0).round() as u16) % 360,
        saturation: (saturation * 100.0).round() as u8,
        lightness: (lightness * 100.0).round() as u8,
    })
}
