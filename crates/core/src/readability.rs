//! WCAG contrast ratio between a text color and a background accent.

use crate::error::{Error, Result};

/// Contrast below this ratio should be flagged as hard to read.
pub const MIN_CONTRAST_RATIO: f64 = 4.5;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Parse `#rgb`, `#rgba`, `#rrggbb`, or `#rrggbbaa`. The `#` is optional
    /// and any alpha component is ignored.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            // Short form doubles each digit, CSS style: #abc reads as #aabbcc.
            3 | 4 => {
                let channel =
                    |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
                Some(Self {
                    r: channel(0)?,
                    g: channel(1)?,
                    b: channel(2)?,
                })
            }
            6 | 8 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Self {
                    r: channel(0)?,
                    g: channel(2)?,
                    b: channel(4)?,
                })
            }
            _ => None,
        }
    }

    /// WCAG relative luminance, 0 for black through 1 for white.
    pub fn relative_luminance(&self) -> f64 {
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn parse(color: &str) -> Result<Rgb> {
    Rgb::from_hex(color).ok_or_else(|| Error::InvalidColor(color.to_string()))
}

/// Contrast ratio of two hex colors, rounded to two decimals.
///
/// Symmetric in its arguments and always at least 1.0; black on white is 21.
pub fn readability_score(color_a: &str, color_b: &str) -> Result<f64> {
    let l1 = parse(color_a)?.relative_luminance() + 0.05;
    let l2 = parse(color_b)?.relative_luminance() + 0.05;
    let ratio = if l1 > l2 { l1 / l2 } else { l2 / l1 };
    Ok((ratio * 100.0).round() / 100.0)
}

/// Whether a ratio clears [`MIN_CONTRAST_RATIO`].
pub fn is_readable(ratio: f64) -> bool {
    ratio >= MIN_CONTRAST_RATIO
}
