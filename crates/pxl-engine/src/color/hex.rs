//! Hex color literal parsing and formatting.

use super::rgb::{clamp_channel, Rgb};
use crate::palette::ParseColorError;

/// Parse a hex color literal.
///
/// Accepts `rrggbb` or the `rgb` shorthand (each digit doubled), with or
/// without a leading `#`. Digits are case-insensitive.
///
/// # Errors
///
/// - [`ParseColorError::InvalidDigit`] for any non-hex character
/// - [`ParseColorError::InvalidLength`] when there are not 3 or 6 digits
///
/// # Example
/// ```
/// use pxl_engine::{hex_to_rgb, Rgb};
///
/// assert_eq!(hex_to_rgb("#9bbc0f").unwrap(), Rgb::new(0x9b, 0xbc, 0x0f));
/// assert_eq!(hex_to_rgb("fa0").unwrap(), Rgb::new(0xff, 0xaa, 0x00));
/// assert!(hex_to_rgb("#12345").is_err());
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ParseColorError> {
    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    let nibbles = digits
        .chars()
        .map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or(ParseColorError::InvalidDigit(c))
        })
        .collect::<Result<Vec<u8>, _>>()?;

    match nibbles.as_slice() {
        &[r, g, b] => Ok(Rgb::new(r * 17, g * 17, b * 17)),
        &[r1, r0, g1, g0, b1, b0] => Ok(Rgb::new(
            (r1 << 4) | r0,
            (g1 << 4) | g0,
            (b1 << 4) | b0,
        )),
        other => Err(ParseColorError::InvalidLength(other.len())),
    }
}

/// Format three channel values as a lowercase `#rrggbb` literal.
///
/// Each channel is rounded and clamped to `0..=255` first, so any valid
/// 8-bit triple round-trips through [`hex_to_rgb`] unchanged.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    Rgb::new(clamp_channel(r), clamp_channel(g), clamp_channel(b)).to_hex()
}
