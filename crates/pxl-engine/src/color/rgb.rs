//! 8-bit RGB color type
//!
//! All engine math happens on plain 8-bit sRGB values: averaging,
//! squared-distance palette matching and BT.709 luminance. No gamma
//! linearization is applied anywhere.

use std::fmt;
use std::str::FromStr;

use super::hex::hex_to_rgb;
use crate::palette::ParseColorError;

/// BT.709 luma weights for red, green and blue.
pub const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// A color with 8-bit red, green and blue channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value.
    ///
    /// Bits above the low 24 are ignored. This is what the registry tables
    /// are written in.
    ///
    /// # Example
    /// ```
    /// use pxl_engine::Rgb;
    /// assert_eq!(Rgb::from_u32(0x0f380f), Rgb::new(0x0f, 0x38, 0x0f));
    /// ```
    #[inline]
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Squared Euclidean distance to `other` in RGB space.
    #[inline]
    pub fn distance_sq(self, other: Rgb) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }

    /// BT.709 luminance on the 0..=255 scale.
    #[inline]
    pub fn luminance(self) -> f64 {
        LUMA_WEIGHTS[0] * f64::from(self.r)
            + LUMA_WEIGHTS[1] * f64::from(self.g)
            + LUMA_WEIGHTS[2] * f64::from(self.b)
    }

    /// BT.709 luminance normalized to `0.0..=1.0`.
    #[inline]
    pub fn relative_luminance(self) -> f64 {
        self.luminance() / 255.0
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.to_bytes()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s)
    }
}

/// Round a channel value and clamp it into `0..=255`.
///
/// NaN maps to 0.
#[inline]
pub fn clamp_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}
