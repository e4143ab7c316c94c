//! Character ramps for ASCII rendering.
//!
//! Every ramp starts with its lightest glyph (usually a space) and ends with
//! its densest one. Luminance indexes linearly into the ramp.

use crate::names;

/// Standard density ramp (10 levels).
pub const STANDARD_CHARSET: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Long ramp for fine gradations (68 levels).
#[rustfmt::skip]
pub const DENSE_CHARSET: &[char] = &[
    ' ', '.', '`', '^', '"', ',', ':', ';', 'I', 'l', '!', 'i', '>', '<', '~', '+', '_',
    '-', '?', ']', '[', '}', '{', '1', ')', '(', '|', '/', 't', 'f', 'j', 'r', 'x', 'n',
    'u', 'v', 'c', 'z', 'X', 'Y', 'U', 'J', 'C', 'L', 'Q', '0', 'O', 'Z', 'm', 'w', 'q',
    'p', 'd', 'b', 'k', 'h', 'a', 'o', '*', '#', 'M', 'W', '&', '8', '%', 'B', '@', '$',
];

/// Minimal ramp (5 levels).
pub const MINIMAL_CHARSET: &[char] = &[' ', '.', ':', '+', '#'];

/// Unicode shade blocks (5 levels).
pub const BLOCKS_CHARSET: &[char] = &[' ', '░', '▒', '▓', '█'];

/// Braille patterns U+2800 through U+283F (64 levels).
pub const BRAILLE_CHARSET: &[char] = &BRAILLE;

const BRAILLE: [char; 64] = braille_ramp();

/// Dots, bullets and geometric shapes (9 levels).
pub const TECHNICAL_CHARSET: &[char] = &[' ', '·', '•', '○', '●', '□', '■', '◊', '◆'];

/// Hex digits, ending in punctuation (25 levels).
#[rustfmt::skip]
pub const MATRIX_CHARSET: &[char] = &[
    ' ', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
    'a', 'b', 'c', 'd', 'e', 'f', '.', ':',
];

/// Box-drawing strokes then shade blocks (11 levels).
pub const HATCHING_CHARSET: &[char] = &[' ', '─', '│', '┼', '╱', '╲', '╳', '░', '▒', '▓', '█'];

const fn braille_ramp() -> [char; 64] {
    let mut out = ['\u{2800}'; 64];
    let mut i = 0;
    while i < 64 {
        out[i] = match char::from_u32(0x2800 + i as u32) {
            Some(c) => c,
            None => ' ',
        };
        i += 1;
    }
    out
}

/// A character ramp from the built-in registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharsetPreset {
    /// Standard density ramp
    #[default]
    Standard,
    /// 68-level ramp
    Dense,
    /// 5-level ramp for a clean look
    Minimal,
    /// Unicode shade blocks
    Blocks,
    /// Braille patterns
    Braille,
    /// Geometric symbols
    Technical,
    /// Hex digits
    Matrix,
    /// Line strokes and shades
    Hatching,
}

impl CharsetPreset {
    /// Every preset, in display order.
    pub const ALL: [CharsetPreset; 8] = [
        CharsetPreset::Standard,
        CharsetPreset::Dense,
        CharsetPreset::Minimal,
        CharsetPreset::Blocks,
        CharsetPreset::Braille,
        CharsetPreset::Technical,
        CharsetPreset::Matrix,
        CharsetPreset::Hatching,
    ];

    /// Registry key.
    pub fn name(self) -> &'static str {
        match self {
            CharsetPreset::Standard => "standard",
            CharsetPreset::Dense => "dense",
            CharsetPreset::Minimal => "minimal",
            CharsetPreset::Blocks => "blocks",
            CharsetPreset::Braille => "braille",
            CharsetPreset::Technical => "technical",
            CharsetPreset::Matrix => "matrix",
            CharsetPreset::Hatching => "hatching",
        }
    }

    /// Look up a preset by registry key. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| names::matches(name, p.name()))
    }

    /// The character ramp, lightest first.
    pub fn chars(self) -> &'static [char] {
        match self {
            CharsetPreset::Standard => STANDARD_CHARSET,
            CharsetPreset::Dense => DENSE_CHARSET,
            CharsetPreset::Minimal => MINIMAL_CHARSET,
            CharsetPreset::Blocks => BLOCKS_CHARSET,
            CharsetPreset::Braille => BRAILLE_CHARSET,
            CharsetPreset::Technical => TECHNICAL_CHARSET,
            CharsetPreset::Matrix => MATRIX_CHARSET,
            CharsetPreset::Hatching => HATCHING_CHARSET,
        }
    }
}
