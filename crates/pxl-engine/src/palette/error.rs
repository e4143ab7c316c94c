//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette validation.

use std::fmt;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Wrong number of hex digits (must be 3 or 6 after stripping '#')
    InvalidLength(usize),
    /// Character that is not a hexadecimal digit
    InvalidDigit(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength(len) => {
                write!(f, "invalid hex color length {len} (expected 3 or 6 digits)")
            }
            ParseColorError::InvalidDigit(c) => {
                write!(f, "invalid hex digit {c:?}")
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Error type for palette construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// No colors provided in palette
    EmptyPalette,
    /// A color literal in the list could not be parsed
    ParseColor {
        /// Position of the offending literal
        index: usize,
        /// Underlying parse failure
        error: ParseColorError,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => write!(f, "palette cannot be empty"),
            PaletteError::ParseColor { index, error } => {
                write!(f, "invalid color at index {index}: {error}")
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor { error, .. } => Some(error),
            PaletteError::EmptyPalette => None,
        }
    }
}
