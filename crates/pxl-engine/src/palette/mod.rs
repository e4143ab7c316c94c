//! Palette types and utilities
//!
//! This module provides the non-empty [`Palette`] type with nearest-color
//! search, the built-in [`NamedPalette`] registry, the [`PaletteChoice`]
//! a render request carries, and error types for parsing and validation.

mod error;
mod named;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use named::{NamedPalette, PaletteChoice};
pub use palette::Palette;
