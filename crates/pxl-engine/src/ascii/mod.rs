//! ASCII art: image cells mapped onto character ramps.
//!
//! This module produces the character grid and its text. Turning the grid
//! into pixels needs a font rasterizer and lives in the service crate.

mod charset;
mod grid;

pub use charset::{
    CharsetPreset, BLOCKS_CHARSET, BRAILLE_CHARSET, DENSE_CHARSET, HATCHING_CHARSET,
    MATRIX_CHARSET, MINIMAL_CHARSET, STANDARD_CHARSET, TECHNICAL_CHARSET,
};
pub use grid::{AsciiCell, AsciiGrid};
