#![allow(clippy::module_inception)]

//! pxl-engine: pixel art, ASCII art and dithered art from a decoded image
//!
//! The crate is pure computation: it takes a [`PixelBuffer`] of RGBA
//! samples and returns owned output. It performs no I/O and holds no global
//! state.
//!
//! # Quick Start
//!
//! ```
//! use pxl_engine::{pixelate, Adjustments, NamedPalette, PixelBuffer};
//! use pxl_engine::preprocess::{sample, SampleLimits};
//!
//! let source = PixelBuffer::filled(64, 48, [40, 120, 200, 255]).unwrap();
//! let adjusted = sample(&source, SampleLimits::none(), &Adjustments::new().contrast(20.0));
//!
//! let palette = NamedPalette::Pico8.palette();
//! let art = pixelate(&adjusted, 8, Some(&palette));
//! assert_eq!((art.width(), art.height()), (64, 48));
//! ```
//!
//! # Renderers
//!
//! | Mode | Entry point | Output |
//! |------|-------------|--------|
//! | Pixel art | [`pixelate`] | [`Raster`] of solid blocks |
//! | ASCII art | [`ascii::AsciiGrid::build`] | glyph grid + text |
//! | Dithered art | [`dither::dither`] | [`Raster`] of palette colors |
//!
//! ASCII glyphs still have to be rasterized with a font; that step lives
//! outside this crate.
//!
//! # Color Model
//!
//! Everything works on 8-bit sRGB values directly. Nearest-color search is
//! squared Euclidean distance in RGB, ties going to the earlier palette
//! entry. Luminance uses the BT.709 weights.

pub mod ascii;
pub mod buffer;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;
pub mod preprocess;

mod names;
mod pixelate;


pub use buffer::{ImageError, PixelBuffer};
pub use color::{clamp_channel, hex_to_rgb, rgb_to_hex, Rgb};
pub use output::Raster;
pub use palette::{NamedPalette, Palette, PaletteChoice, PaletteError, ParseColorError};
pub use pixelate::pixelate;
pub use preprocess::Adjustments;
