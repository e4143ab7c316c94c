//! pxl - pixel art, ASCII art and dithered art
//!
//! Service layer over the `pxl-engine` transforms: serde-loadable render
//! options, registry name resolution, glyph rasterization for ASCII art
//! and the [`RenderService`](services::RenderService) entry points.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;

pub use error::{ConfigError, RenderError};
pub use models::{
    Artifact, AsciiArt, AsciiArtOptions, DitherArtOptions, PixelArtOptions, RenderMode,
    RenderRequest,
};
pub use services::RenderService;

pub use pxl_engine;
