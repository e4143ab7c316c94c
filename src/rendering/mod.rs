pub mod glyphs;

pub use glyphs::{GlyphRasterizer, GlyphStyle};
