//! Output types for the renderers.
//!
//! Every renderer produces a [`Raster`]: owned, row-major RGB bytes with
//! dimension metadata. Nothing in a raster references the input buffer.

mod raster;

pub use raster::Raster;
