pub mod artifact;
pub mod options;
pub mod request;

pub use artifact::{Artifact, AsciiArt};
pub use options::{AsciiArtOptions, DitherArtOptions, PixelArtOptions};
pub use request::{RenderMode, RenderRequest};
