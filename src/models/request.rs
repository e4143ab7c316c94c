use super::options::{AsciiArtOptions, DitherArtOptions, PixelArtOptions};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three artifact kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Pixel,
    Ascii,
    Dither,
}

impl RenderMode {
    pub fn name(self) -> &'static str {
        match self {
            RenderMode::Pixel => "pixel",
            RenderMode::Ascii => "ascii",
            RenderMode::Dither => "dither",
        }
    }

    /// Base file name for exported artifacts of this mode.
    pub fn file_stem(self) -> &'static str {
        match self {
            RenderMode::Pixel => "pixel-art",
            RenderMode::Ascii => "ascii-art",
            RenderMode::Dither => "dither-art",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A render request: the mode plus that mode's options.
///
/// Serialized with an internal `mode` tag, e.g.
///
/// ```yaml
/// mode: dither
/// algorithm: atkinson
/// palette: gameboy
/// point_size: 2
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum RenderRequest {
    Pixel(PixelArtOptions),
    Ascii(AsciiArtOptions),
    Dither(DitherArtOptions),
}

impl RenderRequest {
    pub fn mode(&self) -> RenderMode {
        match self {
            RenderRequest::Pixel(_) => RenderMode::Pixel,
            RenderRequest::Ascii(_) => RenderMode::Ascii,
            RenderRequest::Dither(_) => RenderMode::Dither,
        }
    }

    /// Parse a request from YAML. Missing options take their defaults.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let request: Self = serde_yaml::from_str(source)?;
        tracing::debug!(mode = %request.mode(), "Loaded render request from YAML");
        Ok(request)
    }

    /// Parse a request from JSON. Missing options take their defaults.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let request: Self = serde_json::from_str(source)?;
        tracing::debug!(mode = %request.mode(), "Loaded render request from JSON");
        Ok(request)
    }
}

impl From<PixelArtOptions> for RenderRequest {
    fn from(options: PixelArtOptions) -> Self {
        RenderRequest::Pixel(options)
    }
}

impl From<AsciiArtOptions> for RenderRequest {
    fn from(options: AsciiArtOptions) -> Self {
        RenderRequest::Ascii(options)
    }
}

impl From<DitherArtOptions> for RenderRequest {
    fn from(options: DitherArtOptions) -> Self {
        RenderRequest::Dither(options)
    }
}
