use crate::error::RenderError;
use pxl_engine::ascii::CharsetPreset;
use pxl_engine::dither::DiffusionAlgorithm;
use pxl_engine::{hex_to_rgb, Adjustments, NamedPalette, Palette, PaletteChoice, Rgb};
use serde::{Deserialize, Serialize};

/// Palette name that selects the caller's `custom_colors`.
pub const CUSTOM_PALETTE: &str = "custom";

/// Palette name that turns quantization off (pixel art only).
pub const NO_PALETTE: &str = "none";

/// Options for block-quantized pixel art.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelArtOptions {
    /// Block edge length in source pixels
    #[serde(default = "default_pixel_size", alias = "pixelSize")]
    pub pixel_size: usize,

    /// Brightness, -100..=100
    #[serde(default)]
    pub brightness: f64,

    /// Contrast, -100..=100
    #[serde(default)]
    pub contrast: f64,

    /// Saturation percentage, 100 = unchanged
    #[serde(default = "default_saturation")]
    pub saturation: f64,

    /// Registry palette name, `custom` or `none`
    #[serde(default = "default_pixel_palette", alias = "paletteName")]
    pub palette: String,

    /// Hex literals used when `palette` is `custom`
    #[serde(default, alias = "customColors")]
    pub custom_colors: Vec<String>,
}

fn default_pixel_size() -> usize {
    8
}

fn default_saturation() -> f64 {
    100.0
}

fn default_pixel_palette() -> String {
    NO_PALETTE.to_string()
}

impl Default for PixelArtOptions {
    fn default() -> Self {
        Self {
            pixel_size: default_pixel_size(),
            brightness: 0.0,
            contrast: 0.0,
            saturation: default_saturation(),
            palette: default_pixel_palette(),
            custom_colors: Vec::new(),
        }
    }
}

impl PixelArtOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pixel_size(mut self, pixel_size: usize) -> Self {
        self.pixel_size = pixel_size;
        self
    }

    pub fn brightness(mut self, brightness: f64) -> Self {
        self.brightness = brightness;
        self
    }

    pub fn contrast(mut self, contrast: f64) -> Self {
        self.contrast = contrast;
        self
    }

    pub fn saturation(mut self, saturation: f64) -> Self {
        self.saturation = saturation;
        self
    }

    pub fn palette(mut self, name: impl Into<String>) -> Self {
        self.palette = name.into();
        self
    }

    pub fn custom_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = CUSTOM_PALETTE.to_string();
        self.custom_colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn adjustments(&self) -> Adjustments {
        Adjustments::new()
            .brightness(self.brightness)
            .contrast(self.contrast)
            .saturation(self.saturation)
    }

    /// Resolve the palette name. `none` and an empty custom list both
    /// disable quantization.
    pub fn palette_choice(&self) -> Result<PaletteChoice, RenderError> {
        resolve_palette(&self.palette, &self.custom_colors, true)
    }
}

/// Options for character-grid ASCII art.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsciiArtOptions {
    /// Cell width in source pixels; cells are twice as tall
    #[serde(default = "default_cell_size", alias = "cellSize")]
    pub cell_size: usize,

    /// Brightness, -100..=100
    #[serde(default)]
    pub brightness: f64,

    /// Contrast, -100..=100
    #[serde(default)]
    pub contrast: f64,

    /// Charset preset name
    #[serde(default = "default_preset")]
    pub preset: String,

    /// Dark glyphs on a light background
    #[serde(default)]
    pub invert: bool,

    /// Draw every glyph in a single foreground color
    #[serde(default)]
    pub bw: bool,

    /// Rotate glyphs by cell luminance
    #[serde(default)]
    pub rotate: bool,

    /// Use the dense charset regardless of `preset`
    #[serde(default, alias = "mixedDensity")]
    pub mixed_density: bool,
}

fn default_cell_size() -> usize {
    8
}

fn default_preset() -> String {
    CharsetPreset::default().name().to_string()
}

impl Default for AsciiArtOptions {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            brightness: 0.0,
            contrast: 0.0,
            preset: default_preset(),
            invert: false,
            bw: false,
            rotate: false,
            mixed_density: false,
        }
    }
}

impl AsciiArtOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell_size(mut self, cell_size: usize) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn brightness(mut self, brightness: f64) -> Self {
        self.brightness = brightness;
        self
    }

    pub fn contrast(mut self, contrast: f64) -> Self {
        self.contrast = contrast;
        self
    }

    pub fn preset(mut self, name: impl Into<String>) -> Self {
        self.preset = name.into();
        self
    }

    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    pub fn bw(mut self, bw: bool) -> Self {
        self.bw = bw;
        self
    }

    pub fn rotate(mut self, rotate: bool) -> Self {
        self.rotate = rotate;
        self
    }

    pub fn mixed_density(mut self, mixed_density: bool) -> Self {
        self.mixed_density = mixed_density;
        self
    }

    /// Saturation is not adjustable in ASCII mode.
    pub fn adjustments(&self) -> Adjustments {
        Adjustments::new()
            .brightness(self.brightness)
            .contrast(self.contrast)
    }

    /// The charset to map cells onto. `mixed_density` always selects the
    /// dense ramp; unknown names fall back to the standard ramp.
    pub fn charset(&self) -> CharsetPreset {
        if self.mixed_density {
            return CharsetPreset::Dense;
        }
        CharsetPreset::from_name(&self.preset).unwrap_or_else(|| {
            let fallback = CharsetPreset::default();
            tracing::warn!(
                preset = %self.preset,
                fallback = fallback.name(),
                "Unknown charset preset, using fallback"
            );
            fallback
        })
    }
}

/// Options for error-diffusion dithered art.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DitherArtOptions {
    /// Diffusion algorithm name
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Output block size per source pixel
    #[serde(default = "default_point_size", alias = "pointSize")]
    pub point_size: usize,

    /// Accepted for compatibility; diffusion does not use a threshold
    #[serde(default = "default_threshold")]
    pub threshold: u8,

    /// Brightness, -100..=100
    #[serde(default)]
    pub brightness: f64,

    /// Contrast, -100..=100
    #[serde(default)]
    pub contrast: f64,

    /// Registry palette name or `custom`
    #[serde(default = "default_dither_palette", alias = "paletteName")]
    pub palette: String,

    /// Hex literals used when `palette` is `custom`
    #[serde(default, alias = "customColors")]
    pub custom_colors: Vec<String>,
}

fn default_algorithm() -> String {
    DiffusionAlgorithm::default().name().to_string()
}

fn default_point_size() -> usize {
    1
}

/// Default for the unused `threshold` option.
pub const DEFAULT_THRESHOLD: u8 = 128;

fn default_threshold() -> u8 {
    DEFAULT_THRESHOLD
}

fn default_dither_palette() -> String {
    NamedPalette::BlackWhite.name().to_string()
}

impl Default for DitherArtOptions {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            point_size: default_point_size(),
            threshold: default_threshold(),
            brightness: 0.0,
            contrast: 0.0,
            palette: default_dither_palette(),
            custom_colors: Vec::new(),
        }
    }
}

impl DitherArtOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn algorithm(mut self, name: impl Into<String>) -> Self {
        self.algorithm = name.into();
        self
    }

    pub fn point_size(mut self, point_size: usize) -> Self {
        self.point_size = point_size;
        self
    }

    pub fn threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn brightness(mut self, brightness: f64) -> Self {
        self.brightness = brightness;
        self
    }

    pub fn contrast(mut self, contrast: f64) -> Self {
        self.contrast = contrast;
        self
    }

    pub fn palette(mut self, name: impl Into<String>) -> Self {
        self.palette = name.into();
        self
    }

    pub fn custom_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = CUSTOM_PALETTE.to_string();
        self.custom_colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Saturation is not adjustable in dither mode.
    pub fn adjustments(&self) -> Adjustments {
        Adjustments::new()
            .brightness(self.brightness)
            .contrast(self.contrast)
    }

    /// The diffusion algorithm; unknown names fall back to Floyd-Steinberg.
    pub fn diffusion_algorithm(&self) -> DiffusionAlgorithm {
        DiffusionAlgorithm::from_name(&self.algorithm).unwrap_or_else(|| {
            let fallback = DiffusionAlgorithm::default();
            tracing::warn!(
                algorithm = %self.algorithm,
                fallback = fallback.name(),
                "Unknown dither algorithm, using fallback"
            );
            fallback
        })
    }

    /// The palette to dither onto. Dithering always quantizes, so `none`
    /// and an empty custom list fall back to black and white.
    pub fn resolve_palette(&self) -> Result<Palette, RenderError> {
        Ok(resolve_palette(&self.palette, &self.custom_colors, false)?.resolve_or_default())
    }
}

/// Turn a palette name plus custom literals into a [`PaletteChoice`].
///
/// `allow_none` controls whether `none` disables quantization or is treated
/// as an unknown name.
fn resolve_palette(
    name: &str,
    custom_colors: &[String],
    allow_none: bool,
) -> Result<PaletteChoice, RenderError> {
    let key = name.trim();
    if key.eq_ignore_ascii_case(CUSTOM_PALETTE) {
        return parse_custom_colors(custom_colors).map(PaletteChoice::Custom);
    }
    if allow_none && key.eq_ignore_ascii_case(NO_PALETTE) {
        return Ok(PaletteChoice::None);
    }
    if let Some(named) = NamedPalette::from_name(key) {
        return Ok(PaletteChoice::Named(named));
    }

    let fallback = NamedPalette::default();
    tracing::warn!(
        palette = %name,
        fallback = fallback.name(),
        "Unknown palette, using fallback"
    );
    Ok(PaletteChoice::Named(fallback))
}

/// Parse custom hex literals, keeping the first occurrence of each color.
fn parse_custom_colors(literals: &[String]) -> Result<Vec<Rgb>, RenderError> {
    let mut colors: Vec<Rgb> = Vec::with_capacity(literals.len());
    for literal in literals {
        let color = hex_to_rgb(literal).map_err(|source| RenderError::InvalidColor {
            value: literal.clone(),
            source,
        })?;
        if !colors.contains(&color) {
            colors.push(color);
        }
    }
    Ok(colors)
}
