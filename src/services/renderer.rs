use crate::error::RenderError;
use crate::models::{
    Artifact, AsciiArt, AsciiArtOptions, DitherArtOptions, PixelArtOptions, RenderMode,
    RenderRequest,
};
use crate::models::options::DEFAULT_THRESHOLD;
use crate::rendering::{GlyphRasterizer, GlyphStyle};
use pxl_engine::ascii::AsciiGrid;
use pxl_engine::dither::dither;
use pxl_engine::preprocess::{sample, SampleLimits};
use pxl_engine::{pixelate, PixelBuffer, Raster};
use std::borrow::Cow;
use std::time::Instant;

/// Turns decoded images into pixel, ASCII or dithered art.
///
/// Every render reads the source buffer, works on its own copy and returns
/// owned output. The only state is the font database used for ASCII glyphs,
/// which is loaded once and never changes, so a service can be shared
/// between threads.
pub struct RenderService {
    glyphs: GlyphRasterizer,
}

impl RenderService {
    /// Create a service using system fonts for ASCII glyphs.
    pub fn new() -> Self {
        Self {
            glyphs: GlyphRasterizer::new(),
        }
    }

    /// Create a service with extra fonts (e.g. an embedded Roboto Mono)
    /// ahead of the system fonts.
    pub fn with_fonts(fonts: Vec<(String, Cow<'static, [u8]>)>) -> Self {
        Self {
            glyphs: GlyphRasterizer::with_fonts(fonts),
        }
    }

    pub fn font_count(&self) -> usize {
        self.glyphs.font_count()
    }

    /// Render whichever mode `request` selects.
    pub fn render(
        &self,
        source: &PixelBuffer,
        request: &RenderRequest,
    ) -> Result<Artifact, RenderError> {
        match request {
            RenderRequest::Pixel(options) => self.render_pixel_art(source, options).map(Artifact::Pixel),
            RenderRequest::Ascii(options) => self.render_ascii_art(source, options).map(Artifact::Ascii),
            RenderRequest::Dither(options) => {
                self.render_dither_art(source, options).map(Artifact::Dither)
            }
        }
    }

    /// Block-quantized pixel art, `ceil(w/ps)*ps x ceil(h/ps)*ps` pixels.
    pub fn render_pixel_art(
        &self,
        source: &PixelBuffer,
        options: &PixelArtOptions,
    ) -> Result<Raster, RenderError> {
        let span = render_span(RenderMode::Pixel, source);
        let _enter = span.enter();
        let started = Instant::now();

        let palette = options.palette_choice()?.resolve();
        let buffer = sample(source, SampleLimits::none(), &options.adjustments());
        let raster = pixelate(&buffer, options.pixel_size, palette.as_ref());

        tracing::debug!(
            pixel_size = options.pixel_size,
            palette_colors = palette.as_ref().map_or(0, |p| p.len()),
            width = raster.width(),
            height = raster.height(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Rendered pixel art"
        );
        Ok(raster)
    }

    /// ASCII art at the source size, plus its text.
    pub fn render_ascii_art(
        &self,
        source: &PixelBuffer,
        options: &AsciiArtOptions,
    ) -> Result<AsciiArt, RenderError> {
        let span = render_span(RenderMode::Ascii, source);
        let _enter = span.enter();
        let started = Instant::now();

        let charset = options.charset();
        let buffer = sample(source, SampleLimits::none(), &options.adjustments());
        let grid = AsciiGrid::build(&buffer, options.cell_size, charset.chars(), options.invert);

        let style = GlyphStyle {
            invert: options.invert,
            bw: options.bw,
            rotate: options.rotate,
        };
        let raster = self
            .glyphs
            .render(&grid, buffer.width(), buffer.height(), style)?;

        tracing::debug!(
            charset = charset.name(),
            cols = grid.cols(),
            rows = grid.rows(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Rendered ASCII art"
        );
        Ok(AsciiArt {
            raster,
            text: grid.text(),
        })
    }

    /// Error-diffused art, `w*k x h*k` pixels for point size `k`.
    pub fn render_dither_art(
        &self,
        source: &PixelBuffer,
        options: &DitherArtOptions,
    ) -> Result<Raster, RenderError> {
        let span = render_span(RenderMode::Dither, source);
        let _enter = span.enter();
        let started = Instant::now();

        if options.threshold != DEFAULT_THRESHOLD {
            tracing::debug!(
                threshold = options.threshold,
                "Threshold has no effect on error diffusion"
            );
        }

        let algorithm = options.diffusion_algorithm();
        let palette = options.resolve_palette()?;
        let buffer = sample(source, SampleLimits::none(), &options.adjustments());
        let raster = dither(&buffer, &palette, algorithm, options.point_size);

        tracing::debug!(
            algorithm = algorithm.name(),
            palette_colors = palette.len(),
            point_size = options.point_size,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Rendered dithered art"
        );
        Ok(raster)
    }
}

impl Default for RenderService {
    fn default() -> Self {
        Self::new()
    }
}

fn render_span(mode: RenderMode, source: &PixelBuffer) -> tracing::Span {
    tracing::debug_span!(
        "render",
        mode = %mode,
        width = source.width(),
        height = source.height()
    )
}
