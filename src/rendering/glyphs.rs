use crate::error::RenderError;
use pxl_engine::ascii::AsciiGrid;
use pxl_engine::{Raster, Rgb};
use resvg::usvg::{self, Transform};
use std::borrow::Cow;
use std::sync::Arc;
use tiny_skia::Pixmap;

/// Light background / dark ink.
pub const LIGHT: Rgb = Rgb::from_u32(0xffffff);

/// Dark background / light ink.
pub const DARK: Rgb = Rgb::from_u32(0x1a1a1a);

const FONT_FAMILY: &str = "'Roboto Mono', 'DejaVu Sans Mono', 'Courier New', monospace";

/// Smallest font size used for glyphs, in pixels.
const MIN_FONT_SIZE: usize = 4;

/// Baseline offset below the cell top, as a fraction of the font size.
const BASELINE: f64 = 0.8;

/// How glyphs are painted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlyphStyle {
    /// Dark glyphs on a light background
    pub invert: bool,
    /// Single-color glyphs instead of the cell color
    pub bw: bool,
    /// Rotate each glyph by its cell's luminance (0..=90 degrees)
    pub rotate: bool,
}

impl GlyphStyle {
    pub fn background(&self) -> Rgb {
        if self.invert {
            LIGHT
        } else {
            DARK
        }
    }

    fn ink(&self, cell_color: Rgb) -> Rgb {
        match (self.bw, self.invert) {
            (true, true) => DARK,
            (true, false) => LIGHT,
            (false, _) => cell_color,
        }
    }
}

/// Rasterizes an [`AsciiGrid`] with real fonts.
///
/// Glyphs are laid out as an SVG document and rendered with resvg, so the
/// output matches what a browser canvas would draw with the same font.
pub struct GlyphRasterizer {
    /// Font database for text rendering
    fontdb: Arc<fontdb::Database>,
}

impl GlyphRasterizer {
    /// Create a rasterizer with fonts loaded from the provided data, plus
    /// system fonts as fallback.
    pub fn with_fonts(fonts: Vec<(String, Cow<'static, [u8]>)>) -> Self {
        let mut fontdb = fontdb::Database::new();

        for (name, data) in fonts {
            fontdb.load_font_data(data.into_owned());
            tracing::debug!(font = %name, "Loaded font");
        }

        // Load system fonts as fallback
        fontdb.load_system_fonts();

        // Point the generic family at a face that exists on this machine
        let monospace = fontdb
            .faces()
            .find(|face| face.monospaced)
            .and_then(|face| face.families.first().map(|(name, _)| name.clone()));
        if let Some(family) = monospace {
            tracing::debug!(family = %family, "Using monospace family");
            fontdb.set_monospace_family(family);
        }

        tracing::info!(font_count = fontdb.len(), "Loaded fonts for glyph rendering");

        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Create a rasterizer with system fonts only.
    pub fn new() -> Self {
        Self::with_fonts(Vec::new())
    }

    pub fn font_count(&self) -> usize {
        self.fontdb.len()
    }

    /// Draw `grid` onto a `width x height` raster.
    ///
    /// Each cell spans `width / cols` by `height / rows` pixels. An empty
    /// grid, or one with only spaces, yields the plain background.
    pub fn render(
        &self,
        grid: &AsciiGrid,
        width: usize,
        height: usize,
        style: GlyphStyle,
    ) -> Result<Raster, RenderError> {
        let background = style.background();
        let Some(svg) = compose_svg(grid, width, height, style) else {
            return Ok(Raster::filled(width, height, background));
        };

        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg.as_bytes(), &options)
            .map_err(|e| RenderError::SvgParse(e.to_string()))?;

        let (w, h) = match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => return Err(RenderError::PixmapAllocation),
        };
        let mut pixmap = Pixmap::new(w, h).ok_or(RenderError::PixmapAllocation)?;
        pixmap.fill(tiny_skia::Color::from_rgba8(
            background.r,
            background.g,
            background.b,
            255,
        ));

        resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

        // Opaque background, so premultiplied samples equal straight ones
        Ok(Raster::from_rgba(width, height, pixmap.data())?)
    }
}

impl Default for GlyphRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lay out the grid as an SVG document.
///
/// Returns `None` when there is nothing to draw.
pub fn compose_svg(grid: &AsciiGrid, width: usize, height: usize, style: GlyphStyle) -> Option<String> {
    if grid.cols() == 0 || grid.rows() == 0 || width == 0 || height == 0 {
        return None;
    }

    let char_w = width as f64 / grid.cols() as f64;
    let char_h = height as f64 / grid.rows() as f64;
    let font_size = (char_h.floor() as usize).max(MIN_FONT_SIZE);

    let mut body = String::new();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let Some(cell) = grid.cell(col, row) else {
                continue;
            };
            if cell.glyph == ' ' {
                continue;
            }

            let x = col as f64 * char_w;
            let y = row as f64 * char_h;
            let baseline = y + BASELINE * font_size as f64;
            let ink = style.ink(cell.color);

            body.push_str(&format!(r#"<text x="{x:.2}" y="{baseline:.2}" fill="{ink}""#));
            if style.rotate {
                let degrees = cell.color.relative_luminance() * 90.0;
                let cx = x + char_w / 2.0;
                let cy = y + char_h / 2.0;
                body.push_str(&format!(
                    r#" transform="rotate({degrees:.2} {cx:.2} {cy:.2})""#
                ));
            }
            body.push('>');
            escape_into(&mut body, cell.glyph);
            body.push_str("</text>");
        }
    }

    if body.is_empty() {
        return None;
    }

    Some(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}"><g font-family="{FONT_FAMILY}" font-size="{font_size}">{body}</g></svg>"#
    ))
}

fn escape_into(out: &mut String, glyph: char) {
    match glyph {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&apos;"),
        c => out.push(c),
    }
}
