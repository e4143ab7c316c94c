//! Luminance-to-glyph grid.

use super::charset::STANDARD_CHARSET;
use crate::buffer::PixelBuffer;
use crate::color::Rgb;

/// One character cell: the chosen glyph and the cell's averaged color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiCell {
    /// Glyph picked from the charset.
    pub glyph: char,
    /// Rounded mean RGB of the cell's source pixels.
    pub color: Rgb,
}

/// Character grid built from an image.
///
/// A cell covers `cell_size` pixels horizontally and `2 * cell_size`
/// vertically, which roughly matches the aspect of a monospace glyph.
/// Partial cells on the right and bottom edges are dropped.
///
/// # Example
///
/// ```
/// use pxl_engine::PixelBuffer;
/// use pxl_engine::ascii::{AsciiGrid, CharsetPreset};
///
/// let buffer = PixelBuffer::filled(40, 40, [255, 255, 255, 255]).unwrap();
/// let grid = AsciiGrid::build(&buffer, 8, CharsetPreset::Standard.chars(), false);
/// assert_eq!((grid.cols(), grid.rows()), (5, 2));
/// assert_eq!(grid.text(), "@@@@@\n@@@@@");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiGrid {
    cols: usize,
    rows: usize,
    cells: Vec<AsciiCell>,
}

impl AsciiGrid {
    /// Map each cell of `buffer` to a glyph of `charset`.
    ///
    /// Glyph index is `round(lum * (len - 1))` where `lum` is the cell's
    /// relative luminance, flipped to `1 - lum` when `invert` is set. An
    /// empty charset falls back to the standard ramp; a `cell_size` of 0 is
    /// treated as 1.
    pub fn build(buffer: &PixelBuffer, cell_size: usize, charset: &[char], invert: bool) -> Self {
        let cell = cell_size.max(1);
        let charset = if charset.is_empty() { STANDARD_CHARSET } else { charset };
        let last = charset.len() - 1;

        let cell_h = cell.saturating_mul(2);

        let cols = buffer.width() / cell;
        let rows = buffer.height() / cell_h;

        let mut cells = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            let y = row * cell_h;
            for col in 0..cols {
                let x = col * cell;
                let color =
                    buffer.average_rgb(x..x.saturating_add(cell), y..y.saturating_add(cell_h));
                let mut lum = color.relative_luminance();
                if invert {
                    lum = 1.0 - lum;
                }
                let index = ((lum * last as f64).round().max(0.0) as usize).min(last);
                cells.push(AsciiCell {
                    glyph: charset[index],
                    color,
                });
            }
        }

        Self { cols, rows, cells }
    }

    /// Number of characters per line.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of lines.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Whether the image was too small for a single cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at column `col`, line `row`.
    pub fn cell(&self, col: usize, row: usize) -> Option<&AsciiCell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[AsciiCell] {
        &self.cells
    }

    /// Each line as a string of `cols` glyphs.
    pub fn lines(&self) -> Vec<String> {
        if self.cols == 0 {
            return vec![String::new(); self.rows];
        }
        self.cells
            .chunks(self.cols)
            .map(|line| line.iter().map(|c| c.glyph).collect())
            .collect()
    }

    /// Lines joined with `\n`, no trailing newline.
    pub fn text(&self) -> String {
        self.lines().join("\n")
    }
}
