//! Raster-scan error diffusion.

use super::kernel::Kernel;
use crate::buffer::PixelBuffer;
use crate::color::{clamp_channel, Rgb};
use crate::output::Raster;
use crate::palette::Palette;

/// Sliding window of working values for error diffusion.
///
/// Holds only the `max_dy + 1` rows the kernel can reach. `rows[0]` is the
/// row being scanned. Each row is seeded from the source when it enters the
/// window, and accumulates diffused error until it is scanned.
#[derive(Debug)]
struct DiffusionBuffer<'a> {
    source: &'a PixelBuffer,
    rows: Vec<Vec<[f32; 3]>>,
    /// Source row held in `rows[0]`.
    y: usize,
}

impl<'a> DiffusionBuffer<'a> {
    fn new(source: &'a PixelBuffer, depth: usize) -> Self {
        let mut buffer = Self {
            source,
            rows: vec![vec![[0.0; 3]; source.width()]; depth.max(1)],
            y: 0,
        };
        for offset in 0..buffer.rows.len() {
            buffer.seed(offset);
        }
        buffer
    }

    /// Load source row `y + offset` into `rows[offset]`, or zeros past the
    /// bottom edge.
    fn seed(&mut self, offset: usize) {
        let source_y = self.y + offset;
        let row = &mut self.rows[offset];
        if source_y >= self.source.height() {
            row.fill([0.0; 3]);
            return;
        }
        for (x, value) in row.iter_mut().enumerate() {
            let px = self.source.rgb(x, source_y);
            *value = [f32::from(px.r), f32::from(px.g), f32::from(px.b)];
        }
    }

    #[inline]
    fn get(&self, x: usize) -> [f32; 3] {
        self.rows[0][x]
    }

    #[inline]
    fn add(&mut self, x: usize, row_offset: usize, error: [f32; 3]) {
        if let Some(value) = self.rows.get_mut(row_offset).and_then(|row| row.get_mut(x)) {
            for (v, e) in value.iter_mut().zip(error) {
                *v += e;
            }
        }
    }

    /// Drop the scanned row and pull the next source row in at the bottom.
    fn advance(&mut self) {
        self.rows.rotate_left(1);
        self.y += 1;
        let last = self.rows.len() - 1;
        self.seed(last);
    }
}

/// Error-diffuse `buffer` onto `palette` with `kernel`.
///
/// Pixels are visited strictly row by row, left to right. Each working
/// value is rounded and clamped, replaced by its nearest palette color, and
/// the difference between the unclamped working value and that color is
/// spread over the kernel's neighbors. Neighbors outside the image are
/// skipped.
///
/// The result has the same size as `buffer` and contains only palette
/// colors.
pub fn diffuse(buffer: &PixelBuffer, palette: &Palette, kernel: &Kernel) -> Raster {
    let (width, height) = (buffer.width(), buffer.height());
    let mut window = DiffusionBuffer::new(buffer, kernel.max_dy + 1);
    let mut raster = Raster::filled(width, height, Rgb::BLACK);

    for y in 0..height {
        for x in 0..width {
            let value = window.get(x);
            let current = Rgb::new(
                clamp_channel(f64::from(value[0])),
                clamp_channel(f64::from(value[1])),
                clamp_channel(f64::from(value[2])),
            );
            let chosen = palette.nearest(current);
            raster.set_pixel(x, y, chosen);

            let error = [
                value[0] - f32::from(chosen.r),
                value[1] - f32::from(chosen.g),
                value[2] - f32::from(chosen.b),
            ];

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i64 + i64::from(dx);
                let ny = y + dy as usize;
                if nx < 0 || nx as usize >= width || ny >= height {
                    continue;
                }
                let w = kernel.weight(weight);
                window.add(nx as usize, dy as usize, [error[0] * w, error[1] * w, error[2] * w]);
            }
        }
        window.advance();
    }

    raster
}
