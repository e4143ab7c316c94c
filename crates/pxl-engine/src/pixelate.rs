//! Block-averaging pixel art.

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::output::Raster;
use crate::palette::Palette;

/// Quantize `buffer` into solid `pixel_size x pixel_size` blocks.
///
/// The grid is `ceil(w / pixel_size) x ceil(h / pixel_size)`. Each block is
/// the rounded mean RGB of the source pixels it covers (edge blocks average
/// only the pixels that exist), optionally snapped to the nearest `palette`
/// color. The raster is `cols * pixel_size x rows * pixel_size`, so it can
/// be slightly larger than the source when the size does not divide evenly.
///
/// A `pixel_size` of 0 is treated as 1.
///
/// # Example
///
/// ```
/// use pxl_engine::{pixelate, PixelBuffer};
///
/// let buffer = PixelBuffer::filled(10, 7, [200, 100, 50, 255]).unwrap();
/// let art = pixelate(&buffer, 4, None);
/// assert_eq!((art.width(), art.height()), (12, 8));
/// ```
pub fn pixelate(buffer: &PixelBuffer, pixel_size: usize, palette: Option<&Palette>) -> Raster {
    let ps = pixel_size.max(1);
    let cols = buffer.width().div_ceil(ps);
    let rows = buffer.height().div_ceil(ps);

    let mut raster = Raster::filled(cols * ps, rows * ps, Rgb::BLACK);
    for row in 0..rows {
        let y = row * ps;
        for col in 0..cols {
            let x = col * ps;
            let mean = buffer.average_rgb(x..x + ps, y..y + ps);
            let color = match palette {
                Some(palette) => palette.nearest(mean),
                None => mean,
            };
            raster.fill_rect(x, y, ps, ps, color);
        }
    }
    raster
}
