//! RGB output raster.

use crate::buffer::{sample_count, ImageError};
use crate::color::Rgb;

/// The output of every renderer: row-major RGB samples, 3 bytes per pixel.
///
/// # Example
///
/// ```
/// use pxl_engine::{Raster, Rgb};
///
/// let mut raster = Raster::filled(4, 4, Rgb::BLACK);
/// raster.fill_rect(2, 2, 8, 8, Rgb::WHITE); // clipped to the raster
/// assert_eq!(raster.pixel(3, 3), Rgb::WHITE);
/// assert_eq!(raster.pixel(1, 1), Rgb::BLACK);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Raster {
    /// Bytes per pixel.
    pub const CHANNELS: usize = 3;

    /// A raster filled with a single color.
    ///
    /// Zero-sized rasters are allowed; they simply hold no samples.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 3` overflows `usize`.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        let bytes = color.to_bytes();
        let data = bytes
            .iter()
            .copied()
            .cycle()
            .take(Self::sample_len(width, height))
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    /// Build a raster from straight RGBA samples, dropping alpha.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError`] for zero dimensions or a sample count other
    /// than `width * height * 4`.
    pub fn from_rgba(width: usize, height: usize, rgba: &[u8]) -> Result<Self, ImageError> {
        let expected = sample_count(width, height, 4)?;
        if rgba.len() != expected {
            return Err(ImageError::LengthMismatch {
                expected,
                actual: rgba.len(),
            });
        }
        let data = rgba
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Sample count for `width x height`, zero dimensions included.
    fn sample_len(width: usize, height: usize) -> usize {
        match width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(Self::CHANNELS))
        {
            Some(len) => len,
            None => panic!("raster size {width}x{height} overflows usize"),
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGB samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the raster, returning its RGB samples.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Opaque RGBA copy of the samples, e.g. for a canvas `ImageData`.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.data
            .chunks_exact(Self::CHANNELS)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect()
    }

    /// Color at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        let i = (y * self.width + x) * Self::CHANNELS;
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Set the color at `(x, y)`.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) {
        let i = (y * self.width + x) * Self::CHANNELS;
        self.data[i..i + Self::CHANNELS].copy_from_slice(&color.to_bytes());
    }

    /// Paint a solid rectangle, clipped to the raster bounds.
    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize, color: Rgb) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        if x >= x_end || y >= y_end {
            return;
        }
        let bytes = color.to_bytes();
        for row in y..y_end {
            let start = (row * self.width + x) * Self::CHANNELS;
            let end = (row * self.width + x_end) * Self::CHANNELS;
            for px in self.data[start..end].chunks_exact_mut(Self::CHANNELS) {
                px.copy_from_slice(&bytes);
            }
        }
    }

    /// Nearest-neighbor enlargement: every pixel becomes a solid
    /// `factor x factor` block. A factor of 0 or 1 returns the raster as is.
    ///
    /// # Panics
    ///
    /// Panics if the enlarged size overflows `usize`.
    pub fn upscale(self, factor: usize) -> Raster {
        if factor <= 1 {
            return self;
        }
        let (width, height) = match (
            self.width.checked_mul(factor),
            self.height.checked_mul(factor),
        ) {
            (Some(w), Some(h)) => (w, h),
            _ => panic!(
                "raster size {}x{} scaled by {factor} overflows usize",
                self.width, self.height
            ),
        };
        let len = Self::sample_len(width, height);
        if self.data.is_empty() {
            return Raster {
                width,
                height,
                data: Vec::new(),
            };
        }
        let mut data = Vec::with_capacity(len);
        for src_row in self.data.chunks_exact(self.width * Self::CHANNELS) {
            let mut row = Vec::with_capacity(width * Self::CHANNELS);
            for px in src_row.chunks_exact(Self::CHANNELS) {
                for _ in 0..factor {
                    row.extend_from_slice(px);
                }
            }
            for _ in 0..factor {
                data.extend_from_slice(&row);
            }
        }
        Raster {
            width,
            height,
            data,
        }
    }
}
