//! Decoded RGBA input buffer.

use std::fmt;
use std::ops::Range;

use crate::color::Rgb;

/// Error returned when a buffer's dimensions and samples disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// Width or height is zero
    ZeroDimension {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
    /// `width * height * channels` overflows `usize`
    TooLarge {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
    /// Sample count does not match the dimensions
    LengthMismatch {
        /// Samples required by the dimensions
        expected: usize,
        /// Samples supplied
        actual: usize,
    },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::ZeroDimension { width, height } => {
                write!(f, "image dimensions must be non-zero, got {width}x{height}")
            }
            ImageError::TooLarge { width, height } => {
                write!(f, "image dimensions {width}x{height} are too large")
            }
            ImageError::LengthMismatch { expected, actual } => {
                write!(f, "expected {expected} samples, got {actual}")
            }
        }
    }
}

impl std::error::Error for ImageError {}

/// Checked `width * height * channels`.
pub(crate) fn sample_count(
    width: usize,
    height: usize,
    channels: usize,
) -> Result<usize, ImageError> {
    if width == 0 || height == 0 {
        return Err(ImageError::ZeroDimension { width, height });
    }
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or(ImageError::TooLarge { width, height })
}

/// A decoded image: row-major RGBA samples, 4 bytes per pixel.
///
/// Both dimensions are guaranteed non-zero and the sample count always
/// equals `width * height * 4`.
///
/// # Example
///
/// ```
/// use pxl_engine::PixelBuffer;
///
/// let buffer = PixelBuffer::new(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255]).unwrap();
/// assert_eq!(buffer.rgb(1, 0).b, 255);
/// assert!(PixelBuffer::new(0, 1, Vec::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Bytes per pixel.
    pub const CHANNELS: usize = 4;

    /// Wrap RGBA samples.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError`] for zero dimensions or a sample count other
    /// than `width * height * 4`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, ImageError> {
        let expected = sample_count(width, height, Self::CHANNELS)?;
        if data.len() != expected {
            return Err(ImageError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A buffer where every pixel is `rgba`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError`] for zero or overflowing dimensions.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Result<Self, ImageError> {
        let expected = sample_count(width, height, Self::CHANNELS)?;
        let data = rgba.iter().copied().cycle().take(expected).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError`] for zero or overflowing dimensions.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self, ImageError>
    where
        F: FnMut(usize, usize) -> [u8; 4],
    {
        let expected = sample_count(width, height, Self::CHANNELS)?;
        let mut data = Vec::with_capacity(expected);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Internal constructor for buffers whose shape is already known good.
    pub(crate) fn from_parts(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height * Self::CHANNELS);
        Self {
            width,
            height,
            data,
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

    /// Raw RGBA samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable RGBA samples. The shape cannot change through this.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer, returning its samples.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// RGBA sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.width + x) * Self::CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// RGB part of the sample at `(x, y)`.
    #[inline]
    pub fn rgb(&self, x: usize, y: usize) -> Rgb {
        let i = (y * self.width + x) * Self::CHANNELS;
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Rounded mean RGB over a rectangle of pixels.
    ///
    /// Ranges are clipped to the buffer. The mean divides by the number of
    /// pixels actually covered, so partial edge blocks are not darkened.
    /// An empty rectangle yields black.
    pub fn average_rgb(&self, xs: Range<usize>, ys: Range<usize>) -> Rgb {
        let xs = xs.start.min(self.width)..xs.end.min(self.width);
        let ys = ys.start.min(self.height)..ys.end.min(self.height);

        let mut sum = [0u64; 3];
        let mut count = 0u64;
        for y in ys {
            let row = y * self.width;
            for x in xs.clone() {
                let i = (row + x) * Self::CHANNELS;
                sum[0] += u64::from(self.data[i]);
                sum[1] += u64::from(self.data[i + 1]);
                sum[2] += u64::from(self.data[i + 2]);
                count += 1;
            }
        }
        if count == 0 {
            return Rgb::BLACK;
        }

        let mean = |s: u64| (s as f64 / count as f64).round() as u8;
        Rgb::new(mean(sum[0]), mean(sum[1]), mean(sum[2]))
    }
}
