//! Brightness, contrast and saturation adjustment.

use crate::buffer::PixelBuffer;
use crate::color::{clamp_channel, LUMA_WEIGHTS};

/// Tone adjustments applied before rendering.
///
/// All three controls use slider units:
///
/// - `brightness`: -100..=100, scaled by 2.55 and added after contrast
/// - `contrast`: -100..=100, classic `259(c+255) / 255(259-c)` slope
/// - `saturation`: 0 and up, 100 = unchanged, 0 = grayscale
///
/// Out-of-range brightness and contrast are clamped; negative saturation is
/// treated as 0.
///
/// # Example
///
/// ```
/// use pxl_engine::{Adjustments, PixelBuffer};
///
/// let buffer = PixelBuffer::filled(1, 1, [100, 150, 200, 255]).unwrap();
/// let gray = Adjustments::new().saturation(0.0).apply(buffer);
/// let [r, g, b, a] = gray.pixel(0, 0);
/// assert!(r == g && g == b);
/// assert_eq!(a, 255);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustments {
    /// Brightness offset in slider units.
    pub brightness: f64,
    /// Contrast in slider units.
    pub contrast: f64,
    /// Saturation percentage.
    pub saturation: f64,
}

impl Default for Adjustments {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            contrast: 0.0,
            saturation: 100.0,
        }
    }
}

impl Adjustments {
    /// Identity adjustments.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set brightness (-100..=100).
    #[inline]
    pub fn brightness(mut self, value: f64) -> Self {
        self.brightness = value;
        self
    }

    /// Set contrast (-100..=100).
    #[inline]
    pub fn contrast(mut self, value: f64) -> Self {
        self.contrast = value;
        self
    }

    /// Set saturation percentage (100 = unchanged).
    #[inline]
    pub fn saturation(mut self, value: f64) -> Self {
        self.saturation = value;
        self
    }

    /// Whether applying these adjustments leaves every pixel unchanged.
    pub fn is_identity(&self) -> bool {
        self.brightness == 0.0 && self.contrast == 0.0 && self.saturation == 100.0
    }

    /// Adjust a buffer, taking ownership and handing it back.
    pub fn apply(&self, mut buffer: PixelBuffer) -> PixelBuffer {
        self.apply_rgba(buffer.data_mut());
        buffer
    }

    /// Adjust raw RGBA samples in place. Alpha is never touched; a trailing
    /// partial pixel is ignored.
    pub fn apply_rgba(&self, data: &mut [u8]) {
        if self.is_identity() {
            return;
        }

        let offset = self.brightness.clamp(-100.0, 100.0) * 2.55;
        let c = self.contrast.clamp(-100.0, 100.0) * 2.55;
        let slope = (259.0 * (c + 255.0)) / (255.0 * (259.0 - c));
        let sat = self.saturation.max(0.0) / 100.0;

        for px in data.chunks_exact_mut(4) {
            let mut rgb = [0.0f64; 3];
            for (v, &sample) in rgb.iter_mut().zip(px.iter()) {
                *v = slope * (f64::from(sample) - 128.0) + 128.0 + offset;
            }

            if sat != 1.0 {
                let gray = LUMA_WEIGHTS[0] * rgb[0] + LUMA_WEIGHTS[1] * rgb[1] + LUMA_WEIGHTS[2] * rgb[2];
                for v in &mut rgb {
                    *v = gray + sat * (*v - gray);
                }
            }

            for (sample, v) in px.iter_mut().zip(rgb) {
                *sample = clamp_channel(v);
            }
        }
    }
}
