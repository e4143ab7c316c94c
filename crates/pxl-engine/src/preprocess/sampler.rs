//! Source sampling: bounded downscale followed by adjustment.

use super::adjustments::Adjustments;
use super::resize::resize_box;
use crate::buffer::PixelBuffer;

/// Optional maximum output dimensions for [`sample`].
///
/// A cap of `None` (or `Some(0)`) leaves that axis unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleLimits {
    /// Maximum output width.
    pub max_width: Option<usize>,
    /// Maximum output height.
    pub max_height: Option<usize>,
}

impl SampleLimits {
    /// No caps: the source size is kept.
    #[inline]
    pub fn none() -> Self {
        Self::default()
    }

    /// Cap the output width.
    #[inline]
    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Cap the output height.
    #[inline]
    pub fn max_height(mut self, height: usize) -> Self {
        self.max_height = Some(height);
        self
    }

    /// Output size for a `width x height` source.
    ///
    /// The width cap is applied first, then the height cap, each scaling the
    /// other axis to keep the aspect ratio. Never grows either axis and never
    /// returns a zero dimension.
    pub fn target_size(&self, width: usize, height: usize) -> (usize, usize) {
        let (mut w, mut h) = (width as f64, height as f64);

        if let Some(max_w) = self.max_width.filter(|&m| m > 0) {
            let max_w = max_w as f64;
            if w > max_w {
                h = (h * max_w / w).round();
                w = max_w;
            }
        }
        if let Some(max_h) = self.max_height.filter(|&m| m > 0) {
            let max_h = max_h as f64;
            if h > max_h {
                w = (w * max_h / h).round();
                h = max_h;
            }
        }

        ((w as usize).max(1), (h as usize).max(1))
    }
}

/// Produce the working buffer for a render: downscale `source` to fit
/// `limits`, then apply `adjustments`.
///
/// The caller's buffer is never modified; the result is always a fresh
/// buffer owned by the caller.
///
/// # Example
///
/// ```
/// use pxl_engine::{Adjustments, PixelBuffer};
/// use pxl_engine::preprocess::{sample, SampleLimits};
///
/// let source = PixelBuffer::filled(400, 200, [90, 90, 90, 255]).unwrap();
/// let limits = SampleLimits::none().max_width(100);
/// let sampled = sample(&source, limits, &Adjustments::new());
/// assert_eq!((sampled.width(), sampled.height()), (100, 50));
/// ```
pub fn sample(source: &PixelBuffer, limits: SampleLimits, adjustments: &Adjustments) -> PixelBuffer {
    let (w, h) = limits.target_size(source.width(), source.height());
    let scaled = resize_box(source, w, h);
    adjustments.apply(scaled)
}
