//! Preprocessing applied before any renderer sees the image.
//!
//! The pipeline is:
//!
//! 1. **Resize**: box-filter downscale to the limits in [`SampleLimits`]
//!    (aspect preserving, never upscaling)
//! 2. **Adjust**: brightness and contrast, then saturation, via
//!    [`Adjustments`]
//!
//! [`sample`] runs both steps and returns a new buffer; the source buffer
//! is only read.

mod adjustments;
mod resize;
pub mod sampler;

pub use adjustments::Adjustments;
pub use resize::resize_box;
pub use sampler::{sample, SampleLimits};
