//! Test images.

use pxl_engine::PixelBuffer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Single-color opaque image.
pub fn solid(width: usize, height: usize, rgb: [u8; 3]) -> PixelBuffer {
    PixelBuffer::filled(width, height, [rgb[0], rgb[1], rgb[2], 255]).unwrap()
}

/// Map `i` in `0..n` onto `0..=255`.
fn ramp(i: usize, n: usize) -> u8 {
    (i * 255 / n.saturating_sub(1).max(1)).min(255) as u8
}

/// Red ramps left to right, green top to bottom, blue fixed.
pub fn gradient(width: usize, height: usize) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, y| [ramp(x, width), ramp(y, height), 96, 255]).unwrap()
}

/// Horizontal gray ramp from black to white.
pub fn gray_ramp(width: usize, height: usize) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, _| {
        let v = ramp(x, width);
        [v, v, v, 255]
    })
    .unwrap()
}

/// Seeded noise, identical across runs.
pub fn noise(seed: u64, width: usize, height: usize) -> PixelBuffer {
    let mut rng = StdRng::seed_from_u64(seed);
    PixelBuffer::from_fn(width, height, |_, _| [rng.gen(), rng.gen(), rng.gen(), 255]).unwrap()
}

/// Custom palette literals used across tests
pub mod colors {
    pub const WARM: [&str; 3] = ["#2b0f0e", "#c0392b", "#f5cba7"];
    pub const DUPLICATED: [&str; 4] = ["#000", "#000000", "#ffffff", "#FFF"];
}
