//! Error diffusion dithering.
//!
//! # Algorithms
//!
//! Seven classic kernels are available through [`DiffusionAlgorithm`]:
//!
//! - **Floyd-Steinberg**: 4 neighbors, the default
//! - **Atkinson**: 75% error propagation, crisp with small palettes
//! - **Jarvis** and **Stucki**: 12 neighbors over 3 rows, smooth gradients
//! - **Burkes**, **Sierra** and **Sierra Lite**: speed/spread tradeoffs
//!
//! All of them share one diffusion loop ([`diffuse`]); only the kernel
//! table differs.
//!
//! # Example
//!
//! ```
//! use pxl_engine::{NamedPalette, PixelBuffer};
//! use pxl_engine::dither::{dither, DiffusionAlgorithm};
//!
//! let buffer = PixelBuffer::filled(16, 8, [128, 128, 128, 255]).unwrap();
//! let palette = NamedPalette::BlackWhite.palette();
//! let art = dither(&buffer, &palette, DiffusionAlgorithm::Atkinson, 2);
//! assert_eq!((art.width(), art.height()), (32, 16));
//! ```

mod diffusion;
mod kernel;

pub use diffusion::diffuse;
pub use kernel::*;

use crate::buffer::PixelBuffer;
use crate::names;
use crate::output::Raster;
use crate::palette::Palette;

/// Diffusion kernel selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DiffusionAlgorithm {
    /// Floyd-Steinberg (100% propagation, 4 neighbors).
    #[default]
    FloydSteinberg,

    /// Atkinson (75% propagation, 6 neighbors).
    ///
    /// The dropped quarter of the error keeps highlights and shadows clean
    /// at the cost of some midtone detail.
    Atkinson,

    /// Jarvis-Judice-Ninke (100% propagation, 12 neighbors).
    Jarvis,

    /// Stucki (100% propagation, 12 neighbors).
    Stucki,

    /// Burkes (100% propagation, 7 neighbors).
    Burkes,

    /// Sierra (100% propagation, 10 neighbors).
    Sierra,

    /// Sierra Lite (100% propagation, 3 neighbors).
    SierraLite,
}

impl DiffusionAlgorithm {
    /// Every algorithm, in display order.
    pub const ALL: [DiffusionAlgorithm; 7] = [
        DiffusionAlgorithm::FloydSteinberg,
        DiffusionAlgorithm::Atkinson,
        DiffusionAlgorithm::Jarvis,
        DiffusionAlgorithm::Stucki,
        DiffusionAlgorithm::Burkes,
        DiffusionAlgorithm::Sierra,
        DiffusionAlgorithm::SierraLite,
    ];

    /// Registry key.
    pub fn name(self) -> &'static str {
        match self {
            DiffusionAlgorithm::FloydSteinberg => "floydsteinberg",
            DiffusionAlgorithm::Atkinson => "atkinson",
            DiffusionAlgorithm::Jarvis => "jarvis",
            DiffusionAlgorithm::Stucki => "stucki",
            DiffusionAlgorithm::Burkes => "burkes",
            DiffusionAlgorithm::Sierra => "sierra",
            DiffusionAlgorithm::SierraLite => "sierralite",
        }
    }

    /// Look up an algorithm by registry key. Returns `None` for unknown
    /// names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| names::matches(name, a.name()))
    }

    /// The kernel table for this algorithm.
    pub fn kernel(self) -> &'static Kernel {
        match self {
            DiffusionAlgorithm::FloydSteinberg => &FLOYD_STEINBERG,
            DiffusionAlgorithm::Atkinson => &ATKINSON,
            DiffusionAlgorithm::Jarvis => &JARVIS,
            DiffusionAlgorithm::Stucki => &STUCKI,
            DiffusionAlgorithm::Burkes => &BURKES,
            DiffusionAlgorithm::Sierra => &SIERRA,
            DiffusionAlgorithm::SierraLite => &SIERRA_LITE,
        }
    }
}

/// Dither `buffer` onto `palette` and enlarge each pixel to a
/// `point_size x point_size` block.
///
/// A `point_size` of 0 or 1 returns the dithered image at source size.
pub fn dither(
    buffer: &PixelBuffer,
    palette: &Palette,
    algorithm: DiffusionAlgorithm,
    point_size: usize,
) -> Raster {
    diffuse(buffer, palette, algorithm.kernel()).upscale(point_size.max(1))
}
