//! Error diffusion kernel definitions.
//!
//! Each kernel specifies how the quantization error of one pixel is spread
//! over the neighbors that have not been visited yet in a left-to-right,
//! top-to-bottom scan.

/// An error diffusion kernel.
///
/// Entries are `(dx, dy, weight)` where `dy >= 0` and, on the current row,
/// `dx > 0`. A neighbor receives `error * weight / divisor`.
///
/// # Error Propagation
///
/// The total error propagated is `sum(weights) / divisor`. Every kernel here
/// propagates 100% except Atkinson, which deliberately drops a quarter.
///
/// # Buffer Sizing
///
/// `max_dy` is how many rows ahead the kernel reaches, so the diffusion
/// window needs `max_dy + 1` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    /// (dx, dy, weight) entries.
    pub entries: &'static [(i32, i32, u8)],

    /// Shared divisor for the weights.
    pub divisor: u8,

    /// Largest `dy` in `entries`.
    pub max_dy: usize,
}

impl Kernel {
    /// Effective weight of one entry.
    #[inline]
    pub fn weight(&self, numerator: u8) -> f32 {
        f32::from(numerator) / f32::from(self.divisor)
    }

    /// Fraction of the error this kernel propagates.
    pub fn total_weight(&self) -> f32 {
        let sum: u32 = self.entries.iter().map(|&(_, _, w)| u32::from(w)).sum();
        sum as f32 / f32::from(self.divisor)
    }
}

/// Floyd-Steinberg.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
    max_dy: 1,
};

/// Atkinson: six neighbors at 1/8 each, 75% propagation.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
pub const ATKINSON: Kernel = Kernel {
    entries: &[
        (1, 0, 1),
        (2, 0, 1),
        (-1, 1, 1),
        (0, 1, 1),
        (1, 1, 1),
        (0, 2, 1),
    ],
    divisor: 8,
    max_dy: 2,
};

/// Jarvis-Judice-Ninke.
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1
/// ```
pub const JARVIS: Kernel = Kernel {
    entries: &[
        (1, 0, 7),
        (2, 0, 5),
        (-2, 1, 3),
        (-1, 1, 5),
        (0, 1, 7),
        (1, 1, 5),
        (2, 1, 3),
        (-2, 2, 1),
        (-1, 2, 3),
        (0, 2, 5),
        (1, 2, 3),
        (2, 2, 1),
    ],
    divisor: 48,
    max_dy: 2,
};

/// Stucki: JJN layout with heavier center weights.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1
/// ```
pub const STUCKI: Kernel = Kernel {
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
        (-2, 2, 1),
        (-1, 2, 2),
        (0, 2, 4),
        (1, 2, 2),
        (2, 2, 1),
    ],
    divisor: 42,
    max_dy: 2,
};

/// Burkes: the first two rows of Stucki.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
/// ```
pub const BURKES: Kernel = Kernel {
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
    ],
    divisor: 32,
    max_dy: 1,
};

/// Sierra (three-row).
///
/// ```text
///            X   5   3
///    2   4   5   4   2
///        2   3   2
/// ```
pub const SIERRA: Kernel = Kernel {
    entries: &[
        (1, 0, 5),
        (2, 0, 3),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 5),
        (1, 1, 4),
        (2, 1, 2),
        (-1, 2, 2),
        (0, 2, 3),
        (1, 2, 2),
    ],
    divisor: 32,
    max_dy: 2,
};

/// Sierra Lite.
///
/// ```text
///    X   2
///    1   1
/// ```
pub const SIERRA_LITE: Kernel = Kernel {
    entries: &[(1, 0, 2), (-1, 1, 1), (0, 1, 1)],
    divisor: 4,
    max_dy: 1,
};
