//! Palette struct with nearest-color matching.

use super::error::PaletteError;
use crate::color::{hex_to_rgb, Rgb};

/// An ordered, non-empty list of colors to quantize against.
///
/// Order only matters for ties: [`nearest`](Palette::nearest) returns the
/// first entry that reaches the minimum distance. Duplicates are allowed and
/// simply never win a tie against their earlier copy.
///
/// # Example
///
/// ```
/// use pxl_engine::{Palette, Rgb};
///
/// let palette = Palette::new(vec![Rgb::BLACK, Rgb::WHITE]).unwrap();
/// assert_eq!(palette.nearest(Rgb::new(200, 190, 210)), Rgb::WHITE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from a list of colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: Vec<Rgb>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Create a palette from hex color literals.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] for the first literal that fails
    /// to parse, or [`PaletteError::EmptyPalette`] for an empty list.
    ///
    /// # Example
    ///
    /// ```
    /// use pxl_engine::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000000", "#fff"]).unwrap();
    /// assert_eq!(palette.len(), 2);
    /// ```
    pub fn from_hex<S: AsRef<str>>(literals: &[S]) -> Result<Self, PaletteError> {
        let colors = literals
            .iter()
            .enumerate()
            .map(|(index, literal)| {
                hex_to_rgb(literal.as_ref()).map_err(|error| PaletteError::ParseColor { index, error })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// Palette over a static registry table. Tables are never empty.
    pub(crate) fn from_static(colors: &'static [Rgb]) -> Self {
        debug_assert!(!colors.is_empty(), "registry palettes are non-empty");
        Self {
            colors: colors.to_vec(),
        }
    }

    /// Number of colors in the palette (always at least 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The palette colors in order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Color at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    /// Whether `color` is an exact member of the palette.
    pub fn contains(&self, color: Rgb) -> bool {
        self.colors.contains(&color)
    }

    /// Index of the nearest palette color by squared RGB distance.
    ///
    /// Linear scan; the first entry achieving the minimum wins.
    pub fn nearest_index(&self, color: Rgb) -> usize {
        let mut best = 0;
        let mut best_dist = u32::MAX;
        for (i, candidate) in self.colors.iter().enumerate() {
            let dist = color.distance_sq(*candidate);
            if dist < best_dist {
                best_dist = dist;
                best = i;
                if dist == 0 {
                    break;
                }
            }
        }
        best
    }

    /// Nearest palette color by squared RGB distance.
    #[inline]
    pub fn nearest(&self, color: Rgb) -> Rgb {
        self.colors[self.nearest_index(color)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ParseColorError;

    fn grays() -> Palette {
        Palette::new(vec![Rgb::BLACK, Rgb::new(128, 128, 128), Rgb::WHITE]).unwrap()
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert_eq!(Palette::new(Vec::new()), Err(PaletteError::EmptyPalette));
        let none: [&str; 0] = [];
        assert_eq!(Palette::from_hex(&none), Err(PaletteError::EmptyPalette));
    }

    #[test]
    fn test_from_hex_reports_index() {
        let err = Palette::from_hex(&["#000", "#12", "#fff"]).unwrap_err();
        assert_eq!(
            err,
            PaletteError::ParseColor {
                index: 1,
                error: ParseColorError::InvalidLength(2)
            }
        );
    }

    #[test]
    fn test_nearest_exact_member() {
        let palette = grays();
        for &c in palette.colors() {
            assert_eq!(palette.nearest(c), c);
        }
    }

    #[test]
    fn test_nearest_picks_closest() {
        let palette = grays();
        assert_eq!(palette.nearest(Rgb::new(100, 110, 120)), Rgb::new(128, 128, 128));
        assert_eq!(palette.nearest(Rgb::new(20, 0, 40)), Rgb::BLACK);
        assert_eq!(palette.nearest(Rgb::new(250, 240, 230)), Rgb::WHITE);
    }

    #[test]
    fn test_nearest_tie_goes_to_first_entry() {
        // 64 is equidistant from 0 and 128
        let palette = Palette::new(vec![Rgb::new(128, 128, 128), Rgb::BLACK]).unwrap();
        assert_eq!(palette.nearest_index(Rgb::new(64, 64, 64)), 0);

        let palette = Palette::new(vec![Rgb::BLACK, Rgb::new(128, 128, 128)]).unwrap();
        assert_eq!(palette.nearest_index(Rgb::new(64, 64, 64)), 0);
    }

    #[test]
    fn test_duplicates_resolve_to_first() {
        let palette = Palette::new(vec![Rgb::WHITE, Rgb::BLACK, Rgb::WHITE]).unwrap();
        assert_eq!(palette.nearest_index(Rgb::new(250, 250, 250)), 0);
    }

    #[test]
    fn test_nearest_does_not_mutate() {
        let palette = grays();
        let before = palette.clone();
        let _ = palette.nearest(Rgb::new(1, 2, 3));
        assert_eq!(palette, before);
    }
}
