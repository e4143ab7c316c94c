//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use pxl_engine::{Palette, Raster, Rgb};

/// Assert raster dimensions and sample count
pub fn assert_dimensions(raster: &Raster, width: usize, height: usize) {
    assert_eq!(
        (raster.width(), raster.height()),
        (width, height),
        "Unexpected raster size"
    );
    assert_eq!(
        raster.data().len(),
        width * height * Raster::CHANNELS,
        "Sample count does not match dimensions"
    );
}

/// Assert every pixel is a member of `palette`
pub fn assert_only_palette_colors(raster: &Raster, palette: &Palette) {
    for (i, px) in raster.data().chunks(Raster::CHANNELS).enumerate() {
        let color = Rgb::new(px[0], px[1], px[2]);
        assert!(
            palette.contains(color),
            "Pixel {} ({}, {}) is {}, not a palette color",
            i,
            i % raster.width(),
            i / raster.width(),
            color
        );
    }
}

/// Assert the raster consists of solid `block x block` squares
pub fn assert_uniform_blocks(raster: &Raster, block: usize) {
    for y in 0..raster.height() {
        for x in 0..raster.width() {
            let anchor = raster.pixel(x - x % block, y - y % block);
            assert_eq!(
                raster.pixel(x, y),
                anchor,
                "Pixel ({x}, {y}) differs from its {block}x{block} block"
            );
        }
    }
}

/// Assert ASCII text has `rows` lines of `cols` characters each
pub fn assert_text_shape(text: &str, rows: usize, cols: usize) {
    let lines: Vec<&str> = if rows == 0 {
        Vec::new()
    } else {
        text.split('\n').collect()
    };
    assert_eq!(lines.len(), rows, "Unexpected line count in {text:?}");
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(line.chars().count(), cols, "Line {i} has the wrong width");
    }
}

/// Count pixels of a given color
pub fn count_color(raster: &Raster, color: Rgb) -> usize {
    raster
        .data()
        .chunks(Raster::CHANNELS)
        .filter(|px| *px == color.to_bytes())
        .count()
}
