//! Tests for ASCII art rendering through the service
//!
//! Glyph pixels depend on installed fonts; ink checks are skipped when the
//! machine has none.

mod common;

use common::fixtures;
use common::*;
use pretty_assertions::assert_eq;
use pxl::rendering::glyphs::{DARK, LIGHT};
use pxl::{AsciiArtOptions, RenderRequest};
use pxl_engine::ascii::{CharsetPreset, DENSE_CHARSET};
use pxl_engine::Rgb;

fn has_fonts() -> bool {
    service().font_count() > 0
}

#[test]
fn test_grid_shape_and_output_size() {
    let source = fixtures::gradient(70, 50);
    let art = service()
        .render_ascii_art(&source, &AsciiArtOptions::new().cell_size(8))
        .unwrap();

    // 70 / 8 = 8 columns, 50 / 16 = 3 rows
    assert_text_shape(&art.text, 3, 8);
    assert_dimensions(&art.raster, 70, 50);
}

#[test]
fn test_text_uses_selected_preset() {
    let source = fixtures::gray_ramp(64, 32);
    for preset in CharsetPreset::ALL {
        let options = AsciiArtOptions::new().cell_size(4).preset(preset.name());
        let art = service().render_ascii_art(&source, &options).unwrap();
        for glyph in art.text.chars().filter(|&c| c != '\n') {
            assert!(
                preset.chars().contains(&glyph),
                "{glyph:?} is not in the {} charset",
                preset.name()
            );
        }
    }
}

#[test]
fn test_mixed_density_overrides_preset() {
    let source = fixtures::gray_ramp(64, 16);
    let options = AsciiArtOptions::new()
        .cell_size(2)
        .preset("minimal")
        .mixed_density(true);
    let art = service().render_ascii_art(&source, &options).unwrap();
    assert!(art.text.chars().filter(|&c| c != '\n').all(|c| DENSE_CHARSET.contains(&c)));
}

#[test]
fn test_black_source_is_plain_background() {
    let source = fixtures::solid(32, 32, [0, 0, 0]);
    let art = service()
        .render_ascii_art(&source, &AsciiArtOptions::new())
        .unwrap();

    // Black maps to the first glyph of the ramp, a space
    assert_eq!(art.text, "    \n    ");
    assert_eq!(count_color(&art.raster, DARK), 32 * 32);
}

#[test]
fn test_invert_swaps_background() {
    let source = fixtures::solid(32, 32, [255, 255, 255]);
    let art = service()
        .render_ascii_art(&source, &AsciiArtOptions::new().invert(true))
        .unwrap();

    assert_eq!(art.text, "    \n    ");
    assert_eq!(count_color(&art.raster, LIGHT), 32 * 32);
}

#[test]
fn test_glyphs_use_cell_color() {
    if !has_fonts() {
        return;
    }
    let source = fixtures::solid(64, 64, [255, 0, 0]);
    let art = service()
        .render_ascii_art(&source, &AsciiArtOptions::new().cell_size(16))
        .unwrap();

    assert!(
        count_color(&art.raster, Rgb::new(255, 0, 0)) > 0,
        "Expected red glyph pixels"
    );
}

#[test]
fn test_bw_glyphs_are_single_color() {
    if !has_fonts() {
        return;
    }
    let source = fixtures::solid(64, 64, [255, 0, 0]);
    let art = service()
        .render_ascii_art(&source, &AsciiArtOptions::new().cell_size(16).bw(true))
        .unwrap();

    assert_eq!(count_color(&art.raster, Rgb::new(255, 0, 0)), 0);
    assert!(count_color(&art.raster, LIGHT) > 0, "Expected light glyph pixels");
}

#[test]
fn test_rotation_renders() {
    let source = fixtures::gradient(48, 48);
    let art = service()
        .render_ascii_art(&source, &AsciiArtOptions::new().cell_size(6).rotate(true))
        .unwrap();
    assert_dimensions(&art.raster, 48, 48);
}

#[test]
fn test_source_smaller_than_cell() {
    let source = fixtures::gradient(6, 20);
    let art = service()
        .render_ascii_art(&source, &AsciiArtOptions::new().cell_size(8))
        .unwrap();

    assert_eq!(art.text, "");
    assert_dimensions(&art.raster, 6, 20);
    assert_eq!(count_color(&art.raster, DARK), 6 * 20);
}

#[test]
fn test_huge_cell_size_from_config_is_background() {
    let json = format!(r#"{{"mode":"ascii","cellSize":{}}}"#, usize::MAX);
    let request = RenderRequest::from_json(&json).unwrap();
    let artifact = service()
        .render(&fixtures::gradient(12, 12), &request)
        .unwrap();

    assert_eq!(artifact.text(), Some(""));
    assert_eq!(count_color(artifact.raster(), DARK), 12 * 12);
}

#[test]
fn test_artifact_carries_text() {
    let request = RenderRequest::from(AsciiArtOptions::new().cell_size(4));
    let artifact = service()
        .render(&fixtures::gradient(16, 16), &request)
        .unwrap();

    assert_eq!(artifact.text().map(|t| t.lines().count()), Some(2));
    assert_eq!(artifact.suggested_file_name(), "ascii-art.png");
    assert_eq!(
        artifact.suggested_text_file_name().as_deref(),
        Some("ascii-art.txt")
    );
}
