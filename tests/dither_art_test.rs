//! Tests for dithered art rendering through the service

mod common;

use common::fixtures::{self, colors};
use common::*;
use pretty_assertions::assert_eq;
use pxl::{DitherArtOptions, RenderError, RenderRequest};
use pxl_engine::dither::DiffusionAlgorithm;
use pxl_engine::{NamedPalette, Palette, Rgb};

#[test]
fn test_default_is_black_and_white() {
    let source = fixtures::gradient(32, 20);
    let raster = service()
        .render_dither_art(&source, &DitherArtOptions::new())
        .unwrap();

    assert_dimensions(&raster, 32, 20);
    assert_only_palette_colors(&raster, &NamedPalette::BlackWhite.palette());
}

#[test]
fn test_point_size_scales_output() {
    let source = fixtures::noise(1, 13, 9);
    let raster = service()
        .render_dither_art(&source, &DitherArtOptions::new().point_size(3))
        .unwrap();

    assert_dimensions(&raster, 39, 27);
    assert_uniform_blocks(&raster, 3);
}

#[test]
fn test_every_algorithm_by_name() {
    let source = fixtures::gray_ramp(48, 12);
    let palette = NamedPalette::Pico8.palette();
    for algorithm in DiffusionAlgorithm::ALL {
        let options = DitherArtOptions::new()
            .algorithm(algorithm.name())
            .palette("pico8");
        let raster = service().render_dither_art(&source, &options).unwrap();
        assert_dimensions(&raster, 48, 12);
        assert_only_palette_colors(&raster, &palette);
    }
}

#[test]
fn test_algorithms_differ() {
    let source = fixtures::gray_ramp(40, 16);
    let floyd = service()
        .render_dither_art(&source, &DitherArtOptions::new().algorithm("floydsteinberg"))
        .unwrap();
    let atkinson = service()
        .render_dither_art(&source, &DitherArtOptions::new().algorithm("atkinson"))
        .unwrap();
    assert_ne!(floyd, atkinson);
}

#[test]
fn test_unknown_algorithm_falls_back_to_floyd_steinberg() {
    let source = fixtures::noise(21, 20, 20);
    let fallback = service()
        .render_dither_art(&source, &DitherArtOptions::new().algorithm("ordered"))
        .unwrap();
    let floyd = service()
        .render_dither_art(&source, &DitherArtOptions::new())
        .unwrap();
    assert_eq!(fallback, floyd);
}

#[test]
fn test_mid_gray_is_half_white() {
    let source = fixtures::solid(64, 64, [128, 128, 128]);
    let raster = service()
        .render_dither_art(&source, &DitherArtOptions::new())
        .unwrap();

    let ratio = count_color(&raster, Rgb::WHITE) as f64 / (64.0 * 64.0);
    assert!((ratio - 0.5).abs() < 0.05, "White ratio was {ratio}");
}

#[test]
fn test_none_palette_still_quantizes() {
    let source = fixtures::gradient(16, 16);
    let raster = service()
        .render_dither_art(&source, &DitherArtOptions::new().palette("none"))
        .unwrap();
    assert_only_palette_colors(&raster, &NamedPalette::BlackWhite.palette());
}

#[test]
fn test_custom_colors_deduplicated() {
    let source = fixtures::noise(4, 16, 16);
    let options = DitherArtOptions::new().custom_colors(colors::DUPLICATED);
    let raster = service().render_dither_art(&source, &options).unwrap();
    assert_only_palette_colors(&raster, &Palette::new(vec![Rgb::BLACK, Rgb::WHITE]).unwrap());
}

#[test]
fn test_invalid_custom_color_is_rejected() {
    let options = DitherArtOptions::new().custom_colors(["black"]);
    let result = service().render_dither_art(&fixtures::gradient(4, 4), &options);
    assert!(matches!(result, Err(RenderError::InvalidColor { .. })));
}

#[test]
fn test_threshold_does_not_change_output() {
    let source = fixtures::noise(8, 24, 24);
    let default = service()
        .render_dither_art(&source, &DitherArtOptions::new())
        .unwrap();
    let custom = service()
        .render_dither_art(&source, &DitherArtOptions::new().threshold(10))
        .unwrap();
    assert_eq!(default, custom);
}

#[test]
fn test_rendering_is_deterministic() {
    let source = fixtures::noise(42, 30, 30);
    let request = RenderRequest::from(DitherArtOptions::new().algorithm("jarvis").palette("c64"));
    let first = service().render(&source, &request).unwrap();
    let second = service().render(&source, &request).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.suggested_file_name(), "dither-art.png");
}
