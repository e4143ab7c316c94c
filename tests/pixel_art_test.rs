//! Tests for pixel art rendering through the service

mod common;

use common::fixtures::{self, colors};
use common::*;
use pretty_assertions::assert_eq;
use pxl::{Artifact, PixelArtOptions, RenderError, RenderRequest};
use pxl_engine::{NamedPalette, Palette, Rgb};

#[test]
fn test_output_covers_partial_blocks() {
    let source = fixtures::gradient(30, 17);
    let raster = service()
        .render_pixel_art(&source, &PixelArtOptions::new().pixel_size(8))
        .unwrap();

    assert_dimensions(&raster, 32, 24);
    assert_uniform_blocks(&raster, 8);
}

#[test]
fn test_block_is_source_average() {
    // Left half black, right half white: each 4x4 block sees one of them
    let source = pxl_engine::PixelBuffer::from_fn(8, 4, |x, _| {
        if x < 4 {
            [0, 0, 0, 255]
        } else {
            [255, 255, 255, 255]
        }
    })
    .unwrap();
    let raster = service()
        .render_pixel_art(&source, &PixelArtOptions::new().pixel_size(4))
        .unwrap();

    assert_eq!(raster.pixel(0, 0), Rgb::BLACK);
    assert_eq!(raster.pixel(7, 3), Rgb::WHITE);

    let raster = service()
        .render_pixel_art(&source, &PixelArtOptions::new().pixel_size(8))
        .unwrap();
    assert_eq!(raster.pixel(0, 0), Rgb::new(128, 128, 128));
}

#[test]
fn test_named_palette_restricts_colors() {
    let source = fixtures::noise(7, 40, 24);
    for named in NamedPalette::ALL {
        let options = PixelArtOptions::new().pixel_size(4).palette(named.name());
        let raster = service().render_pixel_art(&source, &options).unwrap();
        assert_only_palette_colors(&raster, &named.palette());
    }
}

#[test]
fn test_palette_name_is_forgiving() {
    let source = fixtures::noise(3, 16, 16);
    let canonical = service()
        .render_pixel_art(&source, &PixelArtOptions::new().palette("gameboy"))
        .unwrap();
    let spelled = service()
        .render_pixel_art(&source, &PixelArtOptions::new().palette("Game-Boy"))
        .unwrap();
    assert_eq!(canonical, spelled);
}

#[test]
fn test_unknown_palette_falls_back_to_black_and_white() {
    let source = fixtures::noise(11, 16, 16);
    let raster = service()
        .render_pixel_art(&source, &PixelArtOptions::new().palette("vaporwave"))
        .unwrap();
    assert_only_palette_colors(&raster, &NamedPalette::BlackWhite.palette());
}

#[test]
fn test_custom_colors() {
    let source = fixtures::noise(5, 24, 24);
    let options = PixelArtOptions::new().pixel_size(3).custom_colors(colors::WARM);
    let raster = service().render_pixel_art(&source, &options).unwrap();

    assert_only_palette_colors(&raster, &Palette::from_hex(&colors::WARM).unwrap());
}

#[test]
fn test_empty_custom_list_disables_quantization() {
    let source = fixtures::gradient(16, 16);
    let plain = service()
        .render_pixel_art(&source, &PixelArtOptions::new().pixel_size(2))
        .unwrap();
    let empty = service()
        .render_pixel_art(
            &source,
            &PixelArtOptions::new()
                .pixel_size(2)
                .custom_colors(Vec::<String>::new()),
        )
        .unwrap();
    assert_eq!(plain, empty);
}

#[test]
fn test_invalid_custom_color_is_rejected() {
    let options = PixelArtOptions::new().custom_colors(["#ff0000", "#zzzzzz"]);
    let err = service()
        .render_pixel_art(&fixtures::gradient(8, 8), &options)
        .unwrap_err();

    match err {
        RenderError::InvalidColor { value, .. } => assert_eq!(value, "#zzzzzz"),
        other => panic!("Expected InvalidColor, got {other:?}"),
    }
}

#[test]
fn test_saturation_zero_is_gray() {
    let source = fixtures::noise(9, 16, 16);
    let options = PixelArtOptions::new().pixel_size(1).saturation(0.0);
    let raster = service().render_pixel_art(&source, &options).unwrap();

    for px in raster.data().chunks(3) {
        let spread = px.iter().max().unwrap() - px.iter().min().unwrap();
        assert!(spread <= 1, "Pixel {px:?} is not gray");
    }
}

#[test]
fn test_brightness_lightens() {
    let source = fixtures::solid(8, 8, [100, 100, 100]);
    let raster = service()
        .render_pixel_art(&source, &PixelArtOptions::new().brightness(50.0))
        .unwrap();
    assert!(raster.pixel(0, 0).r > 100);
}

#[test]
fn test_render_request_produces_named_artifact() {
    let request = RenderRequest::from(PixelArtOptions::new().pixel_size(5));
    let artifact = service()
        .render(&fixtures::gradient(10, 10), &request)
        .unwrap();

    assert!(matches!(artifact, Artifact::Pixel(_)));
    assert_eq!(artifact.suggested_file_name(), "pixel-art.png");
    assert_eq!(artifact.suggested_text_file_name(), None);
    assert_dimensions(artifact.raster(), 10, 10);
}
