use flo_render_crt::*;
use flo_render_crt::channel::*;
use flo_render_crt::compose::*;
use flo_render_crt::frame::*;
use flo_render_crt::pixel::*;
use flo_render_crt::shadow_mask::*;

use std::collections::{HashSet};

fn single_pixel(x: usize, y: usize, color: [u8; 4]) -> RgbaFrame<F32RgbaPixel> {
    let mut frame = RgbaFrame::new(4, 4);
    frame.set_pixel(x, y, F32RgbaPixel::from_u8(U8RgbaPixel::from_components(color)));
    frame
}

#[test]
fn compose_is_union_over_black() {
    let red         = single_pixel(0, 0, [255, 0, 0, 255]);
    let green       = single_pixel(1, 0, [0, 255, 0, 255]);
    let blue        = single_pixel(2, 0, [0, 0, 255, 255]);
    let composed    = compose(&red, &green, &blue).unwrap().to_u8();

    assert!(composed.pixel(0, 0).get_components() == [255, 0, 0, 255]);
    assert!(composed.pixel(1, 0).get_components() == [0, 255, 0, 255]);
    assert!(composed.pixel(2, 0).get_components() == [0, 0, 255, 255]);
    assert!(composed.pixel(3, 0) == U8RgbaPixel::BLACK);
    assert!(composed.pixel(2, 3) == U8RgbaPixel::BLACK);
}

#[test]
fn compose_mismatched_sizes() {
    let red     = RgbaFrame::new(4, 4);
    let green   = RgbaFrame::new(4, 4);
    let blue    = RgbaFrame::new(4, 5);

    assert!(matches!(compose(&red, &green, &blue), Err(CrtError::Geometry(_))));
}

#[test]
fn composed_image_is_lit_only_through_mask_holes() {
    let input       = RgbaFrame::from_pixels(2, 2, vec![U8RgbaPixel::WHITE, U8RgbaPixel::BLACK, U8RgbaPixel::BLACK, U8RgbaPixel::WHITE]).unwrap();
    let geometry    = CrtGeometry::new(2, 2, 64).unwrap();

    assert!(geometry.zoom_factor == 32);
    assert!(geometry.beam_diameter == 16);
    assert!(geometry.beam_step() == 3);

    let channels    = (0..3).map(|channel_index| render_channel(&input, channel_index, &geometry, MaskType::Delta).unwrap()).collect::<Vec<_>>();
    let composed    = compose(&channels[0], &channels[1], &channels[2]).unwrap().to_u8();

    // Each channel is lit in a separate set of pixels
    let lit = channels.iter()
        .map(|channel| (0..channel.pixels().len()).filter(|idx| channel.pixels()[*idx].to_u8().alpha() > 0).collect::<HashSet<_>>())
        .collect::<Vec<_>>();

    assert!(lit[0].is_disjoint(&lit[1]));
    assert!(lit[0].is_disjoint(&lit[2]));
    assert!(lit[1].is_disjoint(&lit[2]));

    // The composed image is opaque and black except where one of the channels is lit
    let holes = lit.iter().flat_map(|channel| channel.iter().copied()).collect::<HashSet<_>>();

    assert!(composed.size() == FrameSize { width: 64, height: 64 });
    assert!(composed.is_opaque());
    for (idx, pixel) in composed.pixels().iter().enumerate() {
        if !holes.contains(&idx) {
            assert!(*pixel == U8RgbaPixel::BLACK, "pixel {} is {:?}", idx, pixel);
        }
    }

    // The white areas are lit
    assert!(composed.pixels().iter().any(|pixel| *pixel != U8RgbaPixel::BLACK));
}

#[test]
fn bloom_keeps_size_and_opacity() {
    let mut image = RgbaFrame::filled(32, 32, F32RgbaPixel::black());
    image.set_pixel(16, 16, F32RgbaPixel::white());

    let bloomed = bloom(&image, 32).unwrap();

    assert!(bloomed.size() == image.size());
    assert!(bloomed.is_opaque());
}

#[test]
fn bloom_spreads_light() {
    let mut image = RgbaFrame::filled(32, 32, F32RgbaPixel::black());
    for y in 14..18 {
        for x in 14..18 {
            image.set_pixel(x, y, F32RgbaPixel::white());
        }
    }

    let bloomed = bloom(&image, 32).unwrap();

    // The bright area stays bright, and light spreads outside it
    assert!(bloomed.pixel(15, 15).channel(0) > 200);
    assert!(bloomed.pixel(20, 15).channel(0) > 0);

    // Far from the light, the image remains black
    assert!(bloomed.pixel(0, 0) == U8RgbaPixel::BLACK);
}

#[test]
fn bloom_never_darkens() {
    let image   = RgbaFrame::filled(8, 8, F32RgbaPixel::from_u8(U8RgbaPixel::from_components([40, 80, 120, 255])));
    let bloomed = bloom(&image, 16).unwrap();

    for pixel in bloomed.pixels().iter() {
        let [r, g, b, _] = pixel.get_components();
        assert!(r >= 40 && g >= 80 && b >= 120);
    }
}
