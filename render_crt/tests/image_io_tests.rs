#![cfg(feature = "image-io")]

use flo_render_crt::*;
use flo_render_crt::frame::*;
use flo_render_crt::pixel::*;

use std::fs;

fn checkerboard() -> RgbaFrame<U8RgbaPixel> {
    RgbaFrame::from_pixels(2, 2, vec![U8RgbaPixel::WHITE, U8RgbaPixel::BLACK, U8RgbaPixel::BLACK, U8RgbaPixel::WHITE]).unwrap()
}

#[test]
fn save_and_load_opaque_png() {
    let dir     = tempfile::tempdir().unwrap();
    let path    = dir.path().join("checkerboard.png");

    save_image(&checkerboard(), &path).unwrap();
    let loaded  = load_image(&path).unwrap();

    assert!(loaded == checkerboard());
}

#[test]
fn save_and_load_transparent_png() {
    let dir     = tempfile::tempdir().unwrap();
    let path    = dir.path().join("transparent.png");
    let frame   = RgbaFrame::from_pixels(2, 1, vec![U8RgbaPixel::TRANSPARENT, U8RgbaPixel::from_components([10, 20, 30, 40])]).unwrap();

    save_image(&frame, &path).unwrap();

    assert!(load_image(&path).unwrap() == frame);
}

#[test]
fn save_opaque_jpeg() {
    let dir     = tempfile::tempdir().unwrap();
    let path    = dir.path().join("flat.jpg");
    let frame   = RgbaFrame::filled(16, 16, U8RgbaPixel::from_components([200, 100, 50, 255]));

    save_image(&frame, &path).unwrap();
    let loaded  = load_image(&path).unwrap();

    assert!(loaded.size() == frame.size());
    assert!(loaded.is_opaque());
}

#[test]
fn load_missing_file() {
    let dir     = tempfile::tempdir().unwrap();
    let path    = dir.path().join("does_not_exist.png");

    match load_image(&path) {
        Err(err @ CrtError::Io { operation: IoOperation::Load, .. }) => {
            assert!(err.to_string().starts_with("Cannot load file"), "{}", err);
            assert!(err.to_string().contains("does_not_exist.png"), "{}", err);
        }

        other => panic!("{:?}", other.map(|frame| frame.size())),
    }
}

#[test]
fn load_file_that_is_not_an_image() {
    let dir     = tempfile::tempdir().unwrap();
    let path    = dir.path().join("not_an_image.png");
    fs::write(&path, "This is not a PNG file").unwrap();

    assert!(matches!(load_image(&path), Err(CrtError::Io { operation: IoOperation::Load, .. })));
}

#[test]
fn save_to_missing_directory() {
    let dir     = tempfile::tempdir().unwrap();
    let path    = dir.path().join("missing").join("output.png");

    match save_image(&checkerboard(), &path) {
        Err(err @ CrtError::Io { operation: IoOperation::Save, .. }) => {
            assert!(err.to_string().starts_with("Cannot save file"), "{}", err);
        }

        other => panic!("{:?}", other),
    }
}

#[test]
fn run_pipeline_on_files() {
    let dir         = tempfile::tempdir().unwrap();
    let input_path  = dir.path().join("input.png");
    let output_path = dir.path().join("output.png");

    save_image(&checkerboard(), &input_path).unwrap();
    run_pipeline(&input_path, &output_path, &ShadowMaskOptions::new(64)).unwrap();

    let output = load_image(&output_path).unwrap();
    assert!(output.size() == FrameSize { width: 64, height: 64 });
    assert!(output == render_crt(&checkerboard(), &ShadowMaskOptions::new(64)).unwrap());
}

#[test]
fn run_pipeline_without_input() {
    let dir         = tempfile::tempdir().unwrap();
    let input_path  = dir.path().join("input.png");
    let output_path = dir.path().join("output.png");

    assert!(matches!(run_pipeline(&input_path, &output_path, &ShadowMaskOptions::new(64)), Err(CrtError::Io { operation: IoOperation::Load, .. })));
    assert!(!output_path.exists());
}

#[test]
fn run_pipeline_with_bad_geometry_writes_nothing() {
    let dir         = tempfile::tempdir().unwrap();
    let input_path  = dir.path().join("input.png");
    let output_path = dir.path().join("output.png");

    save_image(&checkerboard(), &input_path).unwrap();

    assert!(matches!(run_pipeline(&input_path, &output_path, &ShadowMaskOptions::new(10)), Err(CrtError::Geometry(_))));
    assert!(!output_path.exists());
}

#[test]
fn save_masks_writes_one_file_per_channel() {
    let dir = tempfile::tempdir().unwrap();

    save_masks(&checkerboard(), &ShadowMaskOptions::new(64).with_mask_type(MaskType::Inline), dir.path()).unwrap();

    for channel_index in 0..3 {
        let mask = load_image(dir.path().join(format!("mask{}.png", channel_index))).unwrap();

        assert!(mask.size() == FrameSize { width: 64, height: 64 });
        assert!(mask == shadow_mask::make_mask(MaskType::Inline, 64, 64, 32, channel_index).unwrap());
    }
}
