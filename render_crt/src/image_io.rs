use crate::error::*;
use crate::frame::*;
use crate::pixel::*;

use image;
use image::io::Reader as ImageReader;

use std::path::{Path};

///
/// Loads an image file (in any format supported by the `image` crate) as a frame of 8-bit RGBA pixels
///
pub fn load_image(path: impl AsRef<Path>) -> Result<RgbaFrame<U8RgbaPixel>> {
    let path    = path.as_ref();
    let to_err  = |err: &dyn ToString| CrtError::io(IoOperation::Load, path, err.to_string());

    // Load the image
    let img     = ImageReader::open(path).map_err(|err| to_err(&err))?;
    let img     = img.with_guessed_format().map_err(|err| to_err(&err))?;
    let img     = img.decode().map_err(|err| to_err(&err))?;

    // Convert to 8-bit RGBA
    let img     = img.into_rgba8();
    let width   = img.width() as usize;
    let height  = img.height() as usize;
    let pixels  = img.into_raw().to_rgba_slice().to_vec();

    RgbaFrame::from_pixels(width, height, pixels)
}

///
/// Saves a frame to an image file, using the file extension to choose the format
///
/// Frames with no transparency are saved as RGB so they can be written in formats without an alpha channel (such as JPEG).
///
pub fn save_image(frame: &RgbaFrame<U8RgbaPixel>, path: impl AsRef<Path>) -> Result<()> {
    let path    = path.as_ref();
    let width   = frame.width() as u32;
    let height  = frame.height() as u32;

    let result = if frame.is_opaque() {
        let rgb = frame.as_bytes()
            .chunks_exact(4)
            .flat_map(|rgba| rgba[0..3].iter().copied())
            .collect::<Vec<u8>>();

        image::save_buffer(path, &rgb, width, height, image::ColorType::Rgb8)
    } else {
        image::save_buffer(path, frame.as_bytes(), width, height, image::ColorType::Rgba8)
    };

    result.map_err(|err| CrtError::io(IoOperation::Save, path, err))
}
