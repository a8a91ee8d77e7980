use crate::error::*;
use crate::frame::*;
use crate::pixel::*;

///
/// Clips a frame through a mask: pixels are kept where the mask has any opacity, and become transparent everywhere else
///
/// Masks are generated with fully opaque holes, so a pixel inside a hole is returned unchanged.
///
pub fn clip_to_mask(frame: &RgbaFrame<F32RgbaPixel>, mask: &RgbaFrame<U8RgbaPixel>) -> Result<RgbaFrame<F32RgbaPixel>> {
    if frame.size() != mask.size() {
        return Err(CrtError::Geometry(format!("cannot clip a {}x{} frame to a {}x{} mask", frame.width(), frame.height(), mask.width(), mask.height())));
    }

    let clipped = frame.pixels().iter()
        .zip(mask.pixels().iter())
        .map(|(pixel, mask_pixel)| {
            if mask_pixel.alpha() > 0 {
                pixel.source_in(F32RgbaPixel::from_u8(*mask_pixel))
            } else {
                F32RgbaPixel::default()
            }
        })
        .collect();

    RgbaFrame::from_pixels(frame.width(), frame.height(), clipped)
}
