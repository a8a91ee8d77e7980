use crate::error::*;
use crate::frame::*;
use crate::pixel::*;

///
/// Blends two 8-bit values with the 'screen' blend mode: `1-(1-a)*(1-b)`, scaled to the range 0-255
///
/// Screening never makes a value darker: `screen_u8(0, b) == b` and `screen_u8(255, b) == 255`
///
#[inline]
pub fn screen_u8(a: u8, b: u8) -> u8 {
    let inv_a = 255 - a as u32;
    let inv_b = 255 - b as u32;

    (255 - (inv_a*inv_b + 127)/255) as u8
}

///
/// Screens a frame on top of a base frame, combining each of the channels with `screen_u8()`
///
pub fn screen_blend(base: &RgbaFrame<U8RgbaPixel>, over: &RgbaFrame<U8RgbaPixel>) -> Result<RgbaFrame<U8RgbaPixel>> {
    if base.size() != over.size() {
        return Err(CrtError::Geometry(format!("cannot blend a {}x{} frame on to a {}x{} frame", over.width(), over.height(), base.width(), base.height())));
    }

    let blended = base.pixels().iter()
        .zip(over.pixels().iter())
        .map(|(base_pixel, over_pixel)| {
            let [r1, g1, b1, a1] = base_pixel.get_components();
            let [r2, g2, b2, a2] = over_pixel.get_components();

            U8RgbaPixel::from_components([screen_u8(r1, r2), screen_u8(g1, g2), screen_u8(b1, b2), screen_u8(a1, a2)])
        })
        .collect();

    RgbaFrame::from_pixels(base.width(), base.height(), blended)
}
