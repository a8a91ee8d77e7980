use super::shapes::*;

use crate::beam::*;
use crate::error::*;
use crate::frame::*;
use crate::pixel::*;

/// Number of phosphor dots (per channel) across the width of a single input pixel
pub const DOTS_PER_INPUT_PIXEL: usize = 4;

///
/// Makes the mask for a channel of a delta shadow mask
///
/// The holes are round dots laid out in rows. Each row repeats the pattern red, green, blue, with alternate rows shifted by
/// half a period, so that neighbouring dots of the three colours form triangles.
///
pub fn make_delta_mask(width: usize, height: usize, zoom_factor: usize, channel_index: usize) -> Result<RgbaFrame<U8RgbaPixel>> {
    check_channel_index(channel_index)?;

    let horizontal_spacing  = (zoom_factor / DOTS_PER_INPUT_PIXEL) as i64;
    let vertical_spacing    = ((horizontal_spacing as f64) * 3.0f64.sqrt() / 2.0).round() as i64;
    let dot_size            = (horizontal_spacing as f64) * 2.0 / 3.0;

    if horizontal_spacing <= 0 || vertical_spacing <= 0 {
        return Err(CrtError::Geometry(format!("a zoom factor of {} is too small for a delta mask (need at least {})", zoom_factor, DOTS_PER_INPUT_PIXEL)));
    }

    let mut mask_image  = RgbaFrame::new(width, height);
    let mut even_row    = true;

    for y in (0..(height as i64)).step_by(vertical_spacing as usize) {
        let mut start_x = horizontal_spacing * (channel_index as i64 - 3);
        if !even_row {
            start_x += horizontal_spacing*3/2;
        }

        let mut x = start_x;
        while x < width as i64 {
            fill_circle(&mut mask_image, x as f64, y as f64, dot_size, U8RgbaPixel::WHITE);
            x += horizontal_spacing*3;
        }

        even_row = !even_row;
    }

    Ok(mask_image)
}
