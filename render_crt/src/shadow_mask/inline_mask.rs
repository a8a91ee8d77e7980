use super::shapes::*;

use crate::beam::*;
use crate::error::*;
use crate::frame::*;
use crate::pixel::*;

/// Number of slots (per channel) across the width of a single input pixel
pub const SLOTS_PER_INPUT_PIXEL: usize = 2;

///
/// Makes the mask for a channel of an inline (slot) shadow mask
///
/// The holes are vertical slots. The red, green and blue slots sit side by side, and alternate columns of slots are shifted
/// down by half a slot.
///
pub fn make_inline_mask(width: usize, height: usize, zoom_factor: usize, channel_index: usize) -> Result<RgbaFrame<U8RgbaPixel>> {
    check_channel_index(channel_index)?;

    let horizontal_spacing  = (zoom_factor / NUM_CHANNELS / SLOTS_PER_INPUT_PIXEL) as i64;
    let vertical_spacing    = (zoom_factor / SLOTS_PER_INPUT_PIXEL) as i64;
    let dot_width           = (horizontal_spacing as f64) * 0.9;
    let dot_height          = (vertical_spacing as f64) * 0.9;
    let corner_radius       = dot_width.min(dot_height);

    if horizontal_spacing <= 0 || vertical_spacing <= 0 {
        return Err(CrtError::Geometry(format!("a zoom factor of {} is too small for an inline mask (need at least {})", zoom_factor, NUM_CHANNELS*SLOTS_PER_INPUT_PIXEL)));
    }

    let mut mask_image  = RgbaFrame::new(width, height);
    let mut even_column = true;
    let mut x           = horizontal_spacing * (channel_index as i64 - 3);

    while x < width as i64 {
        let mut y = 0;
        if !even_column {
            y -= vertical_spacing/2;
        }

        while y < height as i64 {
            fill_rounded_rect(&mut mask_image, x as f64, y as f64, dot_width, dot_height, corner_radius, U8RgbaPixel::WHITE);
            y += vertical_spacing;
        }

        x           += horizontal_spacing*3;
        even_column = !even_column;
    }

    Ok(mask_image)
}
