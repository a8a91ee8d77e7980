mod mask_type;
mod shapes;
mod delta_mask;
mod inline_mask;

pub use mask_type::*;
pub use shapes::*;
pub use delta_mask::*;
pub use inline_mask::*;

use crate::error::*;
use crate::frame::*;
use crate::pixel::*;

///
/// Makes a full-size image of the shadow mask for a channel. The image is transparent except for the holes, which are white.
///
/// The holes for channels 0, 1 and 2 never overlap, so each output pixel is lit by at most one of the electron beams.
///
pub fn make_mask(mask_type: MaskType, width: usize, height: usize, zoom_factor: usize, channel_index: usize) -> Result<RgbaFrame<U8RgbaPixel>> {
    match mask_type {
        MaskType::Delta     => make_delta_mask(width, height, zoom_factor, channel_index),
        MaskType::Inline    => make_inline_mask(width, height, zoom_factor, channel_index),
    }
}
