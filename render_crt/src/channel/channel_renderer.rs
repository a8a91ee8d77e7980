use crate::beam::*;
use crate::error::*;
use crate::filters::*;
use crate::frame::*;
use crate::geometry::*;
use crate::pixel::*;
use crate::shadow_mask::*;

use tracing::{debug, trace};

///
/// Stretches a row of the input image to the output width, using the nearest input pixel for each output pixel
///
/// The beam is driven by the colour values alone, so the stretched row is opaque whatever the alpha of the input.
///
pub fn stretch_row(input: &RgbaFrame<U8RgbaPixel>, source_y: usize, geometry: &CrtGeometry) -> Vec<F32RgbaPixel> {
    let input_width = input.width();
    let row         = input.row(source_y);

    (0..geometry.output_width)
        .map(|dx| {
            let [r, g, b, _] = row[(dx/geometry.zoom_factor).min(input_width-1)].get_components();
            F32RgbaPixel::from_u8(U8RgbaPixel::from_components([r, g, b, 255]))
        })
        .collect()
}

///
/// Draws a spot on to a frame with its top-left corner at the specified position (parts of the spot outside the frame are clipped)
///
pub fn stamp_spot(target: &mut RgbaFrame<F32RgbaPixel>, spot: &RgbaFrame<U8RgbaPixel>, x: i64, y: i64) {
    let target_width    = target.width() as i64;
    let target_height   = target.height() as i64;

    for (spot_y, spot_row) in spot.rows().enumerate() {
        let ypos = y + spot_y as i64;
        if ypos < 0 || ypos >= target_height { continue; }

        let target_row = target.row_mut(ypos as usize);

        for (spot_x, spot_pixel) in spot_row.iter().enumerate() {
            let xpos = x + spot_x as i64;
            if xpos < 0 || xpos >= target_width { continue; }
            if spot_pixel.alpha() == 0 { continue; }

            let target_pixel    = &mut target_row[xpos as usize];
            *target_pixel       = F32RgbaPixel::from_u8(*spot_pixel).source_over(*target_pixel);
        }
    }
}

///
/// Draws the electron beam spots for one channel of the input image, before the shadow mask is applied
///
/// The result is an opaque frame of the output size, black except where the beam has hit.
///
pub fn stamp_channel(input: &RgbaFrame<U8RgbaPixel>, channel_index: usize, geometry: &CrtGeometry, spot_cache: &mut SpotCache) -> Result<RgbaFrame<F32RgbaPixel>> {
    check_channel_index(channel_index)?;

    let zoom_factor     = geometry.zoom_factor as i64;
    let spot_size       = spot_cache.size() as i64;
    let beam_step       = geometry.beam_step().max(1);
    let mut color_image = RgbaFrame::filled(geometry.output_width, geometry.output_height, F32RgbaPixel::black());

    for source_y in 0..input.height() {
        trace!(channel = channel_index, row = source_y, "Stamping row");

        // Blur the stretched row a bit to simulate slow transitions between colour values
        let stretched   = stretch_row(input, source_y, geometry);
        let stretched   = gaussian_blur_row(&stretched, geometry.transition_blur_radius());
        let spot_y      = (source_y as i64)*zoom_factor + zoom_factor/2 - spot_size/2;

        // Draw an electron beam hit every few pixels
        for dx in (0..geometry.output_width).step_by(beam_step) {
            let channel_value = stretched[dx].to_u8().channel(channel_index);

            if channel_value != 0 {
                let spot = spot_cache.get_spot(channel_index, channel_value)?;
                stamp_spot(&mut color_image, spot, (dx as i64) - spot_size/2, spot_y);
            }
        }
    }

    Ok(color_image)
}

///
/// Renders a single channel of the input image: the beam spots for that channel, clipped to the holes in the shadow mask
///
/// Pixels outside the mask holes are transparent in the result.
///
pub fn render_channel(input: &RgbaFrame<U8RgbaPixel>, channel_index: usize, geometry: &CrtGeometry, mask_type: MaskType) -> Result<RgbaFrame<F32RgbaPixel>> {
    check_channel_index(channel_index)?;

    if input.width() != geometry.input_width || input.height() != geometry.input_height {
        return Err(CrtError::Geometry(format!("the geometry is for a {}x{} image but the input is {}x{}", geometry.input_width, geometry.input_height, input.width(), input.height())));
    }

    let mut spot_cache  = SpotCache::new(geometry.spot_size());
    let color_image     = stamp_channel(input, channel_index, geometry, &mut spot_cache)?;

    debug!(channel = channel_index, spots = spot_cache.len(), "Stamped beam spots");

    let mask_image      = make_mask(mask_type, geometry.output_width, geometry.output_height, geometry.zoom_factor, channel_index)?;
    clip_to_mask(&color_image, &mask_image)
}
