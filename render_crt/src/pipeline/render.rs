use super::options::*;

use crate::beam::*;
use crate::channel::*;
use crate::compose::*;
use crate::error::*;
use crate::frame::*;
use crate::geometry::*;
use crate::pixel::*;
use crate::shadow_mask::*;

use tracing::{info};

#[cfg(not(feature="multithreading"))]
fn render_channels(input: &RgbaFrame<U8RgbaPixel>, geometry: &CrtGeometry, mask_type: MaskType) -> Result<Vec<RgbaFrame<F32RgbaPixel>>> {
    (0..NUM_CHANNELS)
        .map(|channel_index| render_channel(input, channel_index, geometry, mask_type))
        .collect()
}

#[cfg(feature="multithreading")]
fn render_channels(input: &RgbaFrame<U8RgbaPixel>, geometry: &CrtGeometry, mask_type: MaskType) -> Result<Vec<RgbaFrame<F32RgbaPixel>>> {
    use rayon::prelude::*;

    // Channels share nothing but the input image (each has its own spot cache)
    (0..NUM_CHANNELS).into_par_iter()
        .map(|channel_index| render_channel(input, channel_index, geometry, mask_type))
        .collect()
}

///
/// Renders an image as it would appear on a CRT with a shadow mask
///
/// For a portrait CRT, the image is rotated to the right before rendering (so `output_width` applies to the rotated image),
/// and the result is rotated back to the left afterwards.
///
pub fn render_crt(input: &RgbaFrame<U8RgbaPixel>, options: &ShadowMaskOptions) -> Result<RgbaFrame<U8RgbaPixel>> {
    let rotated;
    let input = if options.portrait {
        // Pre-rotate the portrait setup
        rotated = rotate_right(input);
        &rotated
    } else {
        input
    };

    let geometry = CrtGeometry::new(input.width(), input.height(), options.output_width)?;

    info!(mask_type = %options.mask_type, zoom_factor = geometry.zoom_factor, beam_diameter = geometry.beam_diameter, 
        output_width = geometry.output_width, output_height = geometry.output_height, "Rendering CRT image");

    let channels = render_channels(input, &geometry, options.mask_type)?;

    info!("Composing channels");
    let color_image = compose(&channels[0], &channels[1], &channels[2])?;
    let output      = bloom(&color_image, geometry.zoom_factor)?;

    if options.portrait {
        Ok(rotate_left(&output))
    } else {
        Ok(output)
    }
}
