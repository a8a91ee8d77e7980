use super::options::*;
use super::render::*;

use crate::beam::*;
use crate::error::*;
use crate::frame::*;
use crate::geometry::*;
use crate::image_io::*;
use crate::pixel::*;
use crate::shadow_mask::*;

use tracing::{info};

use std::path::{Path};

///
/// Loads an image, renders it as a CRT and saves the result
///
/// Nothing is written if loading or rendering fails. If saving fails part way through, the output file may be left
/// incomplete.
///
pub fn run_pipeline(input_path: impl AsRef<Path>, output_path: impl AsRef<Path>, options: &ShadowMaskOptions) -> Result<()> {
    let input_path  = input_path.as_ref();
    let output_path = output_path.as_ref();

    info!(path = %input_path.display(), "Loading input image");
    let input_image = load_image(input_path)?;

    let output_image = render_crt(&input_image, options)?;

    info!(path = %output_path.display(), width = output_image.width(), height = output_image.height(), "Saving output image");
    save_image(&output_image, output_path)
}

///
/// Writes the shadow mask for each channel to `mask0.png`, `mask1.png` and `mask2.png` in a directory
///
/// The masks are the ones that rendering `input` with `options` would use. They're in the orientation used for rendering,
/// so they're not rotated back for a portrait CRT.
///
pub fn save_masks(input: &RgbaFrame<U8RgbaPixel>, options: &ShadowMaskOptions, directory: impl AsRef<Path>) -> Result<()> {
    let directory   = directory.as_ref();
    let input_size  = if options.portrait { input.size().rotated() } else { input.size() };
    let geometry    = CrtGeometry::new(input_size.width, input_size.height, options.output_width)?;

    for channel_index in 0..NUM_CHANNELS {
        let mask        = make_mask(options.mask_type, geometry.output_width, geometry.output_height, geometry.zoom_factor, channel_index)?;
        let mask_path   = directory.join(format!("mask{}.png", channel_index));

        info!(path = %mask_path.display(), "Saving shadow mask");
        save_image(&mask, &mask_path)?;
    }

    Ok(())
}
