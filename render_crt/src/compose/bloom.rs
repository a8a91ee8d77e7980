use crate::error::*;
use crate::filters::*;
use crate::frame::*;
use crate::pixel::*;

use tracing::{debug};

///
/// Adds bloom to a composed image
///
/// The image is blurred twice: slightly, to soften the edges of the phosphor dots, and widely (by a quarter of the zoom
/// factor) to simulate light spreading from the bright areas. The wide blur is then screened on top of the slight one.
///
pub fn bloom(color_image: &RgbaFrame<F32RgbaPixel>, zoom_factor: usize) -> Result<RgbaFrame<U8RgbaPixel>> {
    let wide_radius = (zoom_factor / 4) as f64;

    debug!(sharp_radius = 1.0, wide_radius = wide_radius, "Adding bloom");

    let sharp   = gaussian_blur(color_image, 1.0).to_u8();
    let wide    = gaussian_blur(color_image, wide_radius).to_u8();

    screen_blend(&sharp, &wide)
}
