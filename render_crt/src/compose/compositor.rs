use crate::error::*;
use crate::frame::*;
use crate::pixel::*;

///
/// Combines the three rendered channels into a single opaque colour image
///
/// Each channel is drawn over a black background in turn. The channels are clipped to shadow mask holes that don't
/// overlap, so in practice every pixel comes from at most one channel.
///
pub fn compose(red: &RgbaFrame<F32RgbaPixel>, green: &RgbaFrame<F32RgbaPixel>, blue: &RgbaFrame<F32RgbaPixel>) -> Result<RgbaFrame<F32RgbaPixel>> {
    let size = red.size();

    if green.size() != size || blue.size() != size {
        return Err(CrtError::Geometry(format!("cannot compose channels of different sizes ({:?}, {:?}, {:?})", red.size(), green.size(), blue.size())));
    }

    let mut color_image = RgbaFrame::filled(size.width, size.height, F32RgbaPixel::black());

    for channel in [red, green, blue].iter() {
        for (target, source) in color_image.pixels_mut().iter_mut().zip(channel.pixels().iter()) {
            *target = source.source_over(*target);
        }
    }

    Ok(color_image)
}
