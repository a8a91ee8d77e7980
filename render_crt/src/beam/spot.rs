use crate::error::*;
use crate::frame::*;
use crate::pixel::*;

/// The number of colour channels (and electron beams) in a colour CRT
pub const NUM_CHANNELS: usize = 3;

///
/// Returns a configuration error if a channel index does not refer to one of the colour channels
///
pub fn check_channel_index(channel_index: usize) -> Result<()> {
    if channel_index < NUM_CHANNELS {
        Ok(())
    } else {
        Err(CrtError::Configuration(format!("channel {} is not a colour channel", channel_index)))
    }
}

///
/// Makes a gaussian spot for an electron beam hitting the phosphor
///
/// The spot is a `size` x `size` frame. Every pixel is the pure colour for the channel (255 in that channel, 0 in the
/// others) and the alpha value carries the intensity: `floor(exp(-(5d/size)^2) * brightness)` where `d` is the distance
/// from the centre pixel. Pixels at a distance of `size/2` or more are left transparent.
///
pub fn make_spot(brightness: u8, channel_index: usize, size: usize) -> Result<RgbaFrame<U8RgbaPixel>> {
    check_channel_index(channel_index)?;

    let mut color           = [0u8, 0, 0, 0];
    color[channel_index]    = 255;

    let mut spot    = RgbaFrame::new(size, size);
    let center      = (size/2) as f64;
    let max_dist    = (size/2) as f64;

    for y in 0..size {
        for x in 0..size {
            // Distance from center of spot
            let dx      = x as f64 - center;
            let dy      = y as f64 - center;
            let dist    = (dx*dx + dy*dy).sqrt();

            if dist < max_dist {
                let normalized  = 5.0*dist/(size as f64);
                let alpha       = (-(normalized*normalized)).exp() * (brightness as f64);

                color[3] = alpha.floor() as u8;
                spot.set_pixel(x, y, U8RgbaPixel::from_components(color));
            }
        }
    }

    Ok(spot)
}
