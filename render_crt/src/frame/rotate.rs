use super::rgba_frame::*;

///
/// Rotates a frame clockwise by 90 degrees
///
/// The top-left pixel of the source ends up in the top-right corner of the result.
///
pub fn rotate_right<TPixel: Copy + Default>(frame: &RgbaFrame<TPixel>) -> RgbaFrame<TPixel> {
    let width       = frame.width();
    let height      = frame.height();
    let mut rotated = RgbaFrame::new(height, width);

    for y in 0..height {
        for x in 0..width {
            rotated.set_pixel(height-1-y, x, frame.pixel(x, y));
        }
    }

    rotated
}

///
/// Rotates a frame anticlockwise by 90 degrees (undoing `rotate_right()`)
///
pub fn rotate_left<TPixel: Copy + Default>(frame: &RgbaFrame<TPixel>) -> RgbaFrame<TPixel> {
    let width       = frame.width();
    let height      = frame.height();
    let mut rotated = RgbaFrame::new(height, width);

    for y in 0..height {
        for x in 0..width {
            rotated.set_pixel(y, width-1-x, frame.pixel(x, y));
        }
    }

    rotated
}
