use crate::frame::*;

///
/// Returns the range of pixels whose centres might lie within a span (clipped to the frame)
///
#[inline]
fn pixel_range(start: f64, length: f64, limit: usize) -> std::ops::Range<usize> {
    let first   = (start - 0.5).ceil().max(0.0);
    let last    = (start + length - 0.5).ceil().max(0.0).min(limit as f64);

    (first as usize)..(last as usize).max(first as usize)
}

///
/// Fills a circle whose bounding box has its top-left corner at `(x, y)`
///
/// A pixel is filled if its centre is inside the circle, so there's no antialiasing: the result is suitable for use as a mask.
///
pub fn fill_circle<TPixel: Copy>(frame: &mut RgbaFrame<TPixel>, x: f64, y: f64, diameter: f64, pixel: TPixel) {
    let radius      = diameter / 2.0;
    let center_x    = x + radius;
    let center_y    = y + radius;

    for ypos in pixel_range(y, diameter, frame.height()) {
        let dy = (ypos as f64) + 0.5 - center_y;

        for xpos in pixel_range(x, diameter, frame.width()) {
            let dx = (xpos as f64) + 0.5 - center_x;

            if dx*dx + dy*dy < radius*radius {
                frame.set_pixel(xpos, ypos, pixel);
            }
        }
    }
}

///
/// Fills a rectangle with rounded corners, with its top-left corner at `(x, y)`
///
/// The corner radius is limited to half the width or height of the rectangle, so a large radius produces a slot with
/// fully rounded ends.
///
pub fn fill_rounded_rect<TPixel: Copy>(frame: &mut RgbaFrame<TPixel>, x: f64, y: f64, width: f64, height: f64, corner_radius: f64, pixel: TPixel) {
    let radius = corner_radius.min(width/2.0).min(height/2.0).max(0.0);

    for ypos in pixel_range(y, height, frame.height()) {
        let py          = (ypos as f64) + 0.5;
        let nearest_y   = py.max(y + radius).min(y + height - radius);
        let dy          = py - nearest_y;

        for xpos in pixel_range(x, width, frame.width()) {
            let px          = (xpos as f64) + 0.5;
            let nearest_x   = px.max(x + radius).min(x + width - radius);
            let dx          = px - nearest_x;

            // Inside if within the radius of the nearest point on the inner rectangle
            if dx*dx + dy*dy <= radius*radius {
                frame.set_pixel(xpos, ypos, pixel);
            }
        }
    }
}
