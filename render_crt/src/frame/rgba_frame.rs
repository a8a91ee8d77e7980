use super::frame_size::*;

use crate::error::*;
use crate::pixel::*;

///
/// A rectangular frame of pixels, stored a row at a time from the top-left corner
///
/// Frames are owned by the stage of the renderer that creates them and are passed on by value.
///
#[derive(Clone, Debug, PartialEq)]
pub struct RgbaFrame<TPixel> {
    width:      usize,
    height:     usize,
    pixels:     Vec<TPixel>,
}

impl<TPixel> RgbaFrame<TPixel>
where
    TPixel: Copy,
{
    ///
    /// Creates a frame where every pixel is set to the same value
    ///
    pub fn filled(width: usize, height: usize, pixel: TPixel) -> Self {
        RgbaFrame {
            width:  width,
            height: height,
            pixels: vec![pixel; width*height],
        }
    }

    ///
    /// Creates a frame from a buffer of pixels (returns an error if the buffer is not the right size)
    ///
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<TPixel>) -> Result<Self> {
        if pixels.len() != width*height {
            Err(CrtError::Geometry(format!("a {}x{} frame needs {} pixels but {} were supplied", width, height, width*height, pixels.len())))
        } else {
            Ok(RgbaFrame { width, height, pixels })
        }
    }

    #[inline]
    pub fn width(&self) -> usize { self.width }

    #[inline]
    pub fn height(&self) -> usize { self.height }

    #[inline]
    pub fn size(&self) -> FrameSize {
        FrameSize { width: self.width, height: self.height }
    }

    ///
    /// Reads the pixel at a particular position
    ///
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> TPixel {
        self.pixels[y*self.width + x]
    }

    ///
    /// Changes the pixel at a particular position
    ///
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: TPixel) {
        self.pixels[y*self.width + x] = pixel;
    }

    ///
    /// The pixels in a single row of this frame
    ///
    #[inline]
    pub fn row(&self, y: usize) -> &[TPixel] {
        let start = y*self.width;
        &self.pixels[start..(start+self.width)]
    }

    ///
    /// The pixels in a single row of this frame, for updating
    ///
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [TPixel] {
        let start = y*self.width;
        &mut self.pixels[start..(start+self.width)]
    }

    ///
    /// Iterates over the rows of this frame from top to bottom
    ///
    pub fn rows(&self) -> impl '_ + Iterator<Item=&[TPixel]> {
        // A zero-width frame has no pixels, so any chunk size will produce no rows
        self.pixels.chunks_exact(self.width.max(1))
    }

    ///
    /// All of the pixels in this frame, in row order
    ///
    #[inline]
    pub fn pixels(&self) -> &[TPixel] {
        &self.pixels
    }

    ///
    /// All of the pixels in this frame, for updating
    ///
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [TPixel] {
        &mut self.pixels
    }

    ///
    /// Converts every pixel in this frame to a new format
    ///
    pub fn map<TTarget>(&self, convert: impl Fn(TPixel) -> TTarget) -> RgbaFrame<TTarget> {
        RgbaFrame {
            width:  self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|pixel| convert(*pixel)).collect(),
        }
    }
}

impl<TPixel> RgbaFrame<TPixel>
where
    TPixel: Copy + Default,
{
    ///
    /// Creates a new frame with every pixel set to the default value (transparent for the pixel types in this crate)
    ///
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, TPixel::default())
    }
}

impl RgbaFrame<U8RgbaPixel> {
    ///
    /// Converts an 8-bit frame into a frame that can be used for rendering
    ///
    pub fn to_f32(&self) -> RgbaFrame<F32RgbaPixel> {
        self.map(F32RgbaPixel::from_u8)
    }

    ///
    /// True if every pixel in this frame is fully opaque
    ///
    pub fn is_opaque(&self) -> bool {
        self.pixels.iter().all(|pixel| pixel.is_opaque())
    }

    ///
    /// The pixels in this frame as a series of R, G, B, A bytes
    ///
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.to_rgba_u8_slice()
    }
}

impl RgbaFrame<F32RgbaPixel> {
    ///
    /// Converts a rendered frame to the 8-bit format
    ///
    pub fn to_u8(&self) -> RgbaFrame<U8RgbaPixel> {
        self.map(|pixel| pixel.to_u8())
    }
}
