use std::slice;

///
/// An RGBA pixel as a set of u8 values
///
/// This is the storage format for images that are loaded, saved or used as masks. The alpha value is not
/// pre-multiplied into the colour values: it's the same layout as a decoded 8-bit RGBA image.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct U8RgbaPixel([u8; 4]);

impl U8RgbaPixel {
    /// A pixel with no colour and no opacity
    pub const TRANSPARENT: U8RgbaPixel = U8RgbaPixel([0, 0, 0, 0]);

    /// Opaque black
    pub const BLACK: U8RgbaPixel = U8RgbaPixel([0, 0, 0, 255]);

    /// Opaque white
    pub const WHITE: U8RgbaPixel = U8RgbaPixel([255, 255, 255, 255]);

    ///
    /// Creates a new U8 pixel from the component bytes
    ///
    #[inline]
    pub const fn from_components(components: [u8; 4]) -> Self {
        U8RgbaPixel(components)
    }

    ///
    /// Retrieves the RGBA values from this pixel
    ///
    #[inline]
    pub fn get_components(&self) -> [u8; 4] {
        self.0
    }

    ///
    /// Reads one of the colour channels (0 = red, 1 = green, 2 = blue, 3 = alpha)
    ///
    #[inline]
    pub fn channel(&self, channel_index: usize) -> u8 {
        self.0[channel_index]
    }

    #[inline]
    pub fn alpha(&self) -> u8 {
        self.0[3]
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.0[3] == 255
    }
}

impl Default for U8RgbaPixel {
    #[inline]
    fn default() -> Self {
        U8RgbaPixel::TRANSPARENT
    }
}

pub trait ToRgbaU8Slice {
    /// Returns the pixels as a single slice of u8 values
    fn to_rgba_u8_slice(&self) -> &[u8];
}

pub trait ToRgbaPixels {
    /// Converts a slice of `u8` values to a slice of U8RgbaPixels
    ///
    /// If the slice is not a multiple of 4, then no pixels are generated at the end
    fn to_rgba_slice(&self) -> &[U8RgbaPixel];
}

impl ToRgbaU8Slice for [U8RgbaPixel] {
    #[inline]
    fn to_rgba_u8_slice(&self) -> &[u8] {
        // U8RgbaPixel is repr(C) around [u8; 4], so it has the same layout as 4 bytes
        unsafe {
            let len     = self.len();
            let data    = self.as_ptr();
            let data    = data as *const u8;

            slice::from_raw_parts(data, len*4)
        }
    }
}

impl ToRgbaPixels for [u8] {
    #[inline]
    fn to_rgba_slice(&self) -> &[U8RgbaPixel] {
        unsafe {
            let len     = self.len();
            let data    = self.as_ptr();
            let data    = data as *const U8RgbaPixel;

            slice::from_raw_parts(data, len/4)
        }
    }
}
