use super::alpha_blend_trait::*;
use super::pixel_trait::*;
use super::u8_rgba::*;

use wide::*;

use std::ops::*;

///
/// A pixel using floating-point components from 0.0 to 1.0, with the alpha value pre-multiplied
///
/// This is the working format for the renderer: spots are stamped, clipped and blurred in this format, and it's only
/// converted back to `U8RgbaPixel` for the final blend and for saving.
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct F32RgbaPixel(f32x4);

impl Default for F32RgbaPixel {
    #[inline]
    fn default() -> Self {
        F32RgbaPixel(f32x4::splat(0.0))
    }
}

impl F32RgbaPixel {
    ///
    /// Converts an 8-bit pixel (which does not have a premultiplied alpha) to a floating point pixel
    ///
    #[inline]
    pub fn from_u8(pixel: U8RgbaPixel) -> F32RgbaPixel {
        let [r, g, b, a]    = pixel.get_components();
        let alpha           = (a as f32)/255.0;
        let rgba            = f32x4::new([r as f32, g as f32, b as f32, 255.0]) * (1.0/255.0);

        F32RgbaPixel(rgba * alpha)
    }

    ///
    /// Converts this pixel back to an 8-bit pixel, removing the premultiplication
    ///
    pub fn to_u8(&self) -> U8RgbaPixel {
        let rgba    = self.0.min(f32x4::ONE).max(f32x4::ZERO);
        let alpha   = rgba.as_array_ref()[3];

        if alpha <= 0.0 {
            return U8RgbaPixel::TRANSPARENT;
        }

        let rgba            = rgba / f32x4::new([alpha, alpha, alpha, 1.0]);
        let rgba            = rgba.min(f32x4::ONE) * 255.0;
        let [r, g, b, a]    = rgba.to_array();

        U8RgbaPixel::from_components([r.round() as u8, g.round() as u8, b.round() as u8, a.round() as u8])
    }
}

impl Pixel<4> for F32RgbaPixel {
    type Component = f32;

    #[inline]
    fn black() -> F32RgbaPixel {
        F32RgbaPixel(f32x4::new([0.0, 0.0, 0.0, 1.0]))
    }

    #[inline]
    fn white() -> F32RgbaPixel {
        F32RgbaPixel(f32x4::new([1.0, 1.0, 1.0, 1.0]))
    }

    #[inline]
    fn from_components(components: [f32; 4]) -> Self {
        F32RgbaPixel(f32x4::new(components))
    }

    #[inline]
    fn to_components(&self) -> [f32; 4] {
        self.0.to_array()
    }
}

impl AlphaBlend for F32RgbaPixel {
    #[inline]
    fn source_over(self, dest: Self) -> Self {
        let src_alpha = self.0.as_array_ref()[3];
        F32RgbaPixel(self.0 + dest.0*(1.0-src_alpha))
    }

    #[inline]
    fn source_in(self, dest: Self) -> Self {
        let dst_alpha = dest.0.as_array_ref()[3];
        F32RgbaPixel(self.0*dst_alpha)
    }
}

impl Add<F32RgbaPixel> for F32RgbaPixel {
    type Output=F32RgbaPixel;

    #[inline]
    fn add(self, val: F32RgbaPixel) -> F32RgbaPixel {
        F32RgbaPixel(self.0 + val.0)
    }
}

impl Sub<F32RgbaPixel> for F32RgbaPixel {
    type Output=F32RgbaPixel;

    #[inline]
    fn sub(self, val: F32RgbaPixel) -> F32RgbaPixel {
        F32RgbaPixel(self.0 - val.0)
    }
}

impl Mul<f32> for F32RgbaPixel {
    type Output=F32RgbaPixel;

    #[inline]
    fn mul(self, val: f32) -> F32RgbaPixel {
        F32RgbaPixel(self.0 * val)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn close(a: F32RgbaPixel, b: [f32; 4]) -> bool {
        a.to_components().iter().zip(b.iter()).all(|(a, b)| (a-b).abs() < 0.0001)
    }

    #[test]
    fn u8_conversion_is_premultiplied() {
        let pixel = F32RgbaPixel::from_u8(U8RgbaPixel::from_components([255, 0, 255, 51]));

        assert!(close(pixel, [0.2, 0.0, 0.2, 0.2]), "{:?}", pixel);
    }

    #[test]
    fn u8_round_trip() {
        for val in 0..=255u8 {
            let original = U8RgbaPixel::from_components([val, 255-val, val/2, 255]);

            assert!(F32RgbaPixel::from_u8(original).to_u8() == original);
        }
    }

    #[test]
    fn transparent_converts_to_transparent() {
        assert!(F32RgbaPixel::default().to_u8() == U8RgbaPixel::TRANSPARENT);
    }

    #[test]
    fn spot_over_black_keeps_alpha_as_intensity() {
        // A spot pixel is a pure colour where the alpha carries the brightness
        for brightness in 0..=255u8 {
            let spot    = F32RgbaPixel::from_u8(U8RgbaPixel::from_components([0, 255, 0, brightness]));
            let result  = spot.source_over(F32RgbaPixel::black()).to_u8();

            assert!(result == U8RgbaPixel::from_components([0, brightness, 0, 255]), "{} -> {:?}", brightness, result);
        }
    }

    #[test]
    fn source_over_partial_alpha() {
        let src = F32RgbaPixel::from_components([0.1, 0.2, 0.3, 0.5]);
        let dst = F32RgbaPixel::from_components([0.4, 0.3, 0.2, 0.8]);

        assert!(close(src.source_over(dst), [0.3, 0.35, 0.4, 0.9]));
    }

    #[test]
    fn source_in_uses_dest_alpha() {
        let src = F32RgbaPixel::from_components([0.5, 0.25, 0.0, 1.0]);

        assert!(close(src.source_in(F32RgbaPixel::white()), [0.5, 0.25, 0.0, 1.0]));
        assert!(close(src.source_in(F32RgbaPixel::default()), [0.0, 0.0, 0.0, 0.0]));
    }
}
