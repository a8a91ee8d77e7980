use super::pixel_filter_trait::*;
use crate::pixel::*;

use std::marker::{PhantomData};

///
/// Filter that applies a one-dimensional kernel in the horizontal direction
///
pub struct HorizontalKernelFilter<TPixel, const N: usize>
where
    TPixel: Pixel<N>,
{
    /// Each pixel is multiplied by the values in the kernel, then summed. We only store half the kernel here, with the central pixel's proportion at the start
    kernel: Box<[TPixel::Component]>,
    pixel:  PhantomData<TPixel>,
}

///
/// Filter that applies a one-dimensional kernel in the vertical direction
///
pub struct VerticalKernelFilter<TPixel, const N: usize>
where
    TPixel: Pixel<N>,
{
    /// Each pixel is multiplied by the values in the kernel, then summed. We only store half the kernel here, with the central pixel's proportion at the start
    kernel: Box<[TPixel::Component]>,
    pixel:  PhantomData<TPixel>,
}

///
/// Calculates half of a normalised gaussian kernel for a blur radius
///
/// The kernel covers `ceil(radius)` pixels either side of the central pixel, and uses a sigma of `radius/2`. A radius of 0 
/// (or less) produces a kernel that leaves the image unchanged.
///
pub fn gaussian_kernel(radius: f64) -> Vec<f32> {
    if !(radius > 0.0) {
        return vec![1.0];
    }

    let half_len    = radius.ceil() as usize;
    let sigma       = radius / 2.0;
    let weights     = (0..=half_len)
        .map(|offset| {
            let offset = offset as f64;
            (-(offset*offset) / (2.0*sigma*sigma)).exp()
        })
        .collect::<Vec<_>>();

    // Every weight apart from the central one is used twice
    let total = weights[0] + 2.0 * weights[1..].iter().sum::<f64>();

    weights.into_iter().map(|weight| (weight / total) as f32).collect()
}

impl<TPixel, const N: usize> HorizontalKernelFilter<TPixel, N>
where
    TPixel: Pixel<N, Component=f32>,
{
    ///
    /// Creates a horizontal gaussian blur filter with the specified radius
    ///
    pub fn with_gaussian_blur_radius(radius: f64) -> Self {
        HorizontalKernelFilter {
            kernel: gaussian_kernel(radius).into_boxed_slice(),
            pixel:  PhantomData,
        }
    }
}

impl<TPixel, const N: usize> VerticalKernelFilter<TPixel, N>
where
    TPixel: Pixel<N, Component=f32>,
{
    ///
    /// Creates a vertical gaussian blur filter with the specified radius
    ///
    pub fn with_gaussian_blur_radius(radius: f64) -> Self {
        VerticalKernelFilter {
            kernel: gaussian_kernel(radius).into_boxed_slice(),
            pixel:  PhantomData,
        }
    }
}

impl<TPixel, const N: usize> PixelFilter for HorizontalKernelFilter<TPixel, N>
where
    TPixel: Pixel<N>,
{
    type Pixel = TPixel;

    #[inline]
    fn input_lines(&self) -> (usize, usize) {
        (0, 0)
    }

    #[inline]
    fn extra_columns(&self) -> (usize, usize) {
        (self.kernel.len()-1, self.kernel.len()-1)
    }

    fn filter_line(&self, input_lines: &[&[Self::Pixel]], output_line: &mut [Self::Pixel]) {
        let input_line  = input_lines[0];
        let kernel      = &self.kernel;
        let kernel_len  = kernel.len();

        for idx in (kernel_len-1)..(input_line.len()-(kernel_len-1)) {
            let mut pixel = input_line[idx] * kernel[0];

            for kern_idx in 1..kernel_len {
                let kernel_val = kernel[kern_idx];

                pixel = pixel + (input_line[idx + kern_idx] * kernel_val) + (input_line[idx - kern_idx] * kernel_val);
            }

            output_line[idx - (kernel_len-1)] = pixel;
        }
    }
}

impl<TPixel, const N: usize> PixelFilter for VerticalKernelFilter<TPixel, N>
where
    TPixel: Pixel<N>,
{
    type Pixel = TPixel;

    fn input_lines(&self) -> (usize, usize) {
        (self.kernel.len()-1, self.kernel.len()-1)
    }

    fn extra_columns(&self) -> (usize, usize) {
        (0, 0)
    }

    fn filter_line(&self, input_lines: &[&[Self::Pixel]], output_line: &mut [Self::Pixel]) {
        let kernel      = &self.kernel;
        let kernel_len  = kernel.len();
        let mid_pos     = kernel_len-1;

        for idx in 0..output_line.len() {
            let mut pixel = input_lines[mid_pos][idx] * kernel[0];

            for kern_idx in 1..kernel_len {
                let kernel_val = kernel[kern_idx];

                pixel = pixel + (input_lines[mid_pos+kern_idx][idx] * kernel_val) + (input_lines[mid_pos-kern_idx][idx] * kernel_val);
            }

            output_line[idx] = pixel;
        }
    }
}
