use super::pixel_filter_trait::*;
use super::gaussian_blur_filter::*;

use crate::frame::*;
use crate::pixel::*;

///
/// Adds extra pixels to either side of a row by repeating the pixels at each end
///
fn pad_row<TPixel: Copy>(row: &[TPixel], add_left: usize, add_right: usize) -> Vec<TPixel> {
    let mut padded = Vec::with_capacity(row.len() + add_left + add_right);

    if let (Some(first), Some(last)) = (row.first(), row.last()) {
        padded.extend((0..add_left).map(|_| *first));
        padded.extend_from_slice(row);
        padded.extend((0..add_right).map(|_| *last));
    }

    padded
}

///
/// Generates one output line of a filtered frame from a set of padded input rows
///
#[inline]
fn filter_frame_line<TFilter>(filter: &TFilter, padded_rows: &[Vec<TFilter::Pixel>], y_pos: usize, output_line: &mut [TFilter::Pixel])
where
    TFilter: PixelFilter,
{
    let (add_above, add_below)  = filter.input_lines();
    let last_row                = padded_rows.len()-1;

    // Lines beyond the top or bottom of the frame repeat the edge lines
    let input_lines = (0..(add_above + 1 + add_below))
        .map(|offset| &*padded_rows[(y_pos + offset).saturating_sub(add_above).min(last_row)])
        .collect::<Vec<_>>();

    filter.filter_line(&input_lines, output_line);
}

#[cfg(not(feature="multithreading"))]
fn filter_frame_lines<TFilter>(filter: &TFilter, padded_rows: &[Vec<TFilter::Pixel>], width: usize, output: &mut [TFilter::Pixel])
where
    TFilter:        PixelFilter + Sync,
    TFilter::Pixel: Send + Sync,
{
    for (y_pos, output_line) in output.chunks_mut(width).enumerate() {
        filter_frame_line(filter, padded_rows, y_pos, output_line);
    }
}

#[cfg(feature="multithreading")]
fn filter_frame_lines<TFilter>(filter: &TFilter, padded_rows: &[Vec<TFilter::Pixel>], width: usize, output: &mut [TFilter::Pixel])
where
    TFilter:        PixelFilter + Sync,
    TFilter::Pixel: Send + Sync,
{
    use rayon::prelude::*;

    output.par_chunks_mut(width)
        .enumerate()
        .for_each(|(y_pos, output_line)| filter_frame_line(filter, padded_rows, y_pos, output_line));
}

///
/// Applies a pixel filter to every line of a frame, returning the filtered frame
///
pub fn filter_frame<TPixel, TFilter>(frame: &RgbaFrame<TPixel>, filter: &TFilter) -> RgbaFrame<TPixel>
where
    TPixel:     Copy + Default + Send + Sync,
    TFilter:    PixelFilter<Pixel=TPixel> + Sync,
{
    let width   = frame.width();
    let height  = frame.height();

    if width == 0 || height == 0 {
        return frame.clone();
    }

    let (add_left, add_right)   = filter.extra_columns();
    let padded_rows             = frame.rows().map(|row| pad_row(row, add_left, add_right)).collect::<Vec<_>>();
    let mut output              = RgbaFrame::new(width, height);

    filter_frame_lines(filter, &padded_rows, width, output.pixels_mut());

    output
}

///
/// Applies a gaussian blur with a particular radius to a frame
///
pub fn gaussian_blur(frame: &RgbaFrame<F32RgbaPixel>, radius: f64) -> RgbaFrame<F32RgbaPixel> {
    if !(radius > 0.0) {
        return frame.clone();
    }

    let horizontal  = HorizontalKernelFilter::<F32RgbaPixel, 4>::with_gaussian_blur_radius(radius);
    let vertical    = VerticalKernelFilter::<F32RgbaPixel, 4>::with_gaussian_blur_radius(radius);

    let blurred     = filter_frame(frame, &horizontal);
    filter_frame(&blurred, &vertical)
}

///
/// Blurs a single row of pixels horizontally
///
pub fn gaussian_blur_row(row: &[F32RgbaPixel], radius: f64) -> Vec<F32RgbaPixel> {
    if !(radius > 0.0) || row.is_empty() {
        return row.to_vec();
    }

    let horizontal      = HorizontalKernelFilter::<F32RgbaPixel, 4>::with_gaussian_blur_radius(radius);
    let (left, right)   = horizontal.extra_columns();
    let padded          = pad_row(row, left, right);
    let mut output      = vec![F32RgbaPixel::default(); row.len()];

    horizontal.filter_line(&[&padded[..]], &mut output);

    output
}
