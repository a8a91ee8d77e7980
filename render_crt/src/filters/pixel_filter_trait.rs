///
/// A pixel filter implements a filter algorithm that can be applied to pixels one line at a time
///
pub trait PixelFilter {
    /// The type of the pixel that the filter accepts
    type Pixel : Send;

    ///
    /// Retrieves the number of extra lines that are required to produce a single output line (above and below)
    ///
    /// The result here is the number of lines above the current line and the number of lines below the current line that are required.
    /// The 'current' line is always supplied to the filter.
    ///
    fn input_lines(&self) -> (usize, usize);

    ///
    /// Retrieves the number of extra columns that are needed as input (left and right)
    ///
    /// The sum of these values will be added to the length of each input line.
    ///
    fn extra_columns(&self) -> (usize, usize);

    ///
    /// Filters a single line of pixels. Lines and columns outside of the source frame repeat the pixels at the edge
    /// of the frame.
    ///
    fn filter_line(&self, input_lines: &[&[Self::Pixel]], output_line: &mut [Self::Pixel]);
}
