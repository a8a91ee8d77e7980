use crate::error::*;
use crate::frame::*;

///
/// The sizes used when rendering an input image on to a CRT of a particular output width
///
/// These are all derived from the input image size and the requested output width.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrtGeometry {
    /// Width of the input image in pixels
    pub input_width: usize,

    /// Height of the input image in pixels
    pub input_height: usize,

    /// The number of output pixels used for each input pixel, in both directions
    pub zoom_factor: usize,

    /// The diameter of the electron beam, in output pixels
    pub beam_diameter: usize,

    /// Width of the output image in pixels (as requested, which might not be an exact multiple of the input width)
    pub output_width: usize,

    /// Height of the output image in pixels
    pub output_height: usize,
}

impl CrtGeometry {
    /// The number of samples the beam takes across its own diameter
    pub const SAMPLES_PER_BEAM: usize = 5;

    /// The smallest zoom factor that produces a beam diameter with at least one sample position
    pub const MIN_ZOOM_FACTOR: usize = 2*Self::SAMPLES_PER_BEAM;

    ///
    /// Works out the geometry for rendering an input image of a particular size to the specified output width
    ///
    pub fn new(input_width: usize, input_height: usize, output_width: usize) -> Result<CrtGeometry> {
        if input_width == 0 || input_height == 0 {
            return Err(CrtError::Geometry(format!("the input image is empty ({}x{})", input_width, input_height)));
        }

        if output_width < input_width {
            return Err(CrtError::Geometry(format!("the output width ({}) must be at least the input width ({})", output_width, input_width)));
        }

        let zoom_factor     = output_width / input_width;
        let beam_diameter   = zoom_factor / 2;

        if beam_diameter / Self::SAMPLES_PER_BEAM == 0 {
            return Err(CrtError::Geometry(format!("an output width of {} only magnifies a {} pixel wide image by {}: the magnification must be at least {} (an output width of at least {})", 
                output_width, input_width, zoom_factor, Self::MIN_ZOOM_FACTOR, input_width * Self::MIN_ZOOM_FACTOR)));
        }

        Ok(CrtGeometry {
            input_width:    input_width,
            input_height:   input_height,
            zoom_factor:    zoom_factor,
            beam_diameter:  beam_diameter,
            output_width:   output_width,
            output_height:  input_height * zoom_factor,
        })
    }

    ///
    /// The size of the output frame
    ///
    #[inline]
    pub fn output_size(&self) -> FrameSize {
        FrameSize { width: self.output_width, height: self.output_height }
    }

    ///
    /// The width and height of the spot the electron beam leaves on the phosphor
    ///
    #[inline]
    pub fn spot_size(&self) -> usize {
        self.beam_diameter * 3
    }

    ///
    /// The distance in output pixels between the positions where the beam is sampled along a row
    ///
    #[inline]
    pub fn beam_step(&self) -> usize {
        self.beam_diameter / Self::SAMPLES_PER_BEAM
    }

    ///
    /// The blur radius used to simulate the time the beam takes to change intensity
    ///
    #[inline]
    pub fn transition_blur_radius(&self) -> f64 {
        (self.zoom_factor as f64) * 0.1
    }
}
