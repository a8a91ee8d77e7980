use crate::shadow_mask::*;

///
/// The settings for converting an image into a picture of a CRT
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShadowMaskOptions {
    /// The width of the rendered image in pixels (before any rotation for a portrait CRT)
    pub output_width: usize,

    /// The layout of the holes in the shadow mask
    pub mask_type: MaskType,

    /// True if the CRT is mounted in portrait orientation
    pub portrait: bool,
}

impl ShadowMaskOptions {
    ///
    /// Creates the default options for a particular output width (a landscape delta mask CRT)
    ///
    pub fn new(output_width: usize) -> ShadowMaskOptions {
        ShadowMaskOptions {
            output_width:   output_width,
            mask_type:      MaskType::default(),
            portrait:       false,
        }
    }

    ///
    /// Changes the mask type in these options
    ///
    pub fn with_mask_type(self, mask_type: MaskType) -> ShadowMaskOptions {
        ShadowMaskOptions { mask_type, ..self }
    }

    ///
    /// Changes the orientation of the CRT
    ///
    pub fn with_portrait(self, portrait: bool) -> ShadowMaskOptions {
        ShadowMaskOptions { portrait, ..self }
    }
}
