//!
//! # flo_render_crt
//!
//! Renders a small bitmap as it would appear on a colour CRT fitted with a shadow mask. Each colour channel is drawn as
//! a series of gaussian electron beam spots, clipped through the holes in the mask for that channel, and then the three
//! channels are combined and given a bloom effect.
//!
//! The main entry point is `render_crt()`, which works entirely in memory. `run_pipeline()` (available with the `image-io`
//! feature) also loads the input image and saves the result.
//!

mod error;
mod geometry;

/// A pixel models a single colour sample, either as 8-bit storage or as a premultiplied floating-point value used while rendering
pub mod pixel;

/// A frame is a rectangular buffer of pixels
pub mod frame;

/// Filters that are applied to whole frames (blurring, clipping and blending)
pub mod filters;

/// The electron beam: gaussian spots that are stamped where the beam hits the phosphor
pub mod beam;

/// Generates the mask images for the delta and inline shadow mask types
pub mod shadow_mask;

/// Renders a single colour channel of the input image through its shadow mask
pub mod channel;

/// Combines the rendered channels and adds bloom
pub mod compose;

/// Runs the whole rendering process
pub mod pipeline;

#[cfg(feature = "image-io")]
mod image_io;

pub use error::*;
pub use geometry::*;
pub use pipeline::{render_crt, ShadowMaskOptions};
pub use shadow_mask::MaskType;

#[cfg(feature = "image-io")]
pub use image_io::*;
#[cfg(feature = "image-io")]
pub use pipeline::{run_pipeline, save_masks};
