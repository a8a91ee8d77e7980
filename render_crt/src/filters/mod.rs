mod pixel_filter_trait;
mod frame_filter;
mod gaussian_blur_filter;
mod mask_filter;
mod screen_blend_filter;

pub use pixel_filter_trait::*;
pub use frame_filter::*;
pub use gaussian_blur_filter::*;
pub use mask_filter::*;
pub use screen_blend_filter::*;
