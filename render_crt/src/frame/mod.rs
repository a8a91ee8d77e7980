mod frame_size;
mod rgba_frame;
mod rotate;

pub use frame_size::*;
pub use rgba_frame::*;
pub use rotate::*;
