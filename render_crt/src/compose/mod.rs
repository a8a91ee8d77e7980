mod compositor;
mod bloom;

pub use compositor::*;
pub use bloom::*;
