mod channel_renderer;

pub use channel_renderer::*;
