mod options;
mod render;

#[cfg(feature = "image-io")]
mod run;

pub use options::*;
pub use render::*;

#[cfg(feature = "image-io")]
pub use run::*;
