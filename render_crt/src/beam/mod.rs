mod spot;
mod spot_cache;

pub use spot::*;
pub use spot_cache::*;
