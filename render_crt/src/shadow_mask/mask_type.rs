use crate::error::*;

use std::fmt;
use std::str::{FromStr};

///
/// The layout of the holes in the shadow mask
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaskType {
    /// Round holes arranged in triangles (triads) of red, green and blue dots
    Delta,

    /// Vertical slots with the red, green and blue phosphors side-by-side (as in a Porta-Color tube)
    Inline,
}

impl Default for MaskType {
    fn default() -> Self {
        MaskType::Delta
    }
}

impl FromStr for MaskType {
    type Err = CrtError;

    fn from_str(name: &str) -> Result<MaskType> {
        match name.trim().to_ascii_uppercase().as_str() {
            "DELTA"     => Ok(MaskType::Delta),
            "INLINE"    => Ok(MaskType::Inline),
            _           => Err(CrtError::Configuration(format!("unknown shadow mask type '{}' (expected DELTA or INLINE)", name))),
        }
    }
}

impl fmt::Display for MaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskType::Delta     => write!(f, "DELTA"),
            MaskType::Inline    => write!(f, "INLINE"),
        }
    }
}
