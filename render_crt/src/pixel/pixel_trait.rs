use super::alpha_blend_trait::*;

use std::ops::*;

///
/// Trait implemented by types that represent a pixel that can be used while rendering
///
pub trait Pixel<const N: usize>
where
    Self: Sized + Copy + Clone + Default + Send + Sync,
    Self: Add<Output=Self> + Sub<Output=Self> + Mul<Self::Component, Output=Self>,
    Self: AlphaBlend
{
    type Component: Sized + Copy + Clone + Send + Sync + Add<Output=Self::Component> + Sub<Output=Self::Component> + Mul<Output=Self::Component> + Div<Output=Self::Component>;

    /// An opaque black pixel
    fn black() -> Self;

    /// An opaque white pixel
    fn white() -> Self;

    /// Creates a pixel from its components
    fn from_components(components: [Self::Component; N]) -> Self;

    /// Returns the components that make up this pixel
    fn to_components(&self) -> [Self::Component; N];
}
