///
/// Porter-Duff compositing for pixels with a premultiplied alpha
///
pub trait AlphaBlend : Sized {
    /// Draws this pixel on top of `dest`
    fn source_over(self, dest: Self) -> Self;

    /// The part of this pixel that lies inside the opaque area of `dest`
    fn source_in(self, dest: Self) -> Self;
}
