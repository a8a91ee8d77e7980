///
/// Describes the size of a frame in pixels
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameSize {
    pub width:  usize,
    pub height: usize,    
}

impl FrameSize {
    ///
    /// The size of this frame after it has been rotated by 90 degrees
    ///
    #[inline]
    pub fn rotated(&self) -> FrameSize {
        FrameSize { width: self.height, height: self.width }
    }
}
