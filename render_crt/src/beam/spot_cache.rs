use super::spot::*;

use crate::error::*;
use crate::frame::*;
use crate::pixel::*;

///
/// Caches the electron beam spots that have been generated for a render
///
/// Every spot in a cache has the same size, which is fixed when the cache is created, so spots are only keyed by their
/// channel and brightness. A cache is intended to be used for a single render: create one per channel to render the
/// channels in parallel without needing any locking.
///
pub struct SpotCache {
    /// The width and height of every spot in this cache
    size: usize,

    /// The spots that have been generated so far, indexed by `channel_index*256 + brightness`
    spots: Vec<Option<RgbaFrame<U8RgbaPixel>>>,
}

impl SpotCache {
    ///
    /// Creates an empty spot cache for spots of the specified size
    ///
    pub fn new(size: usize) -> SpotCache {
        SpotCache {
            size:   size,
            spots:  vec![None; NUM_CHANNELS*256],
        }
    }

    ///
    /// The size of the spots in this cache
    ///
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    ///
    /// The number of spots that have been generated so far
    ///
    pub fn len(&self) -> usize {
        self.spots.iter().filter(|spot| spot.is_some()).count()
    }

    ///
    /// True if no spots have been generated yet
    ///
    pub fn is_empty(&self) -> bool {
        self.spots.iter().all(|spot| spot.is_none())
    }

    ///
    /// Gets the (possibly cached) spot for an electron beam with the specified brightness and colour
    ///
    pub fn get_spot(&mut self, channel_index: usize, brightness: u8) -> Result<&RgbaFrame<U8RgbaPixel>> {
        check_channel_index(channel_index)?;

        let index   = channel_index*256 + (brightness as usize);
        let spot    = match self.spots[index].take() {
            Some(spot)  => spot,
            None        => make_spot(brightness, channel_index, self.size)?,
        };

        Ok(&*self.spots[index].insert(spot))
    }
}
