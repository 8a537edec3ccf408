use serde::{Deserialize, Serialize};

/// Largest supported frame side. Coordinates are stored as `u8`.
pub const MAX_FRAME_DIM: usize = 256;

/// Smallest supported frame side; the start-point scan needs a 4-pixel window
/// inside the padded border.
pub const MIN_FRAME_DIM: usize = 8;

/// Pixel coordinate in a padded frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

impl Point {
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_f32(self) -> [f32; 2] {
        [self.x as f32, self.y as f32]
    }
}

/// Which track boundary a tracker follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeSide {
    Left,
    Right,
}

impl EdgeSide {
    /// Column that marks "edge pinned to the frame border" for this side.
    ///
    /// Edge-hugging start points and traces running along the border land on
    /// column 1 (left) or `width - 2` (right); such rows carry no edge.
    #[inline]
    pub fn invalid_x(self, width: usize) -> u8 {
        match self {
            EdgeSide::Left => 1,
            EdgeSide::Right => (width - 2) as u8,
        }
    }
}

/// Outcome of a single `TrackContext::process` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FrameStatus {
    /// Start points were found and every result field was recomputed.
    Tracked,
    /// No start point pair; the previous frame's result is still exposed.
    NoTrack,
}
