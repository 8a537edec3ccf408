use crate::types::EdgeSide;

/// Unit step on the pixel grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub dx: i8,
    pub dy: i8,
}

const fn step(dx: i8, dy: i8) -> Step {
    Step { dx, dy }
}

pub type DirectionTable = [Step; 8];

/// Left boundary: ↑ ↗ → ↘ ↓ ↙ ← ↖
pub const CLOCKWISE: DirectionTable = [
    step(0, -1),
    step(1, -1),
    step(1, 0),
    step(1, 1),
    step(0, 1),
    step(-1, 1),
    step(-1, 0),
    step(-1, -1),
];

/// Right boundary: ↑ ↖ ← ↙ ↓ ↘ → ↗
pub const COUNTER_CLOCKWISE: DirectionTable = [
    step(0, -1),
    step(-1, -1),
    step(-1, 0),
    step(-1, 1),
    step(0, 1),
    step(1, 1),
    step(1, 0),
    step(1, -1),
];

/// Heading stored for the start point of a fresh trace ("up" in both tables).
pub const SEED_DIRECTION: u8 = 0;

pub fn table_for(side: EdgeSide) -> &'static DirectionTable {
    match side {
        EdgeSide::Left => &CLOCKWISE,
        EdgeSide::Right => &COUNTER_CLOCKWISE,
    }
}

/// Wrap a signed direction index into `0..8`.
#[inline]
pub(crate) fn wrap(dir: i32) -> u8 {
    dir.rem_euclid(8) as u8
}
