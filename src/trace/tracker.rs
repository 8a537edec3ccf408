use super::direction::{table_for, wrap, DirectionTable, SEED_DIRECTION};
use crate::edge::{extract, find_turn_center, ExtractOptions, FilteredEdge, RowMap, TurnCenter};
use crate::image::ImageView;
use crate::types::{EdgeSide, Point};

/// Capacity of the raw trace buffers. A tracker stops after
/// `MAX_EDGE_POINTS - 1` steps.
pub const MAX_EDGE_POINTS: usize = 240;

/// State, buffers and per-frame results for one track boundary.
///
/// Everything is allocated once in [`EdgeTracker::new`]; a frame only resets
/// counters and overwrites buffers in place.
pub struct EdgeTracker {
    side: EdgeSide,
    table: &'static DirectionTable,
    /// Where [`reset`](Self::reset) places the tracer.
    pub start_point: Point,
    /// Pixels below this value are black.
    pub threshold: u8,
    current: Point,
    active: bool,
    raw_points: [Point; MAX_EDGE_POINTS],
    raw_directions: [u8; MAX_EDGE_POINTS],
    count: usize,
    row_map: RowMap,
    edge: FilteredEdge,
    turn: Option<TurnCenter>,
}

impl EdgeTracker {
    /// Create a tracker for `side` on frames `height` rows tall.
    pub fn new(side: EdgeSide, height: usize, threshold: u8) -> Self {
        Self {
            side,
            table: table_for(side),
            start_point: Point::default(),
            threshold,
            current: Point::default(),
            active: false,
            raw_points: [Point::default(); MAX_EDGE_POINTS],
            raw_directions: [SEED_DIRECTION; MAX_EDGE_POINTS],
            count: 0,
            row_map: RowMap::new(height),
            edge: FilteredEdge::with_capacity(height),
            turn: None,
        }
    }

    pub fn side(&self) -> EdgeSide {
        self.side
    }

    /// Rewind to `start_point` and mark the tracer active.
    pub fn reset(&mut self) {
        self.count = 0;
        self.current = self.start_point;
        self.raw_points[0] = self.start_point;
        self.raw_directions[0] = SEED_DIRECTION;
        self.active = true;
    }

    /// Advance one pixel along the boundary.
    ///
    /// Returns `false` and deactivates the tracer when the point buffer is
    /// full or none of the eight probe pairs shows a black→white transition.
    pub fn step<I>(&mut self, image: &I) -> bool
    where
        I: ImageView<Pixel = u8>,
    {
        if !self.active {
            return false;
        }
        if self.count >= MAX_EDGE_POINTS - 1 {
            self.active = false;
            return false;
        }

        let prev = self.raw_directions[self.count] as i32;
        let cx = self.current.x as i32;
        let cy = self.current.y as i32;
        for offset in -1..=6 {
            let dir0 = wrap(prev + offset);
            let dir1 = wrap(prev + offset + 1);
            let s0 = self.table[dir0 as usize];
            let s1 = self.table[dir1 as usize];
            let (nx, ny) = (cx + s1.dx as i32, cy + s1.dy as i32);
            let a0 = image.pixel_checked(cx + s0.dx as i32, cy + s0.dy as i32);
            let a1 = image.pixel_checked(nx, ny);
            let (Some(v0), Some(v1)) = (a0, a1) else {
                continue;
            };
            if v0 < self.threshold && v1 >= self.threshold {
                self.count += 1;
                self.raw_directions[self.count] = dir1;
                self.current = Point::new(nx as u8, ny as u8);
                self.raw_points[self.count] = self.current;
                return true;
            }
        }

        self.active = false;
        false
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn current(&self) -> Point {
        self.current
    }

    /// Number of successful steps since the last reset.
    pub fn steps(&self) -> usize {
        self.count
    }

    /// Traced points, start point first.
    pub fn raw_points(&self) -> &[Point] {
        &self.raw_points[..=self.count]
    }

    /// Heading taken to reach each traced point; entry 0 is the seed.
    pub fn raw_directions(&self) -> &[u8] {
        &self.raw_directions[..=self.count]
    }

    /// Rebuild the row map from the raw trace, extract the filtered edge and
    /// locate its turn center.
    pub fn build_edge(&mut self, width: usize, options: &ExtractOptions, turn_min_deviation: i16) {
        self.row_map.build(&self.raw_points[..=self.count]);
        extract(
            self.row_map.rows(),
            self.row_map.start_y(),
            self.row_map.end_y(),
            self.side.invalid_x(width),
            options,
            &mut self.edge,
        );
        self.turn = if self.edge.found() {
            find_turn_center(self.edge.points(), turn_min_deviation)
        } else {
            None
        };
    }

    pub fn row_map(&self) -> &RowMap {
        &self.row_map
    }

    pub fn edge(&self) -> &FilteredEdge {
        &self.edge
    }

    pub fn turn_center(&self) -> Option<TurnCenter> {
        self.turn
    }
}
