use crate::types::Point;

/// Row value meaning "no traced point on this row". Column 0 is always part of
/// the blanked border, so no tracer ever stands on it.
pub const ROW_UNSET: u8 = 0;

/// One x per image row, built from a traced point sequence.
#[derive(Clone, Debug)]
pub struct RowMap {
    rows: Vec<u8>,
    start_y: usize,
    end_y: usize,
}

impl RowMap {
    /// Empty map for a frame `height` rows tall.
    pub fn new(height: usize) -> Self {
        Self {
            rows: vec![ROW_UNSET; height],
            start_y: 0,
            end_y: height,
        }
    }

    /// Overwrite the map with `points` and return the highest row reached
    /// (smallest `y`). The first point on a row wins; later revisits of the
    /// same row are ignored. Points outside the map are skipped.
    ///
    /// With no usable point the highest row is `height` and the lowest `0`.
    pub fn build(&mut self, points: &[Point]) -> usize {
        self.rows.fill(ROW_UNSET);
        let height = self.rows.len();
        let mut min_y = height;
        let mut max_y = 0;
        for p in points {
            let y = p.y as usize;
            if y >= height || self.rows[y] != ROW_UNSET {
                continue;
            }
            self.rows[y] = p.x;
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
        self.start_y = max_y;
        self.end_y = min_y;
        min_y
    }

    pub fn rows(&self) -> &[u8] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Lowest row written (largest `y`); extraction starts here.
    pub fn start_y(&self) -> usize {
        self.start_y
    }

    /// Highest row written (smallest `y`).
    pub fn end_y(&self) -> usize {
        self.end_y
    }

    /// Column recorded for row `y`, if any.
    pub fn get(&self, y: usize) -> Option<u8> {
        self.rows.get(y).copied().filter(|&x| x != ROW_UNSET)
    }
}

/// Allocating convenience wrapper around [`RowMap::build`].
pub fn to_row_map(points: &[Point], height: usize) -> RowMap {
    let mut map = RowMap::new(height);
    map.build(points);
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(u8, u8)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn first_visit_of_a_row_wins() {
        let points = pts(&[(10, 8), (11, 7), (12, 7), (13, 6), (9, 8)]);
        let mut map = RowMap::new(10);
        let highest = map.build(&points);
        assert_eq!(highest, 6);
        assert_eq!(map.get(8), Some(10));
        assert_eq!(map.get(7), Some(11));
        assert_eq!(map.get(6), Some(13));
        assert_eq!(map.get(5), None);
        assert_eq!(map.start_y(), 8);
        assert_eq!(map.end_y(), 6);
    }

    #[test]
    fn build_is_idempotent_and_resets_previous_content() {
        let points = pts(&[(40, 50), (41, 49), (41, 48), (42, 47), (60, 49)]);
        let mut map = RowMap::new(64);
        map.build(&pts(&[(5, 3), (6, 60)]));
        let a = map.build(&points);
        let first = map.rows().to_vec();
        let b = map.build(&points);
        assert_eq!(a, b);
        assert_eq!(map.rows(), first.as_slice());
        assert_eq!(map.get(3), None);
        assert_eq!(map.get(60), None);
        assert_eq!(to_row_map(&points, 64).rows(), first.as_slice());
    }

    #[test]
    fn empty_trace_reports_height_as_highest_row() {
        let mut map = RowMap::new(12);
        assert_eq!(map.build(&[]), 12);
        assert!(map.rows().iter().all(|&x| x == ROW_UNSET));
        assert_eq!(map.start_y(), 0);
    }

    #[test]
    fn points_below_the_map_are_ignored() {
        let mut map = RowMap::new(4);
        assert_eq!(map.build(&pts(&[(3, 9), (2, 2)])), 2);
        assert_eq!(map.get(2), Some(2));
    }
}
