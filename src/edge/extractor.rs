use super::row_map::ROW_UNSET;
use crate::types::Point;
use serde::{Deserialize, Serialize};

/// Noise-rejection thresholds for [`extract`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Minimum number of consecutive rows for a run to count as an edge.
    pub min_segment_length: usize,
    /// Largest accepted change of x between consecutive recorded rows.
    pub max_horizontal_jump: u8,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            min_segment_length: 6,
            max_horizontal_jump: 8,
        }
    }
}

/// Filtered edge of one side: the accepted run, bottom row first.
#[derive(Clone, Debug, Default)]
pub struct FilteredEdge {
    points: Vec<Point>,
    found: bool,
    breakpoint: bool,
}

impl FilteredEdge {
    /// Reserve room for one point per row so extraction never reallocates.
    pub fn with_capacity(rows: usize) -> Self {
        Self {
            points: Vec::with_capacity(rows),
            found: false,
            breakpoint: false,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn found(&self) -> bool {
        self.found
    }

    /// A horizontal jump larger than the limit was seen while tracking.
    pub fn breakpoint(&self) -> bool {
        self.breakpoint
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExtractState {
    Searching,
    Tracking,
}

/// Extract the first trustworthy run from a row map.
///
/// Rows are visited from `start_y` up to (excluding) `end_y`. A row holding
/// [`ROW_UNSET`] or `invalid_x` breaks the current run, as does a change of
/// more than `max_horizontal_jump` columns from the previous recorded row
/// (which also raises the breakpoint flag). A broken run that already has
/// `min_segment_length` rows is accepted immediately; shorter runs are dropped
/// and the search continues.
pub fn extract(
    rows: &[u8],
    start_y: usize,
    end_y: usize,
    invalid_x: u8,
    options: &ExtractOptions,
    out: &mut FilteredEdge,
) {
    out.points.clear();
    out.found = false;
    out.breakpoint = false;
    if rows.is_empty() {
        return;
    }

    let min_len = options.min_segment_length;
    let max_jump = options.max_horizontal_jump as i32;
    let mut state = ExtractState::Searching;
    let mut y = start_y.min(rows.len() - 1) as isize;
    let stop = end_y as isize;

    while y > stop {
        let x = rows[y as usize];
        let invalid = x == ROW_UNSET || x == invalid_x;
        match state {
            ExtractState::Searching => {
                if !invalid {
                    // Revisit this row as the first point of the run.
                    state = ExtractState::Tracking;
                    out.points.clear();
                    continue;
                }
            }
            ExtractState::Tracking => {
                let mut broken = invalid;
                if let (false, Some(last)) = (broken, out.points.last()) {
                    if (x as i32 - last.x as i32).abs() > max_jump {
                        broken = true;
                        out.breakpoint = true;
                    }
                }
                if broken {
                    if out.points.len() >= min_len {
                        break;
                    }
                    state = ExtractState::Searching;
                    out.points.clear();
                } else {
                    out.points.push(Point::new(x, y as u8));
                }
            }
        }
        y -= 1;
    }

    out.found = out.points.len() >= min_len;
    if !out.found {
        out.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: usize = 60;
    const INVALID_LEFT: u8 = 1;

    fn run(rows: &[u8], start_y: usize, end_y: usize) -> FilteredEdge {
        let mut out = FilteredEdge::with_capacity(rows.len());
        extract(
            rows,
            start_y,
            end_y,
            INVALID_LEFT,
            &ExtractOptions::default(),
            &mut out,
        );
        out
    }

    #[test]
    fn continuous_edge_is_kept_whole() {
        let mut rows = vec![ROW_UNSET; H];
        for (i, row) in rows.iter_mut().enumerate().take(58).skip(20) {
            *row = 30 + (i % 3) as u8;
        }
        let edge = run(&rows, 57, 20);
        assert!(edge.found());
        assert!(!edge.breakpoint());
        // Rows 57 down to 21; end_y itself is excluded.
        assert_eq!(edge.len(), 37);
        assert_eq!(edge.points()[0], Point::new(30, 57));
        assert_eq!(edge.points().last().map(|p| p.y), Some(21));
    }

    #[test]
    fn short_noise_run_is_skipped() {
        let mut rows = vec![ROW_UNSET; H];
        // 3-row speck at the bottom, a gap, then a real edge.
        for y in 55..58 {
            rows[y] = 12;
        }
        for y in 20..50 {
            rows[y] = 40;
        }
        let edge = run(&rows, 57, 19);
        assert!(edge.found());
        assert_eq!(edge.points()[0], Point::new(40, 49));
        assert_eq!(edge.len(), 30);
    }

    #[test]
    fn jump_after_long_run_ends_extraction_and_flags_breakpoint() {
        let mut rows = vec![ROW_UNSET; H];
        for y in 40..58 {
            rows[y] = 30;
        }
        for y in 10..40 {
            rows[y] = 60;
        }
        let edge = run(&rows, 57, 9);
        assert!(edge.found());
        assert!(edge.breakpoint());
        assert_eq!(edge.len(), 18);
        assert!(edge.points().iter().all(|p| p.x == 30));
    }

    #[test]
    fn border_column_rows_are_not_an_edge() {
        let rows = vec![INVALID_LEFT; H];
        let edge = run(&rows, H - 2, 0);
        assert!(!edge.found());
        assert!(edge.is_empty());
    }

    #[test]
    fn trailing_run_that_is_too_short_is_rejected() {
        let mut rows = vec![ROW_UNSET; H];
        for y in 30..35 {
            rows[y] = 22;
        }
        let edge = run(&rows, 34, 29);
        assert!(!edge.found());
        assert_eq!(edge.len(), 0);
    }

    #[test]
    fn found_always_implies_minimum_length() {
        // Deterministic pseudo-random row maps.
        let mut seed = 0x2545_f491_u32;
        let mut next = move || {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            seed
        };
        let options = ExtractOptions::default();
        for _ in 0..500 {
            let mut rows = vec![ROW_UNSET; H];
            let mut x = 20 + (next() % 100) as i32;
            for row in rows.iter_mut() {
                match next() % 10 {
                    0 => *row = ROW_UNSET,
                    1 => *row = INVALID_LEFT,
                    2 => x = 20 + (next() % 100) as i32,
                    _ => x = (x + (next() % 5) as i32 - 2).clamp(2, 180),
                }
                if *row == ROW_UNSET && next() % 2 == 0 {
                    *row = x as u8;
                }
            }
            let start = (next() as usize) % H;
            let end = (next() as usize) % H;
            let mut out = FilteredEdge::with_capacity(H);
            extract(&rows, start, end, INVALID_LEFT, &options, &mut out);
            if out.found() {
                assert!(out.len() >= options.min_segment_length);
            } else {
                assert_eq!(out.len(), 0);
            }
            assert!(out.len() <= H);
        }
    }
}
