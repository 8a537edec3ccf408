use crate::types::Point;
use serde::{Deserialize, Serialize};

/// Point of a filtered edge that deviates most from the edge's chord.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnCenter {
    pub point: Point,
    /// Signed distance from the chord in pixels; positive means the edge bulges
    /// to the right when walking up the frame.
    pub max_deviation: i16,
}

/// Locate the turn center of `points` (bottom row first).
///
/// Returns `None` for fewer than three points, a degenerate chord, or when no
/// interior point is at least `min_deviation` pixels from the chord.
pub fn find_turn_center(points: &[Point], min_deviation: i16) -> Option<TurnCenter> {
    if points.len() < 3 {
        return None;
    }
    let [fx, fy] = points[0].to_f32();
    let [lx, ly] = points[points.len() - 1].to_f32();
    let (dx, dy) = (lx - fx, ly - fy);
    let chord = (dx * dx + dy * dy).sqrt();
    if chord < 1e-6 {
        return None;
    }

    let mut best: Option<(Point, f32)> = None;
    for &p in &points[1..points.len() - 1] {
        let [px, py] = p.to_f32();
        let dev = (dx * (py - fy) - dy * (px - fx)) / chord;
        if best.map_or(true, |(_, b)| dev.abs() > b.abs()) {
            best = Some((p, dev));
        }
    }

    let (point, dev) = best?;
    let rounded = dev.round() as i16;
    (rounded.abs() >= min_deviation.max(0)).then_some(TurnCenter {
        point,
        max_deviation: rounded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_edge_has_no_turn() {
        let points: Vec<Point> = (10..60).rev().map(|y| Point::new(40, y)).collect();
        assert!(find_turn_center(&points, 3).is_none());
    }

    #[test]
    fn bent_edge_reports_the_apex() {
        // x grows by one per row up to the apex at y=40, then shrinks again.
        let points: Vec<Point> = (20..=60u8)
            .rev()
            .map(|y| {
                let off = 20 - (y as i32 - 40).abs();
                Point::new((30 + off) as u8, y)
            })
            .collect();
        let turn = find_turn_center(&points, 3).expect("apex");
        assert_eq!(turn.point, Point::new(50, 40));
        // Walking up, the bulge lies to the right of the chord.
        assert_eq!(turn.max_deviation, 20);
    }

    #[test]
    fn bulge_to_the_left_is_negative() {
        let points: Vec<Point> = (20..=60u8)
            .rev()
            .map(|y| {
                let off = 10 - (y as i32 - 40).abs().min(10);
                Point::new((80 - off) as u8, y)
            })
            .collect();
        let turn = find_turn_center(&points, 3).expect("apex");
        assert_eq!(turn.max_deviation, -10);
    }

    #[test]
    fn too_few_points() {
        assert!(find_turn_center(&[Point::new(1, 1), Point::new(9, 9)], 0).is_none());
    }
}
