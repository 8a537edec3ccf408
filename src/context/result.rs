use crate::edge::TurnCenter;
use crate::fit::CubicBezier;
use crate::telemetry::TelemetryFrame;
use crate::trace::TraceSummary;
use crate::types::{FrameStatus, Point};
use serde::Serialize;

/// Filtered edge of one side, borrowed from its tracker.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeResult<'a> {
    /// Bottom-up edge points, one per row.
    pub points: &'a [Point],
    pub found: bool,
    /// Extraction stopped on a horizontal jump.
    pub breakpoint: bool,
    pub turn: Option<TurnCenter>,
}

/// Output of [`TrackContext::process`](super::TrackContext::process).
///
/// After a `NoTrack` frame every field except `status` and `frame` still holds
/// the last tracked frame's values.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackResult<'a> {
    pub status: FrameStatus,
    /// 1-based index of the frame this result was returned for.
    pub frame: u64,
    pub left: EdgeResult<'a>,
    pub right: EdgeResult<'a>,
    pub left_curve: Option<CubicBezier>,
    pub right_curve: Option<CubicBezier>,
    /// Rows from the frame bottom to the highest row either edge reached.
    pub final_distance: u8,
    pub trace: TraceSummary,
}

impl TrackResult<'_> {
    pub fn is_tracked(&self) -> bool {
        self.status == FrameStatus::Tracked
    }

    /// Telemetry frame aimed at the far end of the lane.
    ///
    /// The target is the midpoint of the two curves' far anchors; errors are
    /// its offset from the centre of a `width × height` frame, `x` growing to
    /// the right and `y` growing upwards. `None` unless both curves exist.
    pub fn telemetry(&self, width: usize, height: usize) -> Option<TelemetryFrame> {
        let (left, right) = (self.left_curve?, self.right_curve?);
        let tx = 0.5 * (left.p3[0] + right.p3[0]);
        let ty = 0.5 * (left.p3[1] + right.p3[1]);
        let error_x = (tx - 0.5 * width as f32).round() as i16;
        let error_y = (0.5 * height as f32 - ty).round() as i16;
        Some(TelemetryFrame::new(error_x, error_y, self.final_distance as u16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(left: Option<CubicBezier>, right: Option<CubicBezier>) -> TrackResult<'static> {
        let edge = EdgeResult {
            points: &[],
            found: false,
            breakpoint: false,
            turn: None,
        };
        TrackResult {
            status: FrameStatus::Tracked,
            frame: 1,
            left: edge,
            right: edge,
            left_curve: left,
            right_curve: right,
            final_distance: 110,
            trace: TraceSummary::default(),
        }
    }

    #[test]
    fn telemetry_targets_the_far_lane_centre() {
        let left = CubicBezier::chord([73.0, 118.0], [80.0, 11.0]);
        let right = CubicBezier::chord([115.0, 118.0], [120.0, 11.0]);
        let frame = result_with(Some(left), Some(right))
            .telemetry(188, 120)
            .expect("both curves");
        assert_eq!(frame, TelemetryFrame::new(6, 49, 110));
    }

    #[test]
    fn telemetry_needs_both_curves() {
        let left = CubicBezier::chord([73.0, 118.0], [80.0, 11.0]);
        assert!(result_with(Some(left), None).telemetry(188, 120).is_none());
    }
}
