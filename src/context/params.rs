//! Parameters of the tracking pipeline.
//!
//! Defaults match the 188×120 reference camera and a binarized input where the
//! track is 255 and the background 0.

use crate::edge::ExtractOptions;
use crate::start::StartOptions;
use crate::trace::MAX_EDGE_POINTS;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackParams {
    /// Frame width in pixels (8..=256).
    pub width: usize,
    /// Frame height in pixels (8..=256).
    pub height: usize,
    /// Left tracer: pixels at or above this value are track.
    pub left_threshold: u8,
    /// Right tracer: pixels at or above this value are track.
    pub right_threshold: u8,
    /// Start-point scan.
    pub start: StartOptions,
    /// Segment extraction from the row map.
    pub extract: ExtractOptions,
    /// Minimum filtered points before a curve is fitted.
    pub min_fit_points: usize,
    /// Tracers closer than this on both axes have met.
    pub convergence_px: u8,
    /// Minimum chord deviation (pixels) reported as a turn center.
    pub turn_min_deviation: i16,
    /// Upper bound on tracer steps per frame, both sides combined.
    pub max_iterations: usize,
}

impl Default for TrackParams {
    fn default() -> Self {
        Self {
            width: 188,
            height: 120,
            left_threshold: 128,
            right_threshold: 128,
            start: StartOptions::default(),
            extract: ExtractOptions::default(),
            min_fit_points: 4,
            convergence_px: 5,
            turn_min_deviation: 3,
            max_iterations: 2 * MAX_EDGE_POINTS,
        }
    }
}
