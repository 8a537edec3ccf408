//! [`TrackContext`]: owns the two edge trackers and runs the per-frame pipeline.
//!
//! Typical usage:
//! ```no_run
//! use track_vision::image::ImageU8Mut;
//! use track_vision::{TrackContext, TrackParams};
//!
//! # fn example(gray: &mut [u8]) -> Result<(), String> {
//! let mut ctx = TrackContext::new(TrackParams::default())?;
//! let frame = ImageU8Mut { w: 188, h: 120, stride: 188, data: gray };
//! let result = ctx.process(frame);
//! if result.is_tracked() {
//!     println!("visible rows: {}", result.final_distance);
//! }
//! # Ok(())
//! # }
//! ```
use super::params::TrackParams;
use super::result::{EdgeResult, TrackResult};
use crate::border::pad;
use crate::fit::{fit, CubicBezier};
use crate::image::{ImageU8Mut, ImageView};
use crate::start::find_start;
use crate::trace::{trace_both, EdgeTracker, TraceSummary};
use crate::types::{EdgeSide, FrameStatus, MAX_FRAME_DIM, MIN_FRAME_DIM};
use log::{debug, warn};

/// Tracking state carried across frames.
///
/// All buffers are sized at construction; [`process`](Self::process) only
/// overwrites them.
pub struct TrackContext {
    params: TrackParams,
    left: EdgeTracker,
    right: EdgeTracker,
    left_curve: Option<CubicBezier>,
    right_curve: Option<CubicBezier>,
    final_distance: u8,
    status: FrameStatus,
    frames: u64,
    last_trace: TraceSummary,
}

impl TrackContext {
    /// Create a context for frames of `params.width × params.height`.
    pub fn new(params: TrackParams) -> Result<Self, String> {
        for (name, v) in [("width", params.width), ("height", params.height)] {
            if !(MIN_FRAME_DIM..=MAX_FRAME_DIM).contains(&v) {
                return Err(format!(
                    "frame {name} {v} outside supported range {MIN_FRAME_DIM}..={MAX_FRAME_DIM}"
                ));
            }
        }
        if params.min_fit_points < 2 {
            return Err(format!(
                "min_fit_points must be at least 2 (got {})",
                params.min_fit_points
            ));
        }
        let left = EdgeTracker::new(EdgeSide::Left, params.height, params.left_threshold);
        let right = EdgeTracker::new(EdgeSide::Right, params.height, params.right_threshold);
        Ok(Self {
            params,
            left,
            right,
            left_curve: None,
            right_curve: None,
            final_distance: 0,
            status: FrameStatus::NoTrack,
            frames: 0,
            last_trace: TraceSummary::default(),
        })
    }

    pub fn params(&self) -> &TrackParams {
        &self.params
    }

    /// Run the pipeline on one frame. The border of `image` is overwritten.
    ///
    /// A frame without a start point pair, or with dimensions other than the
    /// configured ones, yields `FrameStatus::NoTrack` and leaves the previous
    /// result in place.
    pub fn process(&mut self, mut image: ImageU8Mut<'_>) -> TrackResult<'_> {
        self.frames += 1;
        let (w, h) = (self.params.width, self.params.height);
        if image.width() != w || image.height() != h {
            warn!(
                "TrackContext::process frame {} is {}x{}, expected {}x{}",
                self.frames,
                image.width(),
                image.height(),
                w,
                h
            );
            self.status = FrameStatus::NoTrack;
            return self.result();
        }

        pad(&mut image);
        let view = image.as_view();

        let Some((left_start, right_start)) = find_start(&view, &self.params.start) else {
            debug!("TrackContext::process frame {}: no start points", self.frames);
            self.status = FrameStatus::NoTrack;
            return self.result();
        };

        self.left.start_point = left_start;
        self.left.threshold = self.params.left_threshold;
        self.right.start_point = right_start;
        self.right.threshold = self.params.right_threshold;
        self.last_trace = trace_both(
            &view,
            &mut self.left,
            &mut self.right,
            self.params.max_iterations,
            self.params.convergence_px,
        );

        for tracker in [&mut self.left, &mut self.right] {
            tracker.build_edge(w, &self.params.extract, self.params.turn_min_deviation);
        }

        let highest = [&self.left, &self.right]
            .iter()
            .map(|t| t.row_map().end_y())
            .filter(|&y| y > 0 && y < h)
            .min();
        if let Some(y) = highest {
            self.final_distance = (h - y) as u8;
        }

        self.left_curve = self.fit_side(EdgeSide::Left);
        self.right_curve = self.fit_side(EdgeSide::Right);
        self.status = FrameStatus::Tracked;

        debug!(
            "TrackContext::process frame {} starts=({:?},{:?}) steps={}/{} left={} right={} distance={}",
            self.frames,
            left_start,
            right_start,
            self.last_trace.left_steps,
            self.last_trace.right_steps,
            self.left.edge().len(),
            self.right.edge().len(),
            self.final_distance
        );
        self.result()
    }

    /// The most recent result; stale fields survive `NoTrack` frames.
    pub fn result(&self) -> TrackResult<'_> {
        TrackResult {
            status: self.status,
            frame: self.frames,
            left: edge_result(&self.left),
            right: edge_result(&self.right),
            left_curve: self.left_curve,
            right_curve: self.right_curve,
            final_distance: self.final_distance,
            trace: self.last_trace,
        }
    }

    pub fn tracker(&self, side: EdgeSide) -> &EdgeTracker {
        match side {
            EdgeSide::Left => &self.left,
            EdgeSide::Right => &self.right,
        }
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames
    }

    fn fit_side(&self, side: EdgeSide) -> Option<CubicBezier> {
        let edge = self.tracker(side).edge();
        (edge.found() && edge.len() >= self.params.min_fit_points).then(|| fit(edge.points()))
    }
}

fn edge_result(tracker: &EdgeTracker) -> EdgeResult<'_> {
    let edge = tracker.edge();
    EdgeResult {
        points: edge.points(),
        found: edge.found(),
        breakpoint: edge.breakpoint(),
        turn: tracker.turn_center(),
    }
}
