//! Per-frame orchestration of the track perception pipeline.
//!
//! Overview
//! - Pads the frame with a black border and scans it bottom-up for one start
//!   point per track edge.
//! - Traces both edges in lock-step with two predictive contour tracers until
//!   they stop, meet, or run out of iterations.
//! - Collapses each trace into a row map, extracts the leading clean segment,
//!   locates its turn center and fits a cubic Bézier to it.
//! - Derives `final_distance`, the number of rows between the frame bottom and
//!   the highest row either edge reached.
//!
//! Modules
//! - [`params`] – tunable parameters, deserializable from the tool config.
//! - `pipeline` – the [`TrackContext`] owning every buffer.
//! - [`result`] – borrowed, serializable per-frame output.

pub mod params;
mod pipeline;
pub mod result;

pub use params::TrackParams;
pub use pipeline::TrackContext;
pub use result::{EdgeResult, TrackResult};
