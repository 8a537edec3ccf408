//! Predictive contour tracing of the two track boundaries.
//!
//! Each [`EdgeTracker`] walks one boundary pixel by pixel. From its current
//! position it probes pairs of neighbouring directions, starting one step to
//! the left of its previous heading and sweeping the full circle, and moves
//! onto the first neighbour that completes a black→white transition. On
//! straight or gently curved track the first or second probe matches, so a
//! step is O(1) in practice.
//!
//! The left boundary uses the clockwise table and the right boundary the
//! mirrored counter-clockwise one, so both tracers keep the track (white) on
//! the same relative side while heading up the frame.
//!
//! [`trace_both`] interleaves the two tracers, always advancing the one that
//! lags behind (larger `y`), and stops once they meet.

mod direction;
mod scheduler;
mod tracker;

pub use direction::{
    table_for, DirectionTable, Step, CLOCKWISE, COUNTER_CLOCKWISE, SEED_DIRECTION,
};
pub use scheduler::{trace_both, TraceSummary};
pub use tracker::{EdgeTracker, MAX_EDGE_POINTS};
