#![doc = include_str!("../README.md")]

// Pipeline stages, leaves first.
pub mod border;
pub mod edge;
pub mod fit;
pub mod start;
pub mod trace;

// Orchestration and shared types.
pub mod context;
pub mod image;
pub mod types;

// Wire codec and tool support.
pub mod config;
pub mod diagnostics;
pub mod telemetry;

// --- High-level re-exports -------------------------------------------------

pub use crate::context::{EdgeResult, TrackContext, TrackParams, TrackResult};
pub use crate::fit::CubicBezier;
pub use crate::types::{EdgeSide, FrameStatus, Point};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use track_vision::prelude::*;
///
/// # fn main() -> Result<(), String> {
/// let (w, h) = (188usize, 120usize);
/// let mut gray = vec![255u8; w * h];
/// let mut ctx = TrackContext::new(TrackParams::default())?;
/// let res = ctx.process(ImageU8Mut { w, h, stride: w, data: &mut gray });
/// println!("tracked={} distance={}", res.is_tracked(), res.final_distance);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageU8, ImageU8Mut};
    pub use crate::{FrameStatus, TrackContext, TrackParams, TrackResult};
}
