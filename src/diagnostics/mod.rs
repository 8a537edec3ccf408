//! Reports and timing written by the command-line tools.

pub mod report;
pub mod timing;

pub use report::{InputDescriptor, TrackReport};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
