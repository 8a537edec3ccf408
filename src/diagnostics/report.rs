use super::timing::TimingBreakdown;
use crate::context::TrackResult;
use crate::telemetry::TelemetryFrame;
use serde::Serialize;

/// JSON report written by `track_frame`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackReport<'a> {
    pub input: InputDescriptor,
    pub result: TrackResult<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<TelemetryFrame>,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub path: String,
    pub width: usize,
    pub height: usize,
}
