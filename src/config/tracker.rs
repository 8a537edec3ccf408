use crate::context::TrackParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct TrackToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub tracking: TrackParams,
    pub output: TrackOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct TrackOutputConfig {
    pub report_json: PathBuf,
    /// Padded frame with traced edges and fitted curves drawn in.
    #[serde(default)]
    pub overlay_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<TrackToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<TrackToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}
