use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Wall-clock time spent in one named stage.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Ordered stage timings of one tool run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.total_ms += elapsed_ms;
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }

    /// Run `f` and record its duration under `label`.
    pub fn measure<T>(&mut self, label: impl Into<String>, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.push(label, elapsed_ms(start));
        out
    }

    pub fn stage_ms(&self, label: &str) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.elapsed_ms)
    }
}

#[inline]
pub fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_accumulates_total() {
        let mut t = TimingBreakdown::default();
        t.push("load", 1.5);
        t.push("process", 0.25);
        assert_eq!(t.stages.len(), 2);
        assert!((t.total_ms - 1.75).abs() < 1e-12);
        assert_eq!(t.stage_ms("process"), Some(0.25));
        assert_eq!(t.stage_ms("fit"), None);
    }

    #[test]
    fn measure_returns_the_closure_value() {
        let mut t = TimingBreakdown::default();
        let v = t.measure("sum", || (1..=10).sum::<u32>());
        assert_eq!(v, 55);
        assert!(t.stage_ms("sum").is_some_and(|ms| ms >= 0.0));
    }
}
