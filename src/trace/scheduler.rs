use super::tracker::EdgeTracker;
use crate::image::ImageView;
use log::trace;
use serde::Serialize;

/// What happened during one [`trace_both`] run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceSummary {
    /// Loop iterations consumed (one `step` call each).
    pub iterations: usize,
    /// `step` calls issued to the left tracer.
    pub left_steps: usize,
    /// `step` calls issued to the right tracer.
    pub right_steps: usize,
    /// The run ended because the two tracers met.
    pub converged: bool,
}

/// Reset both trackers and advance them until both stop, they meet, or
/// `max_iterations` steps have been issued.
///
/// While both are active only the lagging tracker (larger `y`, ties go to the
/// left one) is stepped, which keeps their row progress in sync. The trackers
/// count as met when both are still active and their current points are
/// closer than `convergence_px` on both axes.
pub fn trace_both<I>(
    image: &I,
    left: &mut EdgeTracker,
    right: &mut EdgeTracker,
    max_iterations: usize,
    convergence_px: u8,
) -> TraceSummary
where
    I: ImageView<Pixel = u8>,
{
    left.reset();
    right.reset();

    let mut summary = TraceSummary::default();
    let limit = convergence_px as i32;
    while summary.iterations < max_iterations && (left.is_active() || right.is_active()) {
        summary.iterations += 1;
        let step_left = match (left.is_active(), right.is_active()) {
            (true, true) => left.current().y >= right.current().y,
            (true, false) => true,
            _ => false,
        };
        if step_left {
            left.step(image);
            summary.left_steps += 1;
        } else {
            right.step(image);
            summary.right_steps += 1;
        }

        if left.is_active() && right.is_active() {
            let l = left.current();
            let r = right.current();
            let dx = (l.x as i32 - r.x as i32).abs();
            let dy = (l.y as i32 - r.y as i32).abs();
            if dx < limit && dy < limit {
                summary.converged = true;
                break;
            }
        }
    }
    trace!(
        "trace_both: iterations={} left_steps={} right_steps={} converged={}",
        summary.iterations,
        summary.left_steps,
        summary.right_steps,
        summary.converged
    );
    summary
}
