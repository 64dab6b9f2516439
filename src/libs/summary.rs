//! Final run summary.
//!
//! Computed once at shutdown from a frozen [`StatsSnapshot`]. Elapsed time is
//! truncated to whole seconds and the rate is derived from that truncated
//! value, so a run shorter than one second reports a rate of `0`.

use crate::libs::formatter::format_duration;
use crate::libs::stats::StatsSnapshot;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Run length, truncated to whole seconds.
    pub elapsed: Duration,
    pub total_actions: u64,
    pub mouse_actions: u64,
    pub key_actions: u64,
    pub compute_ops: u64,
    /// Ticks per second over the truncated elapsed time.
    pub actions_per_second: f64,
}

impl Summary {
    pub fn from_snapshot(snapshot: &StatsSnapshot) -> Self {
        let elapsed = Duration::from_secs(snapshot.elapsed.as_secs());
        Self {
            elapsed,
            total_actions: snapshot.total_actions,
            mouse_actions: snapshot.mouse_actions,
            key_actions: snapshot.key_actions,
            compute_ops: snapshot.compute_ops,
            actions_per_second: actions_per_second(snapshot.total_actions, elapsed),
        }
    }

    pub fn elapsed_text(&self) -> String {
        format_duration(&self.elapsed)
    }

    pub fn rate_text(&self) -> String {
        format!("{:.2} actions/sec", self.actions_per_second)
    }
}

/// Returns `0.0` when `elapsed` is below one whole second.
pub fn actions_per_second(total_actions: u64, elapsed: Duration) -> f64 {
    let seconds = elapsed.as_secs();
    if seconds == 0 {
        return 0.0;
    }
    total_actions as f64 / seconds as f64
}
