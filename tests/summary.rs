#[cfg(test)]
mod tests {
    use awaker::libs::stats::{ActionCategory, ActivityStats, StatsSnapshot};
    use awaker::libs::summary::{actions_per_second, Summary};
    use chrono::Local;
    use std::time::Duration;

    fn snapshot(elapsed: Duration, total_actions: u64) -> StatsSnapshot {
        StatsSnapshot {
            started_local: Local::now(),
            elapsed,
            mouse_actions: 4,
            key_actions: 2,
            compute_ops: 1,
            total_actions,
            last_action: "Key pressed: F14".to_string(),
        }
    }

    #[test]
    fn test_rate_is_zero_below_one_second() {
        assert_eq!(actions_per_second(10, Duration::ZERO), 0.0);
        assert_eq!(actions_per_second(10, Duration::from_millis(999)), 0.0);
    }

    #[test]
    fn test_rate_uses_truncated_seconds() {
        assert_eq!(actions_per_second(10, Duration::from_millis(5_900)), 2.0);
    }

    #[test]
    fn test_summary_from_snapshot() {
        let summary = Summary::from_snapshot(&snapshot(Duration::from_millis(4_750), 3));

        assert_eq!(summary.elapsed, Duration::from_secs(4));
        assert_eq!(summary.total_actions, 3);
        assert_eq!(summary.mouse_actions, 4);
        assert_eq!(summary.key_actions, 2);
        assert_eq!(summary.compute_ops, 1);
        assert_eq!(summary.elapsed_text(), "4s");
        assert_eq!(summary.rate_text(), "0.75 actions/sec");
    }

    #[test]
    fn test_short_run_summary() {
        let summary = Summary::from_snapshot(&snapshot(Duration::from_millis(300), 1));
        assert_eq!(summary.elapsed_text(), "0s");
        assert_eq!(summary.rate_text(), "0.00 actions/sec");
    }

    #[test]
    fn test_stats_count_per_category() {
        let stats = ActivityStats::new();
        stats.record(ActionCategory::Mouse, "Primary button clicked");
        stats.record(ActionCategory::Mouse, "Wheel scrolled up");
        stats.record(ActionCategory::Compute, "CPU operation (20000 iterations)");
        stats.record_tick();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.mouse_actions, 2);
        assert_eq!(snapshot.key_actions, 0);
        assert_eq!(snapshot.compute_ops, 1);
        assert_eq!(snapshot.total_actions, 1);
        assert_eq!(snapshot.last_action, "CPU operation (20000 iterations)");
    }
}
