#[cfg(test)]
mod tests {
    use awaker::libs::reporter::{render_live_stats, render_progress, run_live_stats, run_progress};
    use awaker::libs::stats::{ActivityStats, StatsSnapshot};
    use chrono::Local;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time;
    use tokio_util::sync::CancellationToken;

    #[test]
    fn test_progress_half_way() {
        let line = render_progress(Duration::from_secs(30), Duration::from_secs(60), 10);
        assert_eq!(line, "⏳ Progress ▐█████░░░░░▌ 30/60 sec (50%)");
    }

    #[test]
    fn test_progress_start_and_end() {
        let start = render_progress(Duration::ZERO, Duration::from_secs(60), 4);
        assert_eq!(start, "⏳ Progress ▐░░░░▌ 0/60 sec (0%)");

        let end = render_progress(Duration::from_secs(60), Duration::from_secs(60), 4);
        assert_eq!(end, "⏳ Progress ▐████▌ 60/60 sec (100%)");
    }

    #[test]
    fn test_progress_is_clamped_past_total() {
        let line = render_progress(Duration::from_secs(90), Duration::from_secs(60), 4);
        assert_eq!(line, "⏳ Progress ▐████▌ 60/60 sec (100%)");
    }

    #[test]
    fn test_progress_ignores_sub_second_elapsed() {
        let line = render_progress(Duration::from_millis(1_900), Duration::from_secs(10), 10);
        assert_eq!(line, "⏳ Progress ▐█░░░░░░░░▌ 1/10 sec (10%)");
    }

    #[test]
    fn test_live_stats_line() {
        let snapshot = StatsSnapshot {
            started_local: Local::now(),
            elapsed: Duration::from_millis(125_400),
            mouse_actions: 3,
            key_actions: 1,
            compute_ops: 0,
            total_actions: 7,
            last_action: "Cursor moved to (12, 34)".to_string(),
        };
        assert_eq!(
            render_live_stats(&snapshot),
            "📊 Active: 2m5s | Actions: 7 | Last: Cursor moved to (12, 34)"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_reporters_stop_on_cancel() {
        let stats = Arc::new(ActivityStats::new());
        let cancel = CancellationToken::new();

        let progress = tokio::spawn(run_progress(Arc::clone(&stats), Duration::from_secs(60), cancel.clone()));
        let live = tokio::spawn(run_live_stats(Arc::clone(&stats), cancel.clone()));

        time::sleep(Duration::from_secs(12)).await;
        assert!(!progress.is_finished());
        assert!(!live.is_finished());

        cancel.cancel();
        progress.await.unwrap();
        live.await.unwrap();
    }
}
