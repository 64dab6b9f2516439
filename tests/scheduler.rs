#[cfg(test)]
mod tests {
    use awaker::libs::config::{ActivityConfig, DEFAULT_INTERVAL};
    use awaker::libs::platform::{ActivityCapabilities, AdapterCall, InputAdapter, RecordingAdapter};
    use awaker::libs::scheduler::{ActivityScheduler, StopReason};
    use awaker::libs::stats::ActivityStats;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time;

    fn config(mouse: bool, keyboard: bool, memory: bool, intensity: u8) -> ActivityConfig {
        ActivityConfig {
            interval: Duration::from_secs(1),
            duration: None,
            intensity,
            mouse_enabled: mouse,
            keyboard_enabled: keyboard,
            memory_enabled: memory,
            verbose: false,
        }
    }

    fn scheduler(config: ActivityConfig, adapter: &Arc<RecordingAdapter>) -> (ActivityScheduler, Arc<ActivityStats>) {
        let stats = Arc::new(ActivityStats::new());
        let dyn_adapter: Arc<dyn InputAdapter> = adapter.clone();
        let scheduler = ActivityScheduler::new(config, dyn_adapter, Arc::clone(&stats))
            .with_rng(StdRng::seed_from_u64(42))
            .with_action_delay(Duration::ZERO);
        (scheduler, stats)
    }

    #[tokio::test]
    async fn test_tick_invokes_intensity_times() {
        for intensity in 1..=5u8 {
            let adapter = Arc::new(RecordingAdapter::new(ActivityCapabilities::FullySupported).with_seed(7));
            let (mut scheduler, stats) = scheduler(config(true, true, false, intensity), &adapter);

            let invoked = scheduler.tick().await;

            assert_eq!(invoked, usize::from(intensity));
            assert_eq!(adapter.input_call_count(), usize::from(intensity));
            assert_eq!(stats.total_actions(), 1);

            let snapshot = stats.snapshot();
            assert_eq!(snapshot.mouse_actions + snapshot.key_actions, u64::from(intensity));
            assert_eq!(snapshot.compute_ops, 0);
        }
    }

    #[tokio::test]
    async fn test_out_of_range_intensity_is_clamped() {
        for (raw, expected) in [(0u8, 1usize), (9, 5), (u8::MAX, 5)] {
            let adapter = Arc::new(RecordingAdapter::new(ActivityCapabilities::FullySupported));
            let (mut scheduler, stats) = scheduler(config(true, false, false, raw), &adapter);

            assert_eq!(scheduler.tick().await, expected);
            assert_eq!(adapter.input_call_count(), expected);
            assert_eq!(stats.snapshot().mouse_actions, expected as u64);
            assert_eq!(stats.total_actions(), 1);
        }
    }

    #[tokio::test]
    async fn test_mixed_tick_counts_every_invocation() {
        let adapter = Arc::new(RecordingAdapter::new(ActivityCapabilities::FullySupported).with_seed(1));
        let (mut scheduler, stats) = scheduler(config(true, true, true, 5), &adapter);

        assert_eq!(scheduler.tick().await, 5);
        let snapshot = stats.snapshot();
        assert_eq!(snapshot.mouse_actions + snapshot.key_actions + snapshot.compute_ops, 5);
    }

    #[tokio::test]
    async fn test_tick_with_nothing_enabled_is_noop() {
        let adapter = Arc::new(RecordingAdapter::new(ActivityCapabilities::FullySupported));
        let (mut scheduler, stats) = scheduler(config(false, false, false, 3), &adapter);

        assert_eq!(scheduler.tick().await, 0);
        assert_eq!(stats.total_actions(), 0);
        assert!(adapter.calls().is_empty());
    }

    #[tokio::test]
    async fn test_tick_on_compute_only_platform_skips_input() {
        let adapter = Arc::new(RecordingAdapter::new(ActivityCapabilities::ComputeOnly));
        let (mut scheduler, stats) = scheduler(config(true, true, false, 5), &adapter);

        assert_eq!(scheduler.tick().await, 0);
        assert_eq!(stats.total_actions(), 0);
        assert_eq!(adapter.input_call_count(), 0);
    }

    #[tokio::test]
    async fn test_tick_on_compute_only_platform_runs_compute() {
        let adapter = Arc::new(RecordingAdapter::new(ActivityCapabilities::ComputeOnly));
        let (mut scheduler, stats) = scheduler(config(true, true, true, 4), &adapter);

        assert_eq!(scheduler.tick().await, 4);
        assert_eq!(adapter.input_call_count(), 0);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.compute_ops, 4);
        assert_eq!(snapshot.total_actions, 1);
        assert!(!snapshot.last_action.is_empty());
    }

    #[tokio::test]
    async fn test_failed_activities_are_swallowed() {
        let adapter = Arc::new(RecordingAdapter::failing(ActivityCapabilities::FullySupported));
        let (mut scheduler, stats) = scheduler(config(true, true, false, 3), &adapter);

        assert_eq!(scheduler.tick().await, 3);
        assert_eq!(scheduler.tick().await, 3);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.mouse_actions, 0);
        assert_eq!(snapshot.key_actions, 0);
        assert_eq!(snapshot.total_actions, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_action_delay_between_invocations() {
        let adapter = Arc::new(RecordingAdapter::new(ActivityCapabilities::FullySupported));
        let (scheduler, _stats) = scheduler(config(false, false, true, 3), &adapter);
        let mut scheduler = scheduler.with_action_delay(Duration::from_millis(100));

        let started = time::Instant::now();
        scheduler.tick().await;

        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(200));
        assert!(elapsed < Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unbounded_run_reports_ticks() {
        let adapter = Arc::new(RecordingAdapter::new(ActivityCapabilities::FullySupported));
        let run = ActivityScheduler::start(config(false, false, true, 1), adapter.clone());

        time::sleep(Duration::from_millis(3_500)).await;
        assert!(!run.is_done());
        run.cancel();
        assert!(run.is_done());
        assert_eq!(run.stop_reason(), Some(StopReason::Cancelled));

        let summary = run.finish().await;
        assert_eq!(summary.total_actions, 3);
        assert_eq!(summary.compute_ops, 3);
        assert_eq!(summary.mouse_actions, 0);
        assert_eq!(summary.key_actions, 0);
        assert_eq!(summary.elapsed, Duration::from_secs(3));
        assert_eq!(summary.rate_text(), "1.00 actions/sec");
        assert_eq!(adapter.count(&AdapterCall::RequestSleepPrevention), 1);
        assert_eq!(adapter.count(&AdapterCall::ReleaseSleepPrevention), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_duration_cancels_run() {
        let adapter = Arc::new(RecordingAdapter::new(ActivityCapabilities::FullySupported));
        let bounded = ActivityConfig {
            duration: Some(Duration::from_millis(2_500)),
            ..config(false, false, true, 2)
        };
        let run = ActivityScheduler::start(bounded, adapter.clone());

        run.cancelled().await;
        assert!(run.is_done());
        assert_eq!(run.stop_reason(), Some(StopReason::DurationElapsed));

        let summary = run.finish().await;
        assert_eq!(summary.total_actions, 2);
        assert_eq!(summary.compute_ops, 4);
        assert_eq!(summary.elapsed, Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_and_interrupt_shut_down_once() {
        let adapter = Arc::new(RecordingAdapter::new(ActivityCapabilities::FullySupported));
        let bounded = ActivityConfig {
            duration: Some(Duration::from_secs(2)),
            ..config(false, false, true, 1)
        };
        let run = ActivityScheduler::start(bounded, adapter.clone());

        run.cancelled().await;
        run.cancel_with(StopReason::Interrupted);
        run.cancel_with(StopReason::Interrupted);
        assert_eq!(run.stop_reason(), Some(StopReason::DurationElapsed));

        run.finish().await;
        assert_eq!(adapter.count(&AdapterCall::RequestSleepPrevention), 1);
        assert_eq!(adapter.count(&AdapterCall::ReleaseSleepPrevention), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_interrupt_before_timeout_wins() {
        let adapter = Arc::new(RecordingAdapter::new(ActivityCapabilities::FullySupported));
        let bounded = ActivityConfig {
            duration: Some(Duration::from_secs(10)),
            ..config(false, false, true, 1)
        };
        let run = ActivityScheduler::start(bounded, adapter.clone());

        time::sleep(Duration::from_millis(1_500)).await;
        run.cancel_with(StopReason::Interrupted);
        time::sleep(Duration::from_secs(20)).await;

        assert_eq!(run.stop_reason(), Some(StopReason::Interrupted));
        let summary = run.finish().await;
        assert_eq!(summary.total_actions, 1);
        assert_eq!(adapter.count(&AdapterCall::ReleaseSleepPrevention), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unschedulable_interval_falls_back_to_default() {
        let adapter = Arc::new(RecordingAdapter::new(ActivityCapabilities::FullySupported));
        for interval in [Duration::ZERO, Duration::from_secs(u64::MAX)] {
            let raw = ActivityConfig {
                interval,
                ..config(false, false, true, 1)
            };
            let run = ActivityScheduler::start(raw, adapter.clone());
            assert_eq!(run.config().interval, DEFAULT_INTERVAL);

            time::sleep(Duration::from_millis(7_000)).await;
            let summary = run.finish().await;
            assert_eq!(summary.total_actions, 2);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_handle_releases_sleep_prevention() {
        let adapter = Arc::new(RecordingAdapter::new(ActivityCapabilities::FullySupported));
        let run = ActivityScheduler::start(config(false, false, true, 1), adapter.clone());

        time::sleep(Duration::from_millis(1_500)).await;
        drop(run);

        assert_eq!(adapter.count(&AdapterCall::ReleaseSleepPrevention), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_run_still_counts_nothing() {
        let adapter = Arc::new(RecordingAdapter::new(ActivityCapabilities::ComputeOnly));
        let run = ActivityScheduler::start(config(true, false, false, 5), adapter.clone());

        time::sleep(Duration::from_millis(4_200)).await;
        let summary = run.finish().await;

        assert_eq!(summary.total_actions, 0);
        assert_eq!(summary.elapsed, Duration::from_secs(4));
        assert_eq!(summary.actions_per_second, 0.0);
        assert_eq!(adapter.input_call_count(), 0);
    }
}
