#[cfg(test)]
mod tests {
    use awaker::libs::platform::{
        displaced_position, random_displacement, ActivityCapabilities, AdapterCall, InputAdapter, PowerInhibitor,
        RecordingAdapter, ScreenBounds, SleepGuard, MAX_CURSOR_STEP, MIN_CURSOR_STEP,
    };
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::TAU;
    use std::sync::Arc;
    use test_context::{test_context, TestContext};

    struct ScreenContext {
        bounds: ScreenBounds,
        corners: Vec<(i64, i64)>,
    }

    impl TestContext for ScreenContext {
        fn setup() -> Self {
            let bounds = ScreenBounds::new(1280, 720);
            let corners = vec![(0, 0), (1279, 0), (0, 719), (1279, 719), bounds.center()];
            ScreenContext { bounds, corners }
        }
    }

    fn inside(bounds: ScreenBounds, (x, y): (i64, i64)) -> bool {
        x >= 0 && y >= 0 && x <= bounds.width as i64 - 1 && y <= bounds.height as i64 - 1
    }

    #[test_context(ScreenContext)]
    #[test]
    fn test_displacement_never_leaves_screen(ctx: &mut ScreenContext) {
        let mut rng = StdRng::seed_from_u64(11);
        for &start in &ctx.corners {
            for _ in 0..2_000 {
                let (distance, angle) = random_displacement(&mut rng);
                let next = displaced_position(start, distance, angle, ctx.bounds);
                assert!(inside(ctx.bounds, next), "{:?} -> {:?}", start, next);
            }
        }
    }

    #[test_context(ScreenContext)]
    #[test]
    fn test_off_screen_start_is_clamped(ctx: &mut ScreenContext) {
        let mut rng = StdRng::seed_from_u64(5);
        for start in [(-5_000, -5_000), (10_000, 10_000), (i64::MAX, i64::MIN)] {
            let distance = f64::from(rng.gen_range(MIN_CURSOR_STEP..=MAX_CURSOR_STEP));
            let angle = rng.gen_range(0.0..TAU);
            let next = displaced_position(start, distance, angle, ctx.bounds);
            assert!(inside(ctx.bounds, next));
        }
    }

    #[test_context(ScreenContext)]
    #[test]
    fn test_recording_adapter_walks_inside_screen(ctx: &mut ScreenContext) {
        for (seed, &start) in ctx.corners.iter().enumerate() {
            let adapter = RecordingAdapter::with_screen(ActivityCapabilities::FullySupported, ctx.bounds)
                .with_seed(seed as u64)
                .with_cursor(start);
            for _ in 0..500 {
                adapter.move_cursor().unwrap();
                assert!(inside(ctx.bounds, adapter.cursor()));
            }
            assert_eq!(adapter.input_call_count(), 500);
        }
    }

    #[test]
    fn test_move_description_matches_position() {
        let adapter = RecordingAdapter::new(ActivityCapabilities::FullySupported).with_seed(3);
        let description = adapter.move_cursor().unwrap();
        let (x, y) = adapter.cursor();
        assert_eq!(description, format!("Cursor moved to ({}, {})", x, y));
        assert_eq!(adapter.calls(), vec![AdapterCall::MoveCursor { x, y }]);
    }

    #[test]
    fn test_compute_only_adapter_rejects_input() {
        let adapter = RecordingAdapter::new(ActivityCapabilities::ComputeOnly);
        assert!(adapter.move_cursor().is_err());
        assert!(adapter.click_primary_button().is_err());
        assert!(adapter.scroll_wheel().is_err());
        assert!(adapter.press_benign_key().is_err());
        assert!(adapter.calls().is_empty());
    }

    #[test]
    fn test_sleep_prevention_is_idempotent() {
        let adapter = RecordingAdapter::new(ActivityCapabilities::FullySupported);
        assert!(adapter.request_sleep_prevention().is_ok());
        assert!(adapter.request_sleep_prevention().is_ok());
        assert!(adapter.release_sleep_prevention().is_ok());
        assert!(adapter.release_sleep_prevention().is_ok());
    }

    #[test]
    fn test_sleep_guard_releases_exactly_once() {
        let adapter = Arc::new(RecordingAdapter::new(ActivityCapabilities::FullySupported));

        let guard = SleepGuard::acquire(adapter.clone(), false);
        guard.release();
        {
            let _scoped = SleepGuard::acquire(adapter.clone(), false);
        }

        assert_eq!(adapter.count(&AdapterCall::RequestSleepPrevention), 2);
        assert_eq!(adapter.count(&AdapterCall::ReleaseSleepPrevention), 2);
    }

    #[test]
    fn test_unsupported_power_backend() {
        let inhibitor = PowerInhibitor::unsupported();
        assert!(inhibitor.acquire().is_err());
        assert!(!inhibitor.is_held());
        assert!(inhibitor.release().is_ok());
        assert!(inhibitor.release().is_ok());
    }
}
