//! Activity scheduler: the timed loop that keeps the host busy.
//!
//! A run is started with [`ActivityScheduler::start`], which returns a
//! [`RunHandle`]. Behind the handle:
//!
//! - a tick-driver task fires every `config.interval`; each tick performs
//!   `config.intensity` activity invocations chosen with [`pick`], sleeping
//!   [`ACTION_DELAY`] between them, then counts one tick in the stats;
//! - an optional timer task cancels the run once `config.duration` elapses;
//! - a [`SleepGuard`] holds sleep prevention for the lifetime of the run.
//!
//! All tasks share one [`CancellationToken`]. The first cancellation source
//! records its [`StopReason`]; later ones are no-ops. [`RunHandle::finish`]
//! is the single shutdown path: it waits for the tasks, releases sleep
//! prevention and returns the [`Summary`].
//!
//! Activity failures never leave the tick. They are logged (and printed in
//! verbose mode) and the invocation counts as skipped. Each invocation runs
//! on the blocking pool, so input injection and compute churn never stall
//! the runtime; a panic inside one is reported the same way as a failure.

use crate::libs::activity::{enabled_activities, pick, Activity};
use crate::libs::compute::{cpu_churn, memory_churn};
use crate::libs::config::ActivityConfig;
use crate::libs::error::PlatformError;
use crate::libs::messages::Message;
use crate::libs::platform::{InputAdapter, SleepGuard};
use crate::libs::stats::ActivityStats;
use crate::libs::summary::Summary;
use crate::{msg_error, msg_print, msg_warning};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tokio::task::{self, JoinHandle};
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Pause between two invocations inside the same tick.
pub const ACTION_DELAY: Duration = Duration::from_millis(100);

/// Why a run ended. Only the first cause is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// SIGINT/SIGTERM or Ctrl+C.
    Interrupted,
    /// The configured duration elapsed.
    DurationElapsed,
    /// The caller stopped the run.
    Cancelled,
}

pub struct ActivityScheduler {
    config: ActivityConfig,
    adapter: Arc<dyn InputAdapter>,
    stats: Arc<ActivityStats>,
    rng: StdRng,
    action_delay: Duration,
}

impl ActivityScheduler {
    /// Configs built by hand are normalized first, so intensity is always in
    /// range and the interval is always schedulable.
    pub fn new(config: ActivityConfig, adapter: Arc<dyn InputAdapter>, stats: Arc<ActivityStats>) -> Self {
        Self {
            config: config.normalized(),
            adapter,
            stats,
            rng: StdRng::from_entropy(),
            action_delay: ACTION_DELAY,
        }
    }

    /// Replaces the random source, e.g. with a seeded one for reproducible selection.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_action_delay(mut self, delay: Duration) -> Self {
        self.action_delay = delay;
        self
    }

    pub fn stats(&self) -> Arc<ActivityStats> {
        Arc::clone(&self.stats)
    }

    /// Starts a run on the current tokio runtime.
    pub fn start(config: ActivityConfig, adapter: Arc<dyn InputAdapter>) -> RunHandle {
        let stats = Arc::new(ActivityStats::new());
        Self::new(config, adapter, stats).spawn()
    }

    /// Starts a run with this scheduler's settings (rng, delay).
    pub fn spawn(self) -> RunHandle {
        let config = self.config.clone();
        let stats = Arc::clone(&self.stats);
        let cancel = CancellationToken::new();
        let stop_reason: Arc<OnceLock<StopReason>> = Arc::new(OnceLock::new());

        info!(
            interval_ms = config.interval.as_millis() as u64,
            intensity = config.intensity,
            duration = ?config.duration,
            "Starting activity run"
        );

        let sleep_guard = SleepGuard::acquire(Arc::clone(&self.adapter), config.verbose);

        let timer = config.duration.map(|duration| {
            let cancel = cancel.clone();
            let stop_reason = Arc::clone(&stop_reason);
            tokio::spawn(async move {
                tokio::select! {
                    _ = cancel.cancelled() => {}
                    _ = time::sleep(duration) => {
                        let _ = stop_reason.set(StopReason::DurationElapsed);
                        cancel.cancel();
                    }
                }
            })
        });

        let driver = {
            let cancel = cancel.clone();
            tokio::spawn(async move { self.drive(cancel).await })
        };

        RunHandle {
            config,
            stats,
            cancel,
            stop_reason,
            driver: Some(driver),
            timer,
            sleep_guard: Some(sleep_guard),
        }
    }

    async fn drive(mut self, cancel: CancellationToken) {
        let period = self.config.interval;
        let Some(first_tick) = Instant::now().checked_add(period) else {
            warn!(?period, "Interval cannot be scheduled, no ticks will run");
            cancel.cancelled().await;
            return;
        };
        let mut ticker = time::interval_at(first_tick, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!("Tick driver cancelled");
                    break;
                }
                _ = ticker.tick() => {
                    self.tick().await;
                }
            }
        }
    }

    /// Runs one tick and returns how many activities were invoked.
    ///
    /// Returns `0` without touching the stats when no activity is enabled.
    pub async fn tick(&mut self) -> usize {
        let activities = enabled_activities(&self.config, self.adapter.capabilities());
        if activities.is_empty() {
            debug!("{}", Message::NoActivitiesEnabled);
            return 0;
        }

        let count = usize::from(self.config.intensity);
        let mut invoked = 0;
        for index in 0..count {
            let Some(activity) = pick(&activities, &mut self.rng) else {
                break;
            };
            self.invoke(activity).await;
            invoked += 1;

            if index + 1 < count && !self.action_delay.is_zero() {
                time::sleep(self.action_delay).await;
            }
        }

        self.stats.record_tick();
        debug!(invoked, total = self.stats.total_actions(), "Tick complete");
        invoked
    }

    async fn invoke(&mut self, activity: Activity) {
        let adapter = Arc::clone(&self.adapter);
        let intensity = self.config.intensity;
        let mut rng = StdRng::from_rng(&mut self.rng).unwrap_or_else(|_| StdRng::from_entropy());

        let outcome = task::spawn_blocking(move || perform(adapter.as_ref(), activity, intensity, &mut rng))
            .await
            .unwrap_or_else(|e| Err(PlatformError::Aborted(e.to_string())));

        match outcome {
            Ok((description, detail)) => {
                if self.config.verbose {
                    msg_print!(format!("{} {}", icon(activity), detail.as_deref().unwrap_or(&description)));
                }
                self.stats.record(activity.category(), description);
            }
            Err(e) => {
                debug!(%activity, error = %e, "Activity skipped");
                if self.config.verbose {
                    msg_warning!(Message::ActivityFailed {
                        activity: activity.to_string(),
                        error: e.to_string(),
                    });
                }
            }
        }
    }
}

/// Runs one activity. Returns the stats description and, for compute work,
/// a longer verbose line.
fn perform(
    adapter: &dyn InputAdapter,
    activity: Activity,
    intensity: u8,
    rng: &mut StdRng,
) -> Result<(String, Option<String>), PlatformError> {
    match activity {
        Activity::MoveCursor => adapter.move_cursor().map(|d| (d, None)),
        Activity::ClickPrimary => adapter.click_primary_button().map(|d| (d, None)),
        Activity::ScrollWheel => adapter.scroll_wheel().map(|d| (d, None)),
        Activity::PressBenignKey => adapter.press_benign_key().map(|d| (d, None)),
        Activity::MemoryChurn => {
            let churn = memory_churn(rng);
            Ok((
                Message::MemoryOperation(churn.items).to_string(),
                Some(
                    Message::MemoryOperationDetailed {
                        items: churn.items,
                        checksum: churn.checksum,
                    }
                    .to_string(),
                ),
            ))
        }
        Activity::CpuChurn => {
            let churn = cpu_churn(intensity);
            Ok((
                Message::CpuOperation(churn.iterations).to_string(),
                Some(
                    Message::CpuOperationDetailed {
                        iterations: churn.iterations,
                        result: churn.result,
                    }
                    .to_string(),
                ),
            ))
        }
    }
}

fn icon(activity: Activity) -> &'static str {
    match activity {
        Activity::MoveCursor | Activity::ClickPrimary | Activity::ScrollWheel => "🖱️ ",
        Activity::PressBenignKey => "⌨️ ",
        Activity::MemoryChurn => "🧠",
        Activity::CpuChurn => "⚡",
    }
}

/// Handle to a running (or stopping) scheduler run. Not reusable.
pub struct RunHandle {
    config: ActivityConfig,
    stats: Arc<ActivityStats>,
    cancel: CancellationToken,
    stop_reason: Arc<OnceLock<StopReason>>,
    driver: Option<JoinHandle<()>>,
    timer: Option<JoinHandle<()>>,
    sleep_guard: Option<SleepGuard>,
}

impl RunHandle {
    pub fn config(&self) -> &ActivityConfig {
        &self.config
    }

    pub fn stats(&self) -> Arc<ActivityStats> {
        Arc::clone(&self.stats)
    }

    /// A clone of the shared cancellation signal, for reporters.
    pub fn token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel_with(StopReason::Cancelled);
    }

    /// Cancels the run, recording `reason` unless another cause got there first.
    pub fn cancel_with(&self, reason: StopReason) {
        if self.stop_reason.set(reason).is_ok() {
            info!(?reason, "Stopping activity run");
        }
        self.cancel.cancel();
    }

    /// True once any cancellation source has fired.
    pub fn is_done(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub async fn cancelled(&self) {
        self.cancel.cancelled().await;
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason.get().copied()
    }

    /// Stops the run if needed, waits for its tasks, releases sleep
    /// prevention and returns the final summary.
    pub async fn finish(mut self) -> Summary {
        self.cancel_with(StopReason::Cancelled);

        if let Some(driver) = self.driver.take() {
            if let Err(e) = driver.await {
                msg_error!(Message::RunTaskPanicked(e.to_string()));
            }
        }
        if let Some(timer) = self.timer.take() {
            let _ = timer.await;
        }
        if let Some(guard) = self.sleep_guard.take() {
            guard.release();
        }

        let summary = Summary::from_snapshot(&self.stats.snapshot());
        info!(
            elapsed_secs = summary.elapsed.as_secs(),
            total_actions = summary.total_actions,
            "Activity run finished"
        );
        summary
    }
}

impl Drop for RunHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
