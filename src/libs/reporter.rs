//! Console reporters that poll [`ActivityStats`] while a run is active.
//!
//! Exactly one reporter runs per run: a progress bar for bounded runs, a
//! live stats line for unbounded ones. Both stop when the run's
//! cancellation token fires.

use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::libs::scheduler::RunHandle;
use crate::libs::stats::{ActivityStats, StatsSnapshot};
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

pub const PROGRESS_POLL: Duration = Duration::from_secs(1);
pub const LIVE_STATS_POLL: Duration = Duration::from_secs(5);
pub const PROGRESS_WIDTH: usize = 30;

/// Spawns the reporter matching the run's configuration.
pub fn spawn(run: &RunHandle) -> JoinHandle<()> {
    let stats = run.stats();
    let cancel = run.token();
    match run.config().duration {
        Some(total) => tokio::spawn(run_progress(stats, total, cancel)),
        None => tokio::spawn(run_live_stats(stats, cancel)),
    }
}

/// Redraws the progress bar every second; on cancellation draws it full.
pub async fn run_progress(stats: Arc<ActivityStats>, total: Duration, cancel: CancellationToken) {
    let mut ticker = time::interval_at(Instant::now() + PROGRESS_POLL, PROGRESS_POLL);
    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                redraw(&render_progress(total, total, PROGRESS_WIDTH));
                println!();
                return;
            }
            _ = ticker.tick() => {
                redraw(&render_progress(stats.elapsed(), total, PROGRESS_WIDTH));
            }
        }
    }
}

/// Rewrites the live stats line every five seconds.
pub async fn run_live_stats(stats: Arc<ActivityStats>, cancel: CancellationToken) {
    let mut ticker = time::interval_at(Instant::now() + LIVE_STATS_POLL, LIVE_STATS_POLL);
    let mut drawn = false;
    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                if drawn {
                    println!();
                }
                return;
            }
            _ = ticker.tick() => {
                redraw(&render_live_stats(&stats.snapshot()));
                drawn = true;
            }
        }
    }
}

/// `⏳ Progress ▐█████░░░░░▌ 30/60 sec (50%)`, clamped at 100%.
pub fn render_progress(elapsed: Duration, total: Duration, width: usize) -> String {
    let total_secs = total.as_secs().max(1);
    let done = elapsed.as_secs().min(total_secs);
    let filled = usize::try_from(done * width as u64 / total_secs).unwrap_or(width).min(width);
    format!(
        "{} ▐{}{}▌ {}/{} sec ({}%)",
        Message::ProgressLabel,
        "█".repeat(filled),
        "░".repeat(width - filled),
        done,
        total_secs,
        done * 100 / total_secs
    )
}

pub fn render_live_stats(snapshot: &StatsSnapshot) -> String {
    Message::LiveStats {
        elapsed: format_duration(&Duration::from_secs(snapshot.elapsed.as_secs())),
        actions: snapshot.total_actions,
        last: snapshot.last_action.clone(),
    }
    .to_string()
}

fn redraw(line: &str) {
    let mut stdout = io::stdout().lock();
    let _ = write!(stdout, "\r{}", line);
    let _ = stdout.flush();
}
