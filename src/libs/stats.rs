//! Live counters for a scheduler run.
//!
//! The scheduler's tick task is the only writer. Reporters and the final
//! summary read through [`ActivityStats::snapshot`], which may lag a write by
//! a few hundred milliseconds; counters are atomics so there is never a data
//! race, and the last-action text sits behind a `parking_lot` mutex.

use chrono::{DateTime, Local};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::time::Instant;

/// Per-invocation counter an activity is tallied under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionCategory {
    Mouse,
    Keyboard,
    Compute,
}

/// Counters for one run. A new run gets a new instance; nothing is reset.
#[derive(Debug)]
pub struct ActivityStats {
    started_at: Instant,
    started_local: DateTime<Local>,
    mouse_actions: AtomicU64,
    key_actions: AtomicU64,
    compute_ops: AtomicU64,
    total_actions: AtomicU64,
    last_action: Mutex<String>,
}

/// Point-in-time copy of [`ActivityStats`].
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub started_local: DateTime<Local>,
    pub elapsed: Duration,
    pub mouse_actions: u64,
    pub key_actions: u64,
    pub compute_ops: u64,
    /// One per non-empty tick, not one per invocation.
    pub total_actions: u64,
    pub last_action: String,
}

impl Default for ActivityStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityStats {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            started_local: Local::now(),
            mouse_actions: AtomicU64::new(0),
            key_actions: AtomicU64::new(0),
            compute_ops: AtomicU64::new(0),
            total_actions: AtomicU64::new(0),
            last_action: Mutex::new(String::new()),
        }
    }

    /// Tallies one successful activity invocation and remembers its description.
    pub fn record(&self, category: ActionCategory, description: impl Into<String>) {
        let counter = match category {
            ActionCategory::Mouse => &self.mouse_actions,
            ActionCategory::Keyboard => &self.key_actions,
            ActionCategory::Compute => &self.compute_ops,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        *self.last_action.lock() = description.into();
    }

    /// Tallies a completed tick.
    pub fn record_tick(&self) {
        self.total_actions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn started_local(&self) -> DateTime<Local> {
        self.started_local
    }

    pub fn total_actions(&self) -> u64 {
        self.total_actions.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            started_local: self.started_local,
            elapsed: self.elapsed(),
            mouse_actions: self.mouse_actions.load(Ordering::Relaxed),
            key_actions: self.key_actions.load(Ordering::Relaxed),
            compute_ops: self.compute_ops.load(Ordering::Relaxed),
            total_actions: self.total_actions.load(Ordering::Relaxed),
            last_action: self.last_action.lock().clone(),
        }
    }
}
