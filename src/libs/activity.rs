//! Activity catalogue and per-tick selection.
//!
//! ## Activities
//!
//! | Activity         | Toggle   | Needs input injection | Counted as |
//! |------------------|----------|-----------------------|------------|
//! | `MoveCursor`     | mouse    | yes                   | mouse      |
//! | `ClickPrimary`   | mouse    | yes                   | mouse      |
//! | `ScrollWheel`    | mouse    | yes                   | mouse      |
//! | `PressBenignKey` | keyboard | yes                   | keyboard   |
//! | `MemoryChurn`    | memory   | no                    | compute    |
//! | `CpuChurn`       | memory   | no                    | compute    |
//!
//! A tick first filters this table against the config toggles and the
//! adapter's [`ActivityCapabilities`], then draws from what is left with
//! [`pick`], uniformly and with replacement.

use crate::libs::config::ActivityConfig;
use crate::libs::platform::ActivityCapabilities;
use crate::libs::stats::ActionCategory;
use rand::Rng;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    MoveCursor,
    ClickPrimary,
    ScrollWheel,
    PressBenignKey,
    MemoryChurn,
    CpuChurn,
}

impl Activity {
    pub const ALL: [Activity; 6] = [
        Activity::MoveCursor,
        Activity::ClickPrimary,
        Activity::ScrollWheel,
        Activity::PressBenignKey,
        Activity::MemoryChurn,
        Activity::CpuChurn,
    ];

    pub fn category(self) -> ActionCategory {
        match self {
            Activity::MoveCursor | Activity::ClickPrimary | Activity::ScrollWheel => ActionCategory::Mouse,
            Activity::PressBenignKey => ActionCategory::Keyboard,
            Activity::MemoryChurn | Activity::CpuChurn => ActionCategory::Compute,
        }
    }

    /// Whether the activity goes through the platform's input injection.
    pub fn requires_input(self) -> bool {
        !matches!(self.category(), ActionCategory::Compute)
    }

    fn enabled_by(self, config: &ActivityConfig) -> bool {
        match self.category() {
            ActionCategory::Mouse => config.mouse_enabled,
            ActionCategory::Keyboard => config.keyboard_enabled,
            ActionCategory::Compute => config.memory_enabled,
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Activity::MoveCursor => "Cursor move",
            Activity::ClickPrimary => "Primary click",
            Activity::ScrollWheel => "Wheel scroll",
            Activity::PressBenignKey => "Key press",
            Activity::MemoryChurn => "Memory operation",
            Activity::CpuChurn => "CPU operation",
        };
        write!(f, "{}", name)
    }
}

/// Activities allowed by both the user's toggles and the platform.
///
/// Input activities on a compute-only platform are dropped silently.
pub fn enabled_activities(config: &ActivityConfig, capabilities: ActivityCapabilities) -> Vec<Activity> {
    Activity::ALL
        .into_iter()
        .filter(|activity| activity.enabled_by(config))
        .filter(|activity| !activity.requires_input() || capabilities.supports_input())
        .collect()
}

/// Uniform choice with replacement; `None` only for an empty list.
pub fn pick<R: Rng + ?Sized>(activities: &[Activity], rng: &mut R) -> Option<Activity> {
    if activities.is_empty() {
        return None;
    }
    Some(activities[rng.gen_range(0..activities.len())])
}
