//! Platform input adapter.
//!
//! The scheduler only sees the [`InputAdapter`] trait. [`NativeAdapter`]
//! talks to the host through `rdev` (plus a few Win32 calls on Windows);
//! [`RecordingAdapter`] records calls against a virtual screen and backs
//! both `--dry-run` and the test suite.
//!
//! Every input operation returns a human-readable description on success.
//! On hosts where injection is unavailable the adapter reports
//! [`ActivityCapabilities::ComputeOnly`] and the input operations fail with
//! [`PlatformError::Unsupported`]; the scheduler treats both as "skip".

pub mod guard;
pub mod native;
pub mod power;
pub mod recording;

pub use guard::SleepGuard;
pub use native::NativeAdapter;
pub use power::PowerInhibitor;
pub use recording::{AdapterCall, RecordingAdapter};

use crate::libs::error::PlatformError;
use rand::Rng;
use std::f64::consts::TAU;
use std::fmt;

/// Cursor displacement range, in screen units.
pub const MIN_CURSOR_STEP: u32 = 100;
pub const MAX_CURSOR_STEP: u32 = 300;

/// One wheel notch in the Win32 `mouseData` convention.
pub const WHEEL_DELTA: i32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityCapabilities {
    /// Pointer and keyboard injection plus compute activities.
    FullySupported,
    /// Only memory/CPU activities can run.
    ComputeOnly,
}

impl ActivityCapabilities {
    pub fn supports_input(self) -> bool {
        matches!(self, ActivityCapabilities::FullySupported)
    }
}

/// Host-facing capability surface used by the scheduler.
///
/// Implementations must be idempotent for the sleep-prevention pair:
/// repeated or out-of-order calls never error because of ordering alone.
pub trait InputAdapter: Send + Sync {
    fn capabilities(&self) -> ActivityCapabilities;

    /// Moves the pointer 100-300 units in a random direction, clamped to the screen.
    fn move_cursor(&self) -> Result<String, PlatformError>;

    /// Press-then-release of the primary button, without moving.
    fn click_primary_button(&self) -> Result<String, PlatformError>;

    /// A single wheel notch, up or down at random.
    fn scroll_wheel(&self) -> Result<String, PlatformError>;

    /// Press-then-release of a random key from [`BENIGN_KEYS`].
    fn press_benign_key(&self) -> Result<String, PlatformError>;

    fn request_sleep_prevention(&self) -> Result<(), PlatformError>;

    fn release_sleep_prevention(&self) -> Result<(), PlatformError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenBounds {
    pub width: u64,
    pub height: u64,
}

impl ScreenBounds {
    pub fn new(width: u64, height: u64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (i64, i64) {
        (to_coordinate(self.width / 2), to_coordinate(self.height / 2))
    }

    /// Clamps a point into `[0, width-1] x [0, height-1]`.
    pub fn clamp(&self, (x, y): (i64, i64)) -> (i64, i64) {
        let max_x = to_coordinate(self.width.saturating_sub(1));
        let max_y = to_coordinate(self.height.saturating_sub(1));
        (x.clamp(0, max_x), y.clamp(0, max_y))
    }
}

fn to_coordinate(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Draws a step length in `[MIN_CURSOR_STEP, MAX_CURSOR_STEP]` and an angle in `[0, 2π)`.
pub fn random_displacement<R: Rng + ?Sized>(rng: &mut R) -> (f64, f64) {
    let distance = f64::from(rng.gen_range(MIN_CURSOR_STEP..=MAX_CURSOR_STEP));
    let angle = rng.gen_range(0.0..TAU);
    (distance, angle)
}

/// Applies a polar displacement to `from` and clamps the result to `bounds`.
pub fn displaced_position(from: (i64, i64), distance: f64, angle: f64, bounds: ScreenBounds) -> (i64, i64) {
    let dx = (distance * angle.cos()) as i64;
    let dy = (distance * angle.sin()) as i64;
    bounds.clamp((from.0.saturating_add(dx), from.1.saturating_add(dy)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    Up,
    Down,
}

impl WheelDirection {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            WheelDirection::Up
        } else {
            WheelDirection::Down
        }
    }

    /// Signed notch count, positive away from the user.
    pub fn notches(self) -> i64 {
        match self {
            WheelDirection::Up => 1,
            WheelDirection::Down => -1,
        }
    }

    /// Wheel delta as the unsigned `mouseData` field Win32 expects.
    ///
    /// Negative deltas are stored in two's complement: one notch down is
    /// `0xFFFF_FF88`.
    pub fn mouse_data(self) -> u32 {
        let delta = WHEEL_DELTA * self.notches() as i32;
        delta as u32
    }
}

impl fmt::Display for WheelDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WheelDirection::Up => write!(f, "up"),
            WheelDirection::Down => write!(f, "down"),
        }
    }
}

/// Keys that have no visible effect on the host when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenignKey {
    F13,
    F14,
    F15,
    ScrollLock,
}

pub const BENIGN_KEYS: [BenignKey; 4] = [BenignKey::F13, BenignKey::F14, BenignKey::F15, BenignKey::ScrollLock];

impl BenignKey {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        BENIGN_KEYS[rng.gen_range(0..BENIGN_KEYS.len())]
    }
}

impl fmt::Display for BenignKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BenignKey::F13 => "F13",
            BenignKey::F14 => "F14",
            BenignKey::F15 => "F15",
            BenignKey::ScrollLock => "ScrollLock",
        };
        write!(f, "{}", name)
    }
}
