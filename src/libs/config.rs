//! Run configuration for the activity scheduler.
//!
//! An [`ActivityConfig`] is built once from command-line flags and is never
//! mutated while a run is active: interactive settings edits go through the
//! `with_*` methods, each of which returns a fresh value (or a
//! [`ConfigError`] leaving the old one untouched).
//!
//! ```rust
//! use awaker::libs::config::ActivityConfig;
//!
//! let config = ActivityConfig::default();
//! let edited = config.with_intensity_input("4").unwrap();
//! assert_eq!(edited.intensity, 4);
//! assert!(config.with_intensity_input("9").is_err());
//! ```

use crate::libs::error::ConfigError;
use std::time::{Duration, Instant};

pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 5;
pub const DEFAULT_INTENSITY: u8 = 2;
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(3);

/// Tunable parameters for a single scheduler run.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityConfig {
    /// Time between two ticks. Always greater than zero.
    pub interval: Duration,
    /// Total run length; `None` runs until cancelled.
    pub duration: Option<Duration>,
    /// Activity invocations per tick, within `MIN_INTENSITY..=MAX_INTENSITY`.
    pub intensity: u8,
    pub mouse_enabled: bool,
    pub keyboard_enabled: bool,
    /// Memory and CPU churn.
    pub memory_enabled: bool,
    pub verbose: bool,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            duration: None,
            intensity: DEFAULT_INTENSITY,
            mouse_enabled: true,
            keyboard_enabled: true,
            memory_enabled: true,
            verbose: false,
        }
    }
}

impl ActivityConfig {
    /// Builds a config from raw flag values.
    ///
    /// A zero `duration` means unbounded. Intensity is clamped into range
    /// rather than rejected. A zero interval, or one too far out to schedule,
    /// is an error.
    pub fn new(interval: Duration, duration: Duration, intensity: i64) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        if !interval_fits(interval) {
            return Err(ConfigError::IntervalTooLarge(format!("{:?}", interval)));
        }
        Ok(Self {
            interval,
            duration: (!duration.is_zero()).then_some(duration),
            intensity: clamp_intensity(intensity),
            ..Self::default()
        })
    }

    pub fn is_bounded(&self) -> bool {
        self.duration.is_some()
    }

    /// True when none of the capability toggles is on; every tick is a no-op.
    pub fn nothing_enabled(&self) -> bool {
        !(self.mouse_enabled || self.keyboard_enabled || self.memory_enabled)
    }

    /// Applies an interval typed as whole seconds. Empty input keeps the value.
    pub fn with_interval_input(&self, input: &str) -> Result<Self, ConfigError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(self.clone());
        }
        match input.parse::<u64>() {
            Ok(seconds) if seconds > 0 && interval_fits(Duration::from_secs(seconds)) => Ok(Self {
                interval: Duration::from_secs(seconds),
                ..self.clone()
            }),
            _ => Err(ConfigError::InvalidInterval(input.to_string())),
        }
    }

    /// Applies an intensity level. Unlike flag parsing, out-of-range input is rejected.
    pub fn with_intensity_input(&self, input: &str) -> Result<Self, ConfigError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(self.clone());
        }
        match input.parse::<u8>() {
            Ok(level) if (MIN_INTENSITY..=MAX_INTENSITY).contains(&level) => Ok(Self {
                intensity: level,
                ..self.clone()
            }),
            _ => Err(ConfigError::InvalidIntensity(input.to_string())),
        }
    }

    /// Applies a run length typed as whole minutes, `0` meaning unbounded.
    pub fn with_duration_minutes_input(&self, input: &str) -> Result<Self, ConfigError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(self.clone());
        }
        let invalid = || ConfigError::InvalidDurationMinutes(input.to_string());
        let seconds = input
            .parse::<u64>()
            .map_err(|_| invalid())?
            .checked_mul(60)
            .ok_or_else(invalid)?;
        Ok(Self {
            duration: (seconds > 0).then(|| Duration::from_secs(seconds)),
            ..self.clone()
        })
    }

    /// Returns a copy with the capability toggles and verbose flag replaced.
    pub fn with_toggles(&self, mouse: bool, keyboard: bool, memory: bool, verbose: bool) -> Self {
        Self {
            mouse_enabled: mouse,
            keyboard_enabled: keyboard,
            memory_enabled: memory,
            verbose,
            ..self.clone()
        }
    }

    /// Restores the construction invariants on a config built by hand:
    /// intensity back into range, a zero or unschedulable interval replaced
    /// by [`DEFAULT_INTERVAL`].
    pub fn normalized(self) -> Self {
        let interval = if self.interval.is_zero() || !interval_fits(self.interval) {
            DEFAULT_INTERVAL
        } else {
            self.interval
        };
        Self {
            interval,
            intensity: clamp_intensity(i64::from(self.intensity)),
            ..self
        }
    }
}

/// Whether a tick period can be added to the current instant.
pub fn interval_fits(interval: Duration) -> bool {
    Instant::now().checked_add(interval).is_some()
}

/// Clamps a raw intensity into `MIN_INTENSITY..=MAX_INTENSITY`.
pub fn clamp_intensity(raw: i64) -> u8 {
    raw.clamp(i64::from(MIN_INTENSITY), i64::from(MAX_INTENSITY)) as u8
}
