//! Typed error classes.
//!
//! Neither type is fatal to a run: [`ConfigError`] is reported while editing
//! settings and the previous value is kept, [`PlatformError`] is swallowed by
//! the scheduler and turns the failed activity into a skip.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("interval must be a positive whole number of seconds, got '{0}'")]
    InvalidInterval(String),
    #[error("interval must be greater than zero")]
    ZeroInterval,
    #[error("interval {0} is too large to schedule")]
    IntervalTooLarge(String),
    #[error("intensity must be between 1 and 5, got '{0}'")]
    InvalidIntensity(String),
    #[error("duration must be zero or a positive whole number of minutes, got '{0}'")]
    InvalidDurationMinutes(String),
    #[error("cannot parse duration '{0}' (expected e.g. 3s, 1m30s, 500ms, 2h)")]
    InvalidDuration(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// The host cannot perform this capability at all.
    #[error("{0} is not supported on this platform")]
    Unsupported(String),
    #[error("input simulation failed: {0}")]
    Simulate(String),
    #[error("cannot read display size: {0}")]
    Display(String),
    #[error("power state request failed: {0}")]
    Power(String),
    #[error("activity aborted: {0}")]
    Aborted(String),
}
