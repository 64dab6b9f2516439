use super::InputAdapter;
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use std::sync::Arc;

/// Scoped sleep prevention for one run.
///
/// Requests sleep prevention on creation and releases it exactly once,
/// either through [`SleepGuard::release`] or on drop. The release is issued
/// even when the request failed.
pub struct SleepGuard {
    adapter: Arc<dyn InputAdapter>,
    verbose: bool,
    released: bool,
}

impl SleepGuard {
    pub fn acquire(adapter: Arc<dyn InputAdapter>, verbose: bool) -> Self {
        match adapter.request_sleep_prevention() {
            Ok(()) => {
                tracing::info!("Sleep prevention requested");
                if verbose {
                    msg_print!(Message::SleepPreventionEnabled);
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Sleep prevention request failed");
                if verbose {
                    msg_warning!(Message::SleepPreventionFailed(e.to_string()));
                }
            }
        }
        Self {
            adapter,
            verbose,
            released: false,
        }
    }

    pub fn release(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        match self.adapter.release_sleep_prevention() {
            Ok(()) => {
                tracing::info!("Sleep prevention released");
                if self.verbose {
                    msg_print!(Message::SleepPreventionReleased);
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Sleep prevention release failed");
                if self.verbose {
                    msg_warning!(Message::SleepReleaseFailed(e.to_string()));
                }
            }
        }
    }
}

impl Drop for SleepGuard {
    fn drop(&mut self) {
        self.release_once();
    }
}
