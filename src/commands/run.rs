use crate::libs::config::ActivityConfig;
use crate::libs::formatter::{format_duration, format_run_length};
use crate::libs::messages::Message;
use crate::libs::platform::InputAdapter;
use crate::libs::reporter;
use crate::libs::scheduler::{ActivityScheduler, RunHandle, StopReason};
use crate::libs::summary::Summary;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use std::sync::Arc;

/// Runs the scheduler until interrupted or the configured duration elapses,
/// then prints the final summary.
pub async fn cmd(config: ActivityConfig, adapter: Arc<dyn InputAdapter>) -> Result<Summary> {
    if !adapter.capabilities().supports_input() {
        msg_warning!(Message::PlatformComputeOnly);
        msg_info!(Message::PlatformComputeOnlyHint);
    }

    msg_print!(Message::RunStarting);
    let run = ActivityScheduler::start(config, adapter);
    print_started(&run);

    let reporter = reporter::spawn(&run);

    tokio::select! {
        _ = shutdown_signal() => run.cancel_with(StopReason::Interrupted),
        _ = run.cancelled() => {}
    }

    match run.stop_reason() {
        Some(StopReason::DurationElapsed) => msg_print!(Message::DurationReached, true),
        _ => msg_print!(Message::StopSignalReceived, true),
    }

    let summary = run.finish().await;
    if let Err(e) = reporter.await {
        msg_error!(Message::ReporterTaskPanicked(e.to_string()));
    }

    msg_print!(Message::SummaryTitle);
    View::summary(&summary);
    msg_success!(Message::RunStopped);

    Ok(summary)
}

fn print_started(run: &RunHandle) {
    let config = run.config();
    msg_success!(Message::RunStarted);
    msg_print!(Message::RunInterval(format_duration(&config.interval)));
    msg_print!(Message::RunIntensity(config.intensity));
    match config.duration {
        Some(_) => msg_print!(Message::RunDuration(format_run_length(config.duration))),
        None => msg_print!(Message::RunDurationUnbounded),
    }
    msg_print!(Message::RunStartedAt(
        run.stats().started_local().format("%H:%M:%S").to_string()
    ));
    msg_print!(Message::PressCtrlCToStop);
}

/// Resolves on SIGINT/SIGTERM (Ctrl+C on Windows).
///
/// If no handler can be installed it never resolves, leaving the duration
/// timer as the only way out.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let (mut sigterm, mut sigint) = match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
            (Ok(sigterm), Ok(sigint)) => (sigterm, sigint),
            (Err(e), _) | (_, Err(e)) => {
                msg_error!(Message::SignalHandlerFailed(e.to_string()));
                return std::future::pending().await;
            }
        };

        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }

    #[cfg(windows)]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            msg_error!(Message::SignalHandlerFailed(e.to_string()));
            std::future::pending::<()>().await;
        }
    }

    #[cfg(not(any(unix, windows)))]
    {
        msg_warning!(Message::SignalHandlingNotSupported);
        std::future::pending::<()>().await;
    }
}
