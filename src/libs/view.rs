use super::config::ActivityConfig;
use super::formatter::{format_duration, format_run_length};
use super::messages::Message;
use super::summary::Summary;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Settings table for the interactive "show status" entry.
    pub fn status(config: &ActivityConfig) {
        let mut table = Table::new();
        table.add_row(row![Message::StatusInterval, format_duration(&config.interval)]);
        table.add_row(row![Message::StatusIntensity, format!("{}/5", config.intensity)]);
        table.add_row(row![Message::StatusDuration, format_run_length(config.duration)]);
        table.add_row(row![Message::StatusMouse, on_off(config.mouse_enabled)]);
        table.add_row(row![Message::StatusKeyboard, on_off(config.keyboard_enabled)]);
        table.add_row(row![Message::StatusMemory, on_off(config.memory_enabled)]);
        table.add_row(row![Message::StatusVerbose, on_off(config.verbose)]);
        table.add_row(row![
            Message::StatusPlatform,
            format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH)
        ]);
        table.printstd();
    }

    pub fn summary(summary: &Summary) {
        let mut table = Table::new();
        table.add_row(row![Message::SummaryElapsed, summary.elapsed_text()]);
        table.add_row(row![Message::SummaryTotalActions, summary.total_actions]);
        table.add_row(row![Message::SummaryMouseActions, summary.mouse_actions]);
        table.add_row(row![Message::SummaryKeyPresses, summary.key_actions]);
        table.add_row(row![Message::SummaryComputeOperations, summary.compute_ops]);
        table.add_row(row![Message::SummaryRate, summary.rate_text()]);
        table.printstd();
    }
}

fn on_off(enabled: bool) -> Message {
    if enabled {
        Message::StatusOn
    } else {
        Message::StatusOff
    }
}
