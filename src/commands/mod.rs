pub mod interactive;
pub mod run;

use crate::libs::config::{ActivityConfig, DEFAULT_INTENSITY};
use crate::libs::formatter::parse_duration;
use crate::libs::messages::Message;
use crate::libs::metadata;
use crate::libs::platform::{ActivityCapabilities, InputAdapter, NativeAdapter, RecordingAdapter};
use crate::libs::logging;
use crate::msg_print;
use anyhow::Result;
use clap::{ArgAction, Parser};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(author, about = "Keep your system awake with small, harmless activity", long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Interval between activity ticks (e.g. 3s, 500ms, 1m30s)
    #[arg(long, default_value = "3s", value_parser = parse_duration)]
    pub interval: Duration,

    /// How long to run; 0 runs until stopped
    #[arg(long, default_value = "0", value_parser = parse_duration)]
    pub duration: Duration,

    /// Enable mouse movements, clicks and scrolls
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, default_value_t = true, default_missing_value = "true")]
    pub mouse: bool,

    /// Enable keyboard simulation
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, default_value_t = true, default_missing_value = "true")]
    pub keyboard: bool,

    /// Enable memory and CPU operations
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, default_value_t = true, default_missing_value = "true")]
    pub memory: bool,

    /// Print every activity as it happens
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, default_value_t = false, default_missing_value = "true")]
    pub verbose: bool,

    /// Activity intensity level (1-5)
    #[arg(long, default_value_t = i64::from(DEFAULT_INTENSITY), allow_negative_numbers = true)]
    pub intensity: i64,

    /// Run in interactive mode
    #[arg(long)]
    pub interactive: bool,

    /// Record activities against a virtual screen instead of the real host
    #[arg(long)]
    pub dry_run: bool,

    /// Show version information
    #[arg(long)]
    pub version: bool,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        logging::init(cli.verbose)?;

        if cli.version {
            msg_print!(metadata::version_message());
            return Ok(());
        }

        msg_print!(Message::Banner(metadata::version().to_string()));

        let config = cli.config()?;
        let adapter = cli.adapter();

        if cli.interactive {
            interactive::cmd(config, adapter).await
        } else {
            run::cmd(config, adapter).await.map(|_| ())
        }
    }

    /// Builds the run configuration from the parsed flags.
    pub fn config(&self) -> Result<ActivityConfig> {
        let config = ActivityConfig::new(self.interval, self.duration, self.intensity)?.with_toggles(
            self.mouse,
            self.keyboard,
            self.memory,
            self.verbose,
        );
        Ok(config)
    }

    fn adapter(&self) -> Arc<dyn InputAdapter> {
        if self.dry_run {
            Arc::new(RecordingAdapter::new(ActivityCapabilities::FullySupported))
        } else {
            Arc::new(NativeAdapter::new())
        }
    }
}
