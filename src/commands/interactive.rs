use crate::commands::run;
use crate::libs::config::ActivityConfig;
use crate::libs::error::ConfigError;
use crate::libs::formatter::{format_duration, format_run_length};
use crate::libs::messages::Message;
use crate::libs::platform::InputAdapter;
use crate::libs::view::View;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EditSettings,
    StartRun,
    ShowStatus,
    ShowHelp,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::EditSettings,
        MenuChoice::StartRun,
        MenuChoice::ShowStatus,
        MenuChoice::ShowHelp,
        MenuChoice::Quit,
    ];

    pub fn label(self) -> Message {
        match self {
            MenuChoice::EditSettings => Message::MenuEditSettings,
            MenuChoice::StartRun => Message::MenuStartRun,
            MenuChoice::ShowStatus => Message::MenuShowStatus,
            MenuChoice::ShowHelp => Message::MenuShowHelp,
            MenuChoice::Quit => Message::MenuQuit,
        }
    }
}

/// Menu loop. Settings persist between runs for the life of the process.
pub async fn cmd(mut config: ActivityConfig, adapter: Arc<dyn InputAdapter>) -> Result<()> {
    let labels: Vec<String> = MenuChoice::ALL.iter().map(|choice| choice.label().to_string()).collect();

    loop {
        msg_print!(Message::MenuTitle, true);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::MenuPrompt.to_string())
            .items(&labels)
            .default(0)
            .interact()?;

        match MenuChoice::ALL.get(selection).copied().unwrap_or(MenuChoice::Quit) {
            MenuChoice::EditSettings => config = edit_settings(config)?,
            MenuChoice::StartRun => {
                run::cmd(config.clone(), Arc::clone(&adapter)).await?;
            }
            MenuChoice::ShowStatus => {
                msg_print!(Message::StatusTitle, true);
                View::status(&config);
            }
            MenuChoice::ShowHelp => {
                msg_print!(Message::HelpTitle, true);
                msg_print!(Message::HelpText);
            }
            MenuChoice::Quit => {
                msg_print!(Message::Goodbye, true);
                return Ok(());
            }
        }
    }
}

fn edit_settings(config: ActivityConfig) -> Result<ActivityConfig> {
    let theme = ColorfulTheme::default();
    msg_print!(Message::SettingsTitle, true);

    let input = prompt(&theme, Message::PromptInterval(format_duration(&config.interval)))?;
    let config = apply_edit(config, &input, ActivityConfig::with_interval_input, |c| {
        Message::IntervalSet(format_duration(&c.interval))
    });

    let input = prompt(&theme, Message::PromptIntensity(config.intensity))?;
    let config = apply_edit(config, &input, ActivityConfig::with_intensity_input, |c| {
        Message::IntensitySet(c.intensity)
    });

    let input = prompt(&theme, Message::PromptDuration(format_run_length(config.duration)))?;
    let config = apply_edit(config, &input, ActivityConfig::with_duration_minutes_input, |c| {
        Message::DurationSet(format_run_length(c.duration))
    });

    let toggles = [
        Message::ToggleMouse.to_string(),
        Message::ToggleKeyboard.to_string(),
        Message::ToggleMemory.to_string(),
        Message::ToggleVerbose.to_string(),
    ];
    let current = [
        config.mouse_enabled,
        config.keyboard_enabled,
        config.memory_enabled,
        config.verbose,
    ];
    let chosen = MultiSelect::with_theme(&theme)
        .with_prompt(Message::PromptToggles.to_string())
        .items(&toggles)
        .defaults(&current)
        .interact()?;
    let config = config.with_toggles(
        chosen.contains(&0),
        chosen.contains(&1),
        chosen.contains(&2),
        chosen.contains(&3),
    );

    msg_success!(Message::SettingsUpdated);
    Ok(config)
}

fn prompt(theme: &ColorfulTheme, message: Message) -> Result<String> {
    let input = Input::<String>::with_theme(theme)
        .with_prompt(message.to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}

/// Applies one settings edit. Empty input keeps the value silently; invalid
/// input is reported and the previous config is returned unchanged.
pub fn apply_edit<F, M>(config: ActivityConfig, input: &str, setter: F, confirmation: M) -> ActivityConfig
where
    F: Fn(&ActivityConfig, &str) -> Result<ActivityConfig, ConfigError>,
    M: Fn(&ActivityConfig) -> Message,
{
    if input.trim().is_empty() {
        return config;
    }
    match setter(&config, input) {
        Ok(updated) => {
            msg_success!(confirmation(&updated));
            updated
        }
        Err(e) => {
            msg_error!(Message::InvalidSetting(e.to_string()));
            config
        }
    }
}
