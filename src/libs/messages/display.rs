//! Display implementation for awaker messages.
//!
//! All user-facing wording is kept in this one match so the run command,
//! the interactive menu and verbose activity logs read the same way.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === APPLICATION MESSAGES ===
            Message::Banner(version) => format!(
                "╔══════════════════════════════════════════════════╗\n\
                 ║              ☕ AWAKER v{:<10}               ║\n\
                 ║            Keep your system awake                ║\n\
                 ╚══════════════════════════════════════════════════╝",
                version
            ),
            Message::Version {
                name,
                version,
                os,
                arch,
                profile,
            } => format!("{} v{}\nBuilt for {}/{} ({})", name, version, os, arch, profile),
            Message::Goodbye => "👋 Goodbye!".to_string(),

            // === RUN LIFECYCLE MESSAGES ===
            Message::RunStarting => "🚀 Starting activity...".to_string(),
            Message::RunStarted => "Activity started!".to_string(),
            Message::RunInterval(interval) => format!("⏱️  Interval: {}", interval),
            Message::RunIntensity(level) => format!("⚡ Intensity: {}/5", level),
            Message::RunDuration(duration) => format!("⏰ Duration: {}", duration),
            Message::RunDurationUnbounded => "⏰ Duration: unbounded".to_string(),
            Message::RunStartedAt(time) => format!("🕐 Started: {}", time),
            Message::PressCtrlCToStop => "Press Ctrl+C to stop...".to_string(),
            Message::StopSignalReceived => "⏹️  Stop signal received...".to_string(),
            Message::DurationReached => "⏰ Planned duration reached...".to_string(),
            Message::RunStopped => "Activity stopped.".to_string(),
            Message::RunTaskPanicked(error) => format!("Activity task terminated unexpectedly: {}", error),
            Message::ReporterTaskPanicked(error) => format!("Reporter task terminated unexpectedly: {}", error),

            // === PLATFORM MESSAGES ===
            Message::PlatformComputeOnly => "Input simulation is not available on this platform".to_string(),
            Message::PlatformComputeOnlyHint => "Only memory and CPU activities will run".to_string(),
            Message::CursorListenerFailed(error) => format!("Failed to listen for pointer events: {}. Retrying...", error),
            Message::CursorListenerGaveUp => "Pointer tracking disabled, cursor moves start from the screen centre".to_string(),
            Message::SleepPreventionEnabled => "💤 System sleep disabled".to_string(),
            Message::SleepPreventionReleased => "💤 System sleep enabled again".to_string(),
            Message::SleepPreventionFailed(error) => format!("Could not disable system sleep: {}", error),
            Message::SleepReleaseFailed(error) => format!("Could not re-enable system sleep: {}", error),
            Message::SleepPreventionUnsupported => "Sleep prevention".to_string(),
            Message::SignalHandlerFailed(error) => format!("Failed to install signal handler: {}", error),
            Message::SignalHandlingNotSupported => "Signal handling is not supported on this platform".to_string(),

            // === ACTIVITY MESSAGES ===
            Message::CursorMoved(x, y) => format!("Cursor moved to ({}, {})", x, y),
            Message::PrimaryButtonClicked => "Primary button clicked".to_string(),
            Message::WheelScrolled(direction) => format!("Wheel scrolled {}", direction),
            Message::KeyPressed(key) => format!("Key pressed: {}", key),
            Message::MemoryOperation(items) => format!("Memory operation ({} items)", items),
            Message::MemoryOperationDetailed { items, checksum } => {
                format!("Memory operation ({} items, sum: {:.2})", items, checksum)
            }
            Message::CpuOperation(iterations) => format!("CPU operation ({} iterations)", iterations),
            Message::CpuOperationDetailed { iterations, result } => {
                format!("CPU operation ({} iterations, result: {:.2})", iterations, result)
            }
            Message::ActivityFailed { activity, error } => format!("{} skipped: {}", activity, error),
            Message::NoActivitiesEnabled => "No activities enabled, tick skipped".to_string(),

            // === SUMMARY MESSAGES ===
            Message::SummaryTitle => "=== FINAL STATISTICS ===".to_string(),
            Message::SummaryElapsed => "⏱️  Total time".to_string(),
            Message::SummaryTotalActions => "🎯 Total actions".to_string(),
            Message::SummaryMouseActions => "🖱️  Mouse actions".to_string(),
            Message::SummaryKeyPresses => "⌨️  Key presses".to_string(),
            Message::SummaryComputeOperations => "🧠 Compute operations".to_string(),
            Message::SummaryRate => "📈 Average".to_string(),
            Message::LiveStats { elapsed, actions, last } => {
                format!("📊 Active: {} | Actions: {} | Last: {}", elapsed, actions, last)
            }
            Message::ProgressLabel => "⏳ Progress".to_string(),

            // === MENU MESSAGES ===
            Message::MenuTitle => "=== MAIN MENU ===".to_string(),
            Message::MenuEditSettings => "🔧 Edit settings".to_string(),
            Message::MenuStartRun => "🚀 Start activity".to_string(),
            Message::MenuShowStatus => "📊 Show status".to_string(),
            Message::MenuShowHelp => "❓ Help".to_string(),
            Message::MenuQuit => "🚪 Quit".to_string(),
            Message::MenuPrompt => "Choose an option".to_string(),

            // === SETTINGS MESSAGES ===
            Message::SettingsTitle => "=== SETTINGS ===".to_string(),
            Message::PromptInterval(current) => format!("Interval in seconds (current: {}, enter = keep)", current),
            Message::PromptIntensity(current) => format!("Intensity 1-5 (current: {}, enter = keep)", current),
            Message::PromptDuration(current) => {
                format!("Duration in minutes, 0 = unbounded (current: {}, enter = keep)", current)
            }
            Message::PromptToggles => "Enabled activities (space to toggle, enter to confirm)".to_string(),
            Message::IntervalSet(interval) => format!("Interval set to {}", interval),
            Message::IntensitySet(level) => format!("Intensity set to {}", level),
            Message::DurationSet(duration) => format!("Duration set to {}", duration),
            Message::SettingsUpdated => "Settings updated!".to_string(),
            Message::InvalidSetting(error) => format!("Invalid value: {}", error),
            Message::ToggleMouse => "Mouse movements".to_string(),
            Message::ToggleKeyboard => "Keyboard".to_string(),
            Message::ToggleMemory => "Memory/CPU operations".to_string(),
            Message::ToggleVerbose => "Verbose logging".to_string(),

            // === STATUS & HELP MESSAGES ===
            Message::StatusTitle => "=== CURRENT STATUS ===".to_string(),
            Message::StatusInterval => "🕐 Interval".to_string(),
            Message::StatusIntensity => "⚡ Intensity".to_string(),
            Message::StatusDuration => "⏱️  Duration".to_string(),
            Message::StatusMouse => "🖱️  Mouse".to_string(),
            Message::StatusKeyboard => "⌨️  Keyboard".to_string(),
            Message::StatusMemory => "🧠 Memory".to_string(),
            Message::StatusVerbose => "📝 Verbose".to_string(),
            Message::StatusPlatform => "💻 Platform".to_string(),
            Message::StatusOn => "ON".to_string(),
            Message::StatusOff => "OFF".to_string(),
            Message::HelpTitle => "=== HELP ===".to_string(),
            Message::HelpText => "This tool keeps your machine awake by performing small activities:\n\
                 \n\
                 🖱️  Mouse movements - moves the cursor, clicks and scrolls\n\
                 ⌨️  Keyboard - presses keys without side effects (F13-F15, ScrollLock)\n\
                 🧠 Memory operations - runs short background calculations\n\
                 💤 System awake - asks the OS to suppress automatic sleep\n\
                 \n\
                 Intensity levels (activities per tick):\n\
                 1 - Very low\n\
                 2 - Low (default)\n\
                 3 - Medium\n\
                 4 - High\n\
                 5 - Very high\n\
                 \n\
                 Tips:\n\
                 - Use Ctrl+C to stop a run\n\
                 - Shorter intervals mean more activity\n\
                 - Verbose mode shows every action\n\
                 - Duration 0 runs until stopped"
                .to_string(),
        };
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_descriptions() {
        assert_eq!(Message::CursorMoved(10, 20).to_string(), "Cursor moved to (10, 20)");
        assert_eq!(Message::KeyPressed("F13".into()).to_string(), "Key pressed: F13");
        assert_eq!(Message::MemoryOperation(512).to_string(), "Memory operation (512 items)");
    }

    #[test]
    fn test_live_stats_line() {
        let msg = Message::LiveStats {
            elapsed: "1m5s".into(),
            actions: 7,
            last: "Wheel scrolled up".into(),
        };
        assert_eq!(msg.to_string(), "📊 Active: 1m5s | Actions: 7 | Last: Wheel scrolled up");
    }
}
