/// Every user-facing line the application prints.
///
/// Text lives in `display.rs`; call sites only pick a variant and pass the
/// dynamic parts, so wording stays consistent across the CLI, the interactive
/// menu and verbose activity logs.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === APPLICATION MESSAGES ===
    Banner(String), // version
    Version {
        name: String,
        version: String,
        os: String,
        arch: String,
        profile: String,
    },
    Goodbye,

    // === RUN LIFECYCLE MESSAGES ===
    RunStarting,
    RunStarted,
    RunInterval(String),
    RunIntensity(u8),
    RunDuration(String),
    RunDurationUnbounded,
    RunStartedAt(String),
    PressCtrlCToStop,
    StopSignalReceived,
    DurationReached,
    RunStopped,
    RunTaskPanicked(String),
    ReporterTaskPanicked(String),

    // === PLATFORM MESSAGES ===
    PlatformComputeOnly,
    PlatformComputeOnlyHint,
    CursorListenerFailed(String),
    CursorListenerGaveUp,
    SleepPreventionEnabled,
    SleepPreventionReleased,
    SleepPreventionFailed(String),
    SleepReleaseFailed(String),
    SleepPreventionUnsupported,
    SignalHandlerFailed(String),
    SignalHandlingNotSupported,

    // === ACTIVITY MESSAGES ===
    CursorMoved(i64, i64),
    PrimaryButtonClicked,
    WheelScrolled(String), // direction
    KeyPressed(String),    // key name
    MemoryOperation(usize),
    MemoryOperationDetailed { items: usize, checksum: f64 },
    CpuOperation(u64),
    CpuOperationDetailed { iterations: u64, result: f64 },
    ActivityFailed { activity: String, error: String },
    NoActivitiesEnabled,

    // === SUMMARY MESSAGES ===
    SummaryTitle,
    SummaryElapsed,
    SummaryTotalActions,
    SummaryMouseActions,
    SummaryKeyPresses,
    SummaryComputeOperations,
    SummaryRate,
    LiveStats { elapsed: String, actions: u64, last: String },
    ProgressLabel,

    // === MENU MESSAGES ===
    MenuTitle,
    MenuEditSettings,
    MenuStartRun,
    MenuShowStatus,
    MenuShowHelp,
    MenuQuit,
    MenuPrompt,

    // === SETTINGS MESSAGES ===
    SettingsTitle,
    PromptInterval(String),
    PromptIntensity(u8),
    PromptDuration(String),
    PromptToggles,
    IntervalSet(String),
    IntensitySet(u8),
    DurationSet(String),
    SettingsUpdated,
    InvalidSetting(String),
    ToggleMouse,
    ToggleKeyboard,
    ToggleMemory,
    ToggleVerbose,

    // === STATUS & HELP MESSAGES ===
    StatusTitle,
    StatusInterval,
    StatusIntensity,
    StatusDuration,
    StatusMouse,
    StatusKeyboard,
    StatusMemory,
    StatusVerbose,
    StatusPlatform,
    StatusOn,
    StatusOff,
    HelpTitle,
    HelpText,
}
