use super::{
    displaced_position, random_displacement, ActivityCapabilities, BenignKey, InputAdapter, ScreenBounds, WheelDirection,
};
use crate::libs::error::PlatformError;
use crate::libs::messages::Message;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone, PartialEq)]
pub enum AdapterCall {
    MoveCursor { x: i64, y: i64 },
    Click,
    Scroll(WheelDirection),
    KeyPress(BenignKey),
    RequestSleepPrevention,
    ReleaseSleepPrevention,
}

/// Adapter that performs no host I/O and records every call instead.
///
/// Pointer moves are applied to a virtual cursor on a virtual screen, so the
/// descriptions it returns look exactly like the native ones. Used by
/// `--dry-run` and by tests; [`RecordingAdapter::failing`] makes every input
/// call fail to exercise the scheduler's skip path.
pub struct RecordingAdapter {
    capabilities: ActivityCapabilities,
    bounds: ScreenBounds,
    fail_input: bool,
    cursor: Mutex<(i64, i64)>,
    rng: Mutex<StdRng>,
    calls: Mutex<Vec<AdapterCall>>,
}

impl RecordingAdapter {
    pub fn new(capabilities: ActivityCapabilities) -> Self {
        Self::with_screen(capabilities, ScreenBounds::new(1920, 1080))
    }

    pub fn with_screen(capabilities: ActivityCapabilities, bounds: ScreenBounds) -> Self {
        Self {
            capabilities,
            bounds,
            fail_input: false,
            cursor: Mutex::new(bounds.center()),
            rng: Mutex::new(StdRng::from_entropy()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(capabilities: ActivityCapabilities) -> Self {
        Self {
            fail_input: true,
            ..Self::new(capabilities)
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        *self.rng.lock() = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_cursor(self, position: (i64, i64)) -> Self {
        *self.cursor.lock() = position;
        self
    }

    pub fn calls(&self) -> Vec<AdapterCall> {
        self.calls.lock().clone()
    }

    pub fn cursor(&self) -> (i64, i64) {
        *self.cursor.lock()
    }

    pub fn bounds(&self) -> ScreenBounds {
        self.bounds
    }

    /// Number of input-injection calls, excluding sleep-prevention ones.
    pub fn input_call_count(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| !matches!(call, AdapterCall::RequestSleepPrevention | AdapterCall::ReleaseSleepPrevention))
            .count()
    }

    pub fn count(&self, wanted: &AdapterCall) -> usize {
        self.calls.lock().iter().filter(|call| *call == wanted).count()
    }

    fn check_input(&self, capability: &str) -> Result<(), PlatformError> {
        if !self.capabilities.supports_input() {
            return Err(PlatformError::Unsupported(capability.to_string()));
        }
        if self.fail_input {
            return Err(PlatformError::Simulate(format!("{} rejected by recording adapter", capability)));
        }
        Ok(())
    }

    fn push(&self, call: AdapterCall) {
        self.calls.lock().push(call);
    }
}

impl InputAdapter for RecordingAdapter {
    fn capabilities(&self) -> ActivityCapabilities {
        self.capabilities
    }

    fn move_cursor(&self) -> Result<String, PlatformError> {
        self.check_input("Cursor movement")?;
        let (distance, angle) = random_displacement(&mut *self.rng.lock());
        let mut cursor = self.cursor.lock();
        let (x, y) = displaced_position(*cursor, distance, angle, self.bounds);
        *cursor = (x, y);
        self.push(AdapterCall::MoveCursor { x, y });
        Ok(Message::CursorMoved(x, y).to_string())
    }

    fn click_primary_button(&self) -> Result<String, PlatformError> {
        self.check_input("Pointer click")?;
        self.push(AdapterCall::Click);
        Ok(Message::PrimaryButtonClicked.to_string())
    }

    fn scroll_wheel(&self) -> Result<String, PlatformError> {
        self.check_input("Wheel scroll")?;
        let direction = WheelDirection::random(&mut *self.rng.lock());
        self.push(AdapterCall::Scroll(direction));
        Ok(Message::WheelScrolled(direction.to_string()).to_string())
    }

    fn press_benign_key(&self) -> Result<String, PlatformError> {
        self.check_input("Keyboard input")?;
        let key = BenignKey::random(&mut *self.rng.lock());
        self.push(AdapterCall::KeyPress(key));
        Ok(Message::KeyPressed(key.to_string()).to_string())
    }

    fn request_sleep_prevention(&self) -> Result<(), PlatformError> {
        self.push(AdapterCall::RequestSleepPrevention);
        Ok(())
    }

    fn release_sleep_prevention(&self) -> Result<(), PlatformError> {
        self.push(AdapterCall::ReleaseSleepPrevention);
        Ok(())
    }
}
