//! Host input injection through `rdev`.
//!
//! Capability is probed once at construction: if the display size cannot be
//! read (no display server, missing permissions) the adapter is
//! compute-only and every input call reports `Unsupported`.
//!
//! `rdev` can inject absolute pointer moves but cannot read the pointer
//! position, so on non-Windows hosts a listener thread tracks the last
//! observed position. Until something has been observed, moves start from
//! the screen centre. Windows reads the position directly and also sends
//! wheel events itself to control the `mouseData` encoding.

use super::{
    displaced_position, random_displacement, ActivityCapabilities, BenignKey, InputAdapter, PowerInhibitor, ScreenBounds,
    WheelDirection,
};
use crate::libs::error::PlatformError;
use crate::libs::messages::Message;
use crate::msg_debug;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rdev::{Button, EventType, Key};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Pause after each injected event; some backends drop events sent back-to-back.
const EVENT_SETTLE: Duration = Duration::from_millis(20);
const LISTEN_ATTEMPTS: u32 = 3;
const LISTEN_RETRY_DELAY: Duration = Duration::from_secs(1);

type SharedPosition = Arc<Mutex<Option<(i64, i64)>>>;

pub struct NativeAdapter {
    capabilities: ActivityCapabilities,
    last_position: SharedPosition,
    rng: Mutex<StdRng>,
    power: PowerInhibitor,
}

impl Default for NativeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeAdapter {
    pub fn new() -> Self {
        let capabilities = match rdev::display_size() {
            Ok((width, height)) if width > 0 && height > 0 => {
                tracing::info!(width, height, "Input injection available");
                ActivityCapabilities::FullySupported
            }
            Ok(_) => ActivityCapabilities::ComputeOnly,
            Err(e) => {
                tracing::info!(error = ?e, "Input injection unavailable");
                ActivityCapabilities::ComputeOnly
            }
        };

        let last_position: SharedPosition = Arc::new(Mutex::new(None));
        if capabilities.supports_input() && cfg!(not(windows)) {
            spawn_position_listener(Arc::clone(&last_position));
        }

        Self {
            capabilities,
            last_position,
            rng: Mutex::new(StdRng::from_entropy()),
            power: PowerInhibitor::native(),
        }
    }

    fn ensure_input(&self, capability: &str) -> Result<(), PlatformError> {
        if self.capabilities.supports_input() {
            Ok(())
        } else {
            Err(PlatformError::Unsupported(capability.to_string()))
        }
    }

    fn screen_bounds(&self) -> Result<ScreenBounds, PlatformError> {
        let (width, height) = rdev::display_size().map_err(|e| PlatformError::Display(format!("{:?}", e)))?;
        Ok(ScreenBounds::new(width, height))
    }

    fn cursor_position(&self, bounds: ScreenBounds) -> (i64, i64) {
        #[cfg(windows)]
        if let Some(position) = win32::cursor_position() {
            return position;
        }
        self.last_position.lock().unwrap_or_else(|| bounds.center())
    }
}

impl InputAdapter for NativeAdapter {
    fn capabilities(&self) -> ActivityCapabilities {
        self.capabilities
    }

    fn move_cursor(&self) -> Result<String, PlatformError> {
        self.ensure_input("Cursor movement")?;
        let bounds = self.screen_bounds()?;
        let current = self.cursor_position(bounds);
        let (distance, angle) = random_displacement(&mut *self.rng.lock());
        let (x, y) = displaced_position(current, distance, angle, bounds);

        send(&EventType::MouseMove { x: x as f64, y: y as f64 })?;
        *self.last_position.lock() = Some((x, y));
        Ok(Message::CursorMoved(x, y).to_string())
    }

    fn click_primary_button(&self) -> Result<String, PlatformError> {
        self.ensure_input("Pointer click")?;
        send(&EventType::ButtonPress(Button::Left))?;
        send(&EventType::ButtonRelease(Button::Left))?;
        Ok(Message::PrimaryButtonClicked.to_string())
    }

    fn scroll_wheel(&self) -> Result<String, PlatformError> {
        self.ensure_input("Wheel scroll")?;
        let direction = WheelDirection::random(&mut *self.rng.lock());

        #[cfg(windows)]
        win32::send_wheel(direction.mouse_data())?;

        #[cfg(not(windows))]
        send(&EventType::Wheel {
            delta_x: 0,
            delta_y: direction.notches(),
        })?;

        Ok(Message::WheelScrolled(direction.to_string()).to_string())
    }

    fn press_benign_key(&self) -> Result<String, PlatformError> {
        self.ensure_input("Keyboard input")?;
        let key = BenignKey::random(&mut *self.rng.lock());
        let code = native_key(key);
        send(&EventType::KeyPress(code))?;
        send(&EventType::KeyRelease(code))?;
        Ok(Message::KeyPressed(key.to_string()).to_string())
    }

    fn request_sleep_prevention(&self) -> Result<(), PlatformError> {
        self.power.acquire()
    }

    fn release_sleep_prevention(&self) -> Result<(), PlatformError> {
        self.power.release()
    }
}

fn send(event: &EventType) -> Result<(), PlatformError> {
    rdev::simulate(event).map_err(|e| PlatformError::Simulate(format!("{:?} ({:?})", event, e)))?;
    thread::sleep(EVENT_SETTLE);
    Ok(())
}

/// Maps a benign key to the code `rdev` injects on this OS.
///
/// F13-F15 have no named `rdev` variant, so they are sent by raw code:
/// virtual-key codes on Windows, `kVK_*` on macOS and X11 keycodes elsewhere.
fn native_key(key: BenignKey) -> Key {
    #[cfg(windows)]
    const FUNCTION_KEYS: [u32; 3] = [0x7C, 0x7D, 0x7E];
    #[cfg(target_os = "macos")]
    const FUNCTION_KEYS: [u32; 3] = [0x69, 0x6B, 0x71];
    #[cfg(not(any(windows, target_os = "macos")))]
    const FUNCTION_KEYS: [u32; 3] = [191, 192, 193];

    match key {
        BenignKey::F13 => Key::Unknown(FUNCTION_KEYS[0]),
        BenignKey::F14 => Key::Unknown(FUNCTION_KEYS[1]),
        BenignKey::F15 => Key::Unknown(FUNCTION_KEYS[2]),
        BenignKey::ScrollLock => Key::ScrollLock,
    }
}

/// Tracks pointer moves in the background, giving up after a few failed starts.
fn spawn_position_listener(position: SharedPosition) {
    thread::spawn(move || {
        for attempt in 1..=LISTEN_ATTEMPTS {
            let position_for_listener = Arc::clone(&position);
            let result = rdev::listen(move |event| {
                if let EventType::MouseMove { x, y } = event.event_type {
                    *position_for_listener.lock() = Some((x as i64, y as i64));
                }
            });
            match result {
                Ok(()) => return,
                Err(e) => {
                    tracing::debug!(attempt, error = ?e, "Pointer listener failed");
                    msg_debug!(Message::CursorListenerFailed(format!("{:?}", e)));
                    thread::sleep(LISTEN_RETRY_DELAY);
                }
            }
        }
        msg_debug!(Message::CursorListenerGaveUp);
    });
}

#[cfg(windows)]
mod win32 {
    use crate::libs::error::PlatformError;
    use winapi::shared::windef::POINT;
    use winapi::um::winuser::{GetCursorPos, SendInput, INPUT, INPUT_MOUSE, MOUSEEVENTF_WHEEL};

    pub fn cursor_position() -> Option<(i64, i64)> {
        let mut point = POINT { x: 0, y: 0 };
        let ok = unsafe { GetCursorPos(&mut point) };
        (ok != 0).then(|| (i64::from(point.x), i64::from(point.y)))
    }

    pub fn send_wheel(mouse_data: u32) -> Result<(), PlatformError> {
        let mut input: INPUT = unsafe { std::mem::zeroed() };
        input.type_ = INPUT_MOUSE;
        unsafe {
            let mi = input.u.mi_mut();
            mi.dwFlags = MOUSEEVENTF_WHEEL;
            mi.mouseData = mouse_data;
        }
        let sent = unsafe { SendInput(1, &mut input, std::mem::size_of::<INPUT>() as i32) };
        if sent == 1 {
            Ok(())
        } else {
            Err(PlatformError::Simulate("SendInput rejected the wheel event".to_string()))
        }
    }
}
