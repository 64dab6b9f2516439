//! Host "keep awake" requests.
//!
//! | Platform | Mechanism                                               |
//! |----------|---------------------------------------------------------|
//! | Windows  | `SetThreadExecutionState` held by a dedicated thread    |
//! | macOS    | `caffeinate -d -i -w <pid>` child process               |
//! | Linux    | `systemd-inhibit --what=idle:sleep ... sleep infinity`  |
//!
//! `acquire` while already held and `release` while not held are both
//! no-ops, so the pair can be called in any order and any number of times.

use crate::libs::error::PlatformError;
use crate::libs::messages::Message;
use parking_lot::Mutex;
use std::io::ErrorKind;
use std::process::{Child, Command, Stdio};

enum Backend {
    Command { program: String, args: Vec<String> },
    #[cfg(windows)]
    ExecutionState,
    Unsupported,
}

enum Hold {
    Child(Child),
    #[cfg(windows)]
    Thread(execution_state::Holder),
}

pub struct PowerInhibitor {
    backend: Backend,
    hold: Mutex<Option<Hold>>,
}

impl PowerInhibitor {
    /// The inhibitor appropriate for the current OS.
    pub fn native() -> Self {
        #[cfg(windows)]
        let backend = Backend::ExecutionState;

        #[cfg(target_os = "macos")]
        let backend = Backend::Command {
            program: "caffeinate".to_string(),
            args: vec!["-d".into(), "-i".into(), "-w".into(), std::process::id().to_string()],
        };

        #[cfg(all(unix, not(target_os = "macos")))]
        let backend = Backend::Command {
            program: "systemd-inhibit".to_string(),
            args: vec![
                "--what=idle:sleep".into(),
                "--who=awaker".into(),
                "--why=Keeping the system awake".into(),
                "--mode=block".into(),
                "sleep".into(),
                "infinity".into(),
            ],
        };

        #[cfg(not(any(unix, windows)))]
        let backend = Backend::Unsupported;

        Self::with_backend(backend)
    }

    /// Holds the request by keeping `program args..` running until release.
    pub fn with_command(program: impl Into<String>, args: Vec<String>) -> Self {
        Self::with_backend(Backend::Command {
            program: program.into(),
            args,
        })
    }

    pub fn unsupported() -> Self {
        Self::with_backend(Backend::Unsupported)
    }

    fn with_backend(backend: Backend) -> Self {
        Self {
            backend,
            hold: Mutex::new(None),
        }
    }

    pub fn is_held(&self) -> bool {
        self.hold.lock().is_some()
    }

    pub fn acquire(&self) -> Result<(), PlatformError> {
        let mut hold = self.hold.lock();
        if hold.is_some() {
            return Ok(());
        }

        *hold = Some(match &self.backend {
            Backend::Command { program, args } => {
                let child = Command::new(program)
                    .args(args)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn()
                    .map_err(|e| match e.kind() {
                        ErrorKind::NotFound => PlatformError::Unsupported(Message::SleepPreventionUnsupported.to_string()),
                        _ => PlatformError::Power(e.to_string()),
                    })?;
                tracing::debug!(program = %program, pid = child.id(), "Sleep inhibitor started");
                Hold::Child(child)
            }
            #[cfg(windows)]
            Backend::ExecutionState => Hold::Thread(execution_state::Holder::start()?),
            Backend::Unsupported => {
                return Err(PlatformError::Unsupported(Message::SleepPreventionUnsupported.to_string()));
            }
        });
        Ok(())
    }

    pub fn release(&self) -> Result<(), PlatformError> {
        let Some(hold) = self.hold.lock().take() else {
            return Ok(());
        };

        match hold {
            Hold::Child(mut child) => {
                // The inhibitor may have exited on its own; only the wait matters.
                let _ = child.kill();
                child.wait().map_err(|e| PlatformError::Power(e.to_string()))?;
                tracing::debug!("Sleep inhibitor stopped");
                Ok(())
            }
            #[cfg(windows)]
            Hold::Thread(holder) => holder.stop(),
        }
    }
}

impl Drop for PowerInhibitor {
    fn drop(&mut self) {
        let _ = self.release();
    }
}

#[cfg(windows)]
mod execution_state {
    //! `SetThreadExecutionState` applies to the calling thread only, so the
    //! request lives on its own thread and is cleared on that same thread.

    use crate::libs::error::PlatformError;
    use std::sync::mpsc;
    use std::thread::JoinHandle;
    use winapi::um::winbase::SetThreadExecutionState;
    use winapi::um::winnt::{ES_CONTINUOUS, ES_DISPLAY_REQUIRED, ES_SYSTEM_REQUIRED};

    pub struct Holder {
        stop: mpsc::Sender<()>,
        handle: JoinHandle<()>,
    }

    impl Holder {
        pub fn start() -> Result<Self, PlatformError> {
            let (ready_tx, ready_rx) = mpsc::channel::<bool>();
            let (stop_tx, stop_rx) = mpsc::channel::<()>();

            let handle = std::thread::spawn(move || {
                let previous = unsafe { SetThreadExecutionState(ES_CONTINUOUS | ES_SYSTEM_REQUIRED | ES_DISPLAY_REQUIRED) };
                let _ = ready_tx.send(previous != 0);
                let _ = stop_rx.recv();
                unsafe {
                    SetThreadExecutionState(ES_CONTINUOUS);
                }
            });

            match ready_rx.recv() {
                Ok(true) => Ok(Self { stop: stop_tx, handle }),
                _ => {
                    let _ = stop_tx.send(());
                    let _ = handle.join();
                    Err(PlatformError::Power("SetThreadExecutionState rejected the request".to_string()))
                }
            }
        }

        pub fn stop(self) -> Result<(), PlatformError> {
            let _ = self.stop.send(());
            self.handle
                .join()
                .map_err(|_| PlatformError::Power("execution state thread panicked".to_string()))
        }
    }
}
