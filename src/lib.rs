//! # Awaker - keep the system awake
//!
//! A command-line utility that prevents idle detection and automatic sleep
//! by periodically performing small, harmless activities.
//!
//! ## Features
//!
//! - **Input Activity**: Cursor nudges, primary clicks, wheel scrolls and side-effect-free key presses
//! - **Compute Activity**: Short memory and CPU churn bursts
//! - **Sleep Prevention**: OS-level inhibition held for the length of a run
//! - **Reporting**: Progress bar or live counters, plus a final summary
//! - **Interactive Mode**: Menu-driven settings editor
//!
//! ## Usage
//!
//! ```rust,no_run
//! use awaker::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
