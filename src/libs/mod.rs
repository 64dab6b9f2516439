//! Core library modules for awaker.
//!
//! ## Features
//!
//! - **Configuration**: run settings, duration parsing, typed errors
//! - **Scheduling**: the tick loop, activity selection, compute churn
//! - **Platform**: input injection and sleep prevention behind [`platform::InputAdapter`]
//! - **Reporting**: live counters, progress output, final summary tables
//!
//! ## Usage
//!
//! ```rust,no_run
//! use awaker::libs::config::ActivityConfig;
//! use awaker::libs::platform::NativeAdapter;
//! use awaker::libs::scheduler::ActivityScheduler;
//! use std::sync::Arc;
//!
//! # async fn run() {
//! let run = ActivityScheduler::start(ActivityConfig::default(), Arc::new(NativeAdapter::new()));
//! let summary = run.finish().await;
//! println!("{}", summary.total_actions);
//! # }
//! ```

pub mod activity;
pub mod compute;
pub mod config;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod metadata;
pub mod platform;
pub mod reporter;
pub mod scheduler;
pub mod stats;
pub mod summary;
pub mod view;
