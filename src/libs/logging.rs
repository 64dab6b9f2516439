//! Logging configuration using tracing.

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber, writing to stderr.
///
/// Level comes from `AWAKER_LOG`, then `RUST_LOG`; otherwise warnings only,
/// or `awaker=info` with `--verbose`.
///
/// ```bash
/// AWAKER_LOG=debug awaker --duration 1m
/// ```
pub fn init(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_env("AWAKER_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "awaker=info,warn"
    } else {
        "warn"
    }
}
