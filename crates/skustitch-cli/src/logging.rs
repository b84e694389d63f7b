//! Logging setup for the shell.
//!
//! Logs go to stderr so exported data printed on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Initialise tracing from `RUST_LOG`, defaulting to warnings only so the
/// interactive surface stays quiet.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    // Ignore error if a subscriber is already set (e.g., in tests).
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
    }
}
