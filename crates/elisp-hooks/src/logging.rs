// Rust guideline compliant 2026-10-15

//! Logging setup for the hook binaries.
//!
//! Logs go to stderr so they interleave with the interpreter's own
//! diagnostics. `RUST_LOG` takes precedence over the configured level.

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber at `level`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            EnvFilter::try_new(format!(
                "elisp_hooks={level},elisp_hooks_core={level},elisp_hooks_cli={level}"
            ))
        })
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .try_init();
}
