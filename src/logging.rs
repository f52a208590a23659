//! Logging and tracing configuration
//!
//! Structured logging via the `tracing` crate. Call `logging::init()` once
//! at binary startup. Control verbosity with `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=debug fstriage-hash < capture.bin
//! RUST_LOG=fstriage=trace fstriage-export 'jpg$' < capture.bin
//! ```
//!
//! Log output goes to stderr so the tab-delimited results on stdout stay
//! machine-readable.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the logging/tracing system
///
/// Call this once at binary startup (in main)
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Default: info in release, debug in debug builds
        if cfg!(debug_assertions) {
            EnvFilter::new("fstriage=debug")
        } else {
            EnvFilter::new("fstriage=info")
        }
    });

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
            .compact(),
    );

    // Set as global default (ignore error if already set)
    let _ = tracing::subscriber::set_global_default(subscriber);
}
