//! Logging configuration with file-based output and size-based rotation.
//!
//! Writes logs to `~/.config/chirp/chirp.log` (or platform equivalent) with
//! 10 MB size-based rotation. Set `DEBUG_LOGGING=1` to also enable debug
//! output on stderr for chirp crates.
//!
//! Hook binaries speak to their host on stdout, so the console layer goes to
//! stderr and only when explicitly requested.

use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Initialize logging with a rotating file layer and an optional stderr layer.
///
/// Returns a `WorkerGuard` that MUST be held for the process lifetime to
/// ensure all buffered logs are flushed on shutdown.
///
/// # Behavior
/// - **File output:** Always on, written to `~/.config/chirp/chirp.log`
/// - **Stderr output:** Only when `DEBUG_LOGGING=1`
/// - **Rotation:** Size-based at 10 MB, keeps only latest rotated file
///
/// # Fallback
/// If log directory creation fails, returns `None` and falls back to
/// stderr-only logging.
pub fn init() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    // Config directory: ~/.config/chirp on Linux, %APPDATA%/chirp on Windows
    let log_dir = match dirs::config_dir() {
        Some(config) => config.join("chirp"),
        None => {
            init_stderr_only(debug_logging);
            return None;
        }
    };

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        // Can't use tracing yet since subscriber not initialized
        eprintln!(
            "Failed to create log directory {:?}: {}, using stderr only",
            log_dir, e
        );
        init_stderr_only(debug_logging);
        return None;
    }

    let log_path = log_dir.join("chirp.log");
    let file_appender = match BasicRollingFileAppender::new(
        &log_path,
        RollingConditionBasic::new().max_size(10 * 1024 * 1024), // 10 MB
        1, // Keep only the latest rotated file (chirp.log and chirp.log.1)
    ) {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("Failed to create log file at {:?}: {}", log_path, e);
            init_stderr_only(debug_logging);
            return None;
        }
    };

    // Wrap in non-blocking writer so short-lived hooks never block on I/O
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    // Stderr layer only under DEBUG_LOGGING; stdout stays clean for the host
    let stderr_layer = debug_logging.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_span_events(FmtSpan::NONE)
    });

    let filter_directive = if debug_logging {
        "info,chirp_core=debug,chirp_cli=debug"
    } else {
        "info"
    };
    let filter = EnvFilter::new(filter_directive);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .with(filter)
        .init();

    tracing::debug!(log_file = ?log_path, debug_logging, "chirp logging initialized");

    Some(guard)
}

/// Fallback: stderr-only logging when file logging is unavailable.
fn init_stderr_only(debug_logging: bool) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let filter_directive = if debug_logging {
        "info,chirp_core=debug,chirp_cli=debug"
    } else {
        "info"
    };
    let filter = EnvFilter::new(filter_directive);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter)
        .init();

    tracing::debug!(debug_logging, "chirp logging initialized (stderr only)");
}
