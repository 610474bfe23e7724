//! Logging initialization
//!
//! One JSON formatter feeds both stdout and a daily rolling file.

use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    fmt::{self, time::UtcTime, writer::MakeWriterExt},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const DEFAULT_FILTER: &str = "info,sensei_engine=debug,tower_http=debug";
const DEFAULT_LOG_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "server.log";

/// Installs the global subscriber and returns the file writer guard.
///
/// `RUST_LOG` overrides the filter. Files rotate daily under `LOG_DIR` as
/// `server.log.YYYY-MM-DD`. Keep the guard alive for the whole process so buffered lines
/// are flushed on exit.
pub fn init_logging() -> WorkerGuard {
    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string());
    let (file_writer, guard) =
        tracing_appender::non_blocking(rolling::daily(&log_dir, LOG_FILE_PREFIX));

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let json = fmt::layer()
        .json()
        .with_timer(UtcTime::rfc_3339())
        .with_current_span(true)
        .with_ansi(false)
        .with_writer(std::io::stdout.and(file_writer));

    // a second call (tests, embedding) keeps the first subscriber
    if let Err(err) = tracing_subscriber::registry().with(filter).with(json).try_init() {
        eprintln!("Tracing subscriber not installed: {}", err);
    }

    guard
}
