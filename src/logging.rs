//! Tracing setup
//!
//! One rolling file sink (JSON in production, text elsewhere) plus a colored
//! stdout sink in text mode. Callback handling is latency-sensitive, so the
//! file writer is non-blocking; the returned guard flushes it on drop and
//! must be held for the life of the process.

use crate::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init_logging(config: &AppConfig) -> WorkerGuard {
    let rotation = match config.rotation.as_str() {
        "hourly" => Rotation::HOURLY,
        "daily" => Rotation::DAILY,
        other => {
            eprintln!("Unknown log rotation {other:?}, using daily");
            Rotation::DAILY
        }
    };
    let file_appender = RollingFileAppender::new(rotation, &config.log_dir, &config.log_file);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // RUST_LOG wins; otherwise the configured level, with this crate's spans
    // silenced entirely when tracing is disabled.
    let filter_str = if config.enable_tracing {
        config.log_level.clone()
    } else {
        format!("{},ussd_billing=off", config.log_level)
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    let registry = tracing_subscriber::registry().with(filter);

    if config.use_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true) // Keep target in JSON for structured queries
                    .with_writer(non_blocking)
                    .with_ansi(false),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(non_blocking)
                    .with_ansi(false),
            )
            .with(fmt::layer().with_target(false).with_ansi(true))
            .init();
    }

    guard
}
