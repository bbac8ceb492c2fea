use crate::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Rolling file plus colored stdout
    FileAndStdout,
    /// Rolling file, JSON lines
    JsonFile,
    /// Stdout only, for read-only filesystems (empty `log_dir`)
    Stdout,
}

impl LogSink {
    pub fn for_config(config: &AppConfig) -> Self {
        if config.log_dir.trim().is_empty() {
            LogSink::Stdout
        } else if config.use_json {
            LogSink::JsonFile
        } else {
            LogSink::FileAndStdout
        }
    }
}

fn rolling_appender(config: &AppConfig) -> RollingFileAppender {
    match config.rotation.as_str() {
        "hourly" => tracing_appender::rolling::hourly(&config.log_dir, &config.log_file),
        "daily" => tracing_appender::rolling::daily(&config.log_dir, &config.log_file),
        _ => tracing_appender::rolling::never(&config.log_dir, &config.log_file),
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `log_level`. Keep the returned guard
/// alive until shutdown so buffered lines are flushed.
pub fn init_logging(config: &AppConfig) -> WorkerGuard {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    match LogSink::for_config(config) {
        LogSink::Stdout => {
            let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stdout());
            let layer = if config.use_json {
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(non_blocking)
                    .boxed()
            } else {
                fmt::layer()
                    .with_target(false)
                    .with_writer(non_blocking)
                    .boxed()
            };
            registry.with(layer).init();
            guard
        }
        LogSink::JsonFile => {
            let (non_blocking, guard) = tracing_appender::non_blocking(rolling_appender(config));
            let file_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_writer(non_blocking)
                .with_ansi(false);
            registry.with(file_layer).init();
            guard
        }
        LogSink::FileAndStdout => {
            let (non_blocking, guard) = tracing_appender::non_blocking(rolling_appender(config));
            let file_layer = fmt::layer()
                .with_target(false)
                .with_writer(non_blocking)
                .with_ansi(false);
            let stdout_layer = fmt::layer().with_target(false).with_ansi(true);
            registry.with(file_layer).with(stdout_layer).init();
            guard
        }
    }
}
