//! File-based logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{DebugConfig, DEFAULT_LOG_FILTER};

/// Keeps the non-blocking file writer flushing. Hold it until exit.
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Initialize the logging system
///
/// - `EnvFilter` from `RUST_LOG`, defaulting to `portal=info,warn`
/// - daily-rotated file under `PORTAL_LOG_DIR` (default `logs/portal.log`)
/// - optional stderr mirror
/// - panic hook that logs the panic before the default handler runs
///
/// If the log directory cannot be created, logging falls back to stderr only.
pub fn init() -> LogGuard {
    init_with(&DebugConfig::from_env())
}

pub fn init_with(config: &DebugConfig) -> LogGuard {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let (file_layer, guard) = match fs::create_dir_all(&config.log_dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::daily(&config.log_dir, &config.log_file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!(
                "Warning: failed to create log directory {}: {}",
                config.log_dir.display(),
                e
            );
            (None, None)
        }
    };

    let stderr_layer = config
        .log_to_stderr
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(false));

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: tracing subscriber already set: {}", e);
    }

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        "Logging initialized"
    );

    setup_panic_hook();

    LogGuard { _file: guard }
}

/// Log panics with location and message, then defer to the default hook
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(
            location = %location,
            message = %message,
            backtrace = %backtrace,
            "Application panic"
        );

        default_panic(panic_info);
    }));
}
