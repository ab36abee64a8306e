//! Compact `[LEVEL] message` logging for the command line front end.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    debug,
    info,
    warn,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::debug => tracing::Level::DEBUG,
            LogLevel::info => tracing::Level::INFO,
            LogLevel::warn => tracing::Level::WARN,
        }
    }
}

impl LogLevel {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose { LogLevel::debug } else { LogLevel::warn }
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(level: LogLevel) {
    let filter = tracing_subscriber::filter::LevelFilter::from_level(level.into());

    let layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_level(true)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_filter(filter);

    let _ = Registry::default().with(layer).try_init();
}
