//! Diagnostic logging.
//!
//! Logs go to stderr so they never interleave with the views a session
//! prints on stdout. The filter starts from the `-v`/`-q` flags, adds the
//! `[logging] directives` from the config, and `RUST_LOG` replaces both.

use std::io::IsTerminal;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Layer, Registry};

use crate::config::{LogStyle, LoggingConfig};

/// How chatty the binary is, from the `-q`/`-v` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Info and above.
    #[default]
    Normal,
    /// Debug and above: store mutations and handled events.
    Verbose,
    /// Everything, including ignored inputs and page transitions.
    Trace,
}

impl Verbosity {
    /// The level applied to the `catcare` target.
    #[must_use]
    pub fn level(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::ERROR,
            Self::Normal => LevelFilter::INFO,
            Self::Verbose => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}

/// The filter string used when `RUST_LOG` is not set.
#[must_use]
pub fn filter_directives(verbosity: Verbosity, config: &LoggingConfig) -> String {
    std::iter::once(format!("catcare={}", verbosity.level()))
        .chain(config.directives.iter().cloned())
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber.
///
/// Only the first call in a process takes effect.
///
/// # Examples
///
/// ```no_run
/// use catcare::{config::LoggingConfig, init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::Verbose, &LoggingConfig::default());
/// ```
pub fn init_logging(verbosity: Verbosity, config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(verbosity, config)));

    let _ = tracing_subscriber::registry()
        .with(stderr_layer(config))
        .with(env_filter)
        .try_init();
}

fn stderr_layer(config: &LoggingConfig) -> Box<dyn Layer<Registry> + Send + Sync> {
    let color = config
        .color
        .unwrap_or_else(|| std::io::stderr().is_terminal());
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .with_target(config.style == LogStyle::Full);

    match (config.style, config.timestamps) {
        (LogStyle::Compact, true) => layer.compact().boxed(),
        (LogStyle::Compact, false) => layer.compact().without_time().boxed(),
        (LogStyle::Full, true) => layer.boxed(),
        (LogStyle::Full, false) => layer.without_time().boxed(),
    }
}

#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}
