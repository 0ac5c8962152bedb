//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! Diagnostics go to stderr so they never mix with sorted output or status
//! lines on stdout. `RUST_LOG` overrides the configured level.
//!
//! - `warn`: options that were given but have no effect
//! - `info`: one summary event per processed file
//! - `debug`: resolved sort mode, fallback counts, thread pool size

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level filter used when `RUST_LOG` is not set.
    pub level: Level,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_target: false,
            with_ansi: false,
        }
    }
}

impl LogConfig {
    /// `--debug` raises the level to `debug` and shows targets.
    pub fn from_debug_flag(debug: bool) -> Self {
        if debug {
            Self {
                level: Level::DEBUG,
                with_target: true,
                ..Self::default()
            }
        } else {
            Self::default()
        }
    }
}

/// Install the global subscriber. Does nothing if one is already set.
pub fn init_logging(config: &LogConfig) {
    let layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(config.with_target)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .try_init();
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG` env var.
fn build_env_filter(level: Level) -> EnvFilter {
    let level_str = level.as_str().to_lowercase();

    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,line_sort={level_str},sort={level_str}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag_raises_level() {
        assert_eq!(LogConfig::from_debug_flag(false).level, Level::WARN);
        let config = LogConfig::from_debug_flag(true);
        assert_eq!(config.level, Level::DEBUG);
        assert!(config.with_target);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(&LogConfig::default());
        init_logging(&LogConfig::from_debug_flag(true));
    }
}
