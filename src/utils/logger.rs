use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Initialize tracing from the logging config.
///
/// `level` selects the default filter (env directives still apply on
/// top); `format` picks structured JSON or human-readable console
/// output.
pub fn init_logging(logging_config: &LoggingConfig) {
    // Parse level string -> LevelFilter
    let level_filter = match logging_config.level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            panic!(
                "Invalid logging.level '{}'. Valid values: trace, debug, info, warn, error",
                logging_config.level
            );
        }
    };

    // This can be used to allow env-based overrides, plus the default:
    let filter_layer = EnvFilter::default().add_directive(level_filter.into());

    match logging_config.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter_layer)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            // Human-readable console output; also the fallback for an
            // unknown format value.
            tracing_subscriber::registry()
                .with(filter_layer)
                .with(fmt::layer().pretty())
                .init();
        }
    }
}
