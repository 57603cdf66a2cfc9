use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "paintkit_engine::cache=trace"). When unset, `RUST_LOG` is consulted and
/// then `default_level`.
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    /// Debug-level output for the engine, info for everything else.
    pub fn verbose() -> Self {
        Self {
            env_filter: Some("info,paintkit_engine=debug".to_owned()),
            ..Self::default()
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Returns `true` if this call installed the
/// logger; `false` if logging was already set up, here or by someone else
/// (e.g. a test harness). Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) -> bool {
    let mut installed = false;
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = &config.env_filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(config.default_level);
        }

        builder.write_style(config.write_style);

        installed = builder.try_init().is_ok();
        if installed {
            log::debug!("logging initialized");
        }
    });
    installed
}
