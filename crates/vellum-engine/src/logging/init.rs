use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "vellum_ui=trace"). When unset, `RUST_LOG` is consulted, then `info`.
///
/// `timestamps` can be turned off by hosts that replay recorded input, so two
/// runs of the same script log identical lines.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            timestamps: true,
        }
    }
}

const DEFAULT_FILTER: &str = "info";

/// Picks the filter string: explicit config, then the environment, then `info`.
/// Blank strings count as unset.
fn resolve_filter(explicit: Option<&str>, env: Option<&str>) -> String {
    explicit
        .or(env)
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let env = std::env::var("RUST_LOG").ok();
        let filter = resolve_filter(config.env_filter.as_deref(), env.as_deref());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);
        if !config.timestamps {
            builder.format_timestamp(None);
        }
        builder.init();

        log::debug!("logging initialized with filter {filter:?}");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_beats_environment() {
        assert_eq!(resolve_filter(Some("vellum_ui=trace"), Some("warn")), "vellum_ui=trace");
    }

    #[test]
    fn environment_used_when_no_explicit_filter() {
        assert_eq!(resolve_filter(None, Some("warn")), "warn");
    }

    #[test]
    fn blank_or_missing_falls_back_to_info() {
        assert_eq!(resolve_filter(None, None), "info");
        assert_eq!(resolve_filter(Some("  "), None), "info");
    }
}
