use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "lumen_engine=debug,wgpu=warn"). When neither `env_filter` nor `RUST_LOG`
/// is set, the logger falls back to `info` with the GPU stack held at `warn`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    /// Include timestamps in log lines.
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

/// Filter applied when no explicit filter is configured.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Call early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&resolve_filter(config.env_filter.as_deref()));
        builder.write_style(config.write_style);

        if !config.timestamps {
            builder.format_timestamp(None);
        }

        // Another logger may already be installed (e.g. by a test harness).
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}

/// Resolves the effective filter: explicit value, then `RUST_LOG`, then [`DEFAULT_FILTER`].
pub(crate) fn resolve_filter(explicit: Option<&str>) -> String {
    if let Some(filter) = explicit.filter(|f| !f.trim().is_empty()) {
        return filter.to_string();
    }

    match std::env::var("RUST_LOG") {
        Ok(filter) if !filter.trim().is_empty() => filter,
        _ => DEFAULT_FILTER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        assert_eq!(resolve_filter(Some("lumen_engine=trace")), "lumen_engine=trace");
    }

    #[test]
    fn blank_explicit_filter_is_ignored() {
        let resolved = resolve_filter(Some("   "));
        assert!(!resolved.trim().is_empty());
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig { env_filter: Some("trace".into()), ..Default::default() });
    }
}
