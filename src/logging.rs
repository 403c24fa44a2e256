//! Optional `env_logger` backend for hosts without a logger of their own
//!
//! Frame building and the GPU pass only emit through `log`. Nothing is
//! printed until a backend is installed, either by the host or through
//! [`init_logging`].

use std::sync::Once;

use env_logger::WriteStyle;
use log::LevelFilter;

/// Verbosity used when neither the config nor `RUST_LOG` names a filter
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Backend settings for [`init_logging`]
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directive string such as `"sdf_raymarch=trace,wgpu=warn"`. Takes
    /// precedence over `RUST_LOG`.
    pub filter: Option<String>,
    pub style: WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            style: WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_style(mut self, style: WriteStyle) -> Self {
        self.style = style;
        self
    }

    /// Directives to install, given the value of `RUST_LOG` if set.
    /// `None` means fall back to [`DEFAULT_LEVEL`].
    fn directives(&self, env: Option<String>) -> Option<String> {
        self.filter.clone().or(env).filter(|d| !d.trim().is_empty())
    }
}

static INSTALLED: Once = Once::new();

/// Installs an `env_logger` backend on the first call; later calls do nothing.
///
/// A backend the host registered earlier is left in place.
pub fn init_logging(config: LoggingConfig) {
    INSTALLED.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match config.directives(std::env::var("RUST_LOG").ok()) {
            Some(directives) => builder.parse_filters(&directives),
            None => builder.filter_level(DEFAULT_LEVEL),
        };
        builder.write_style(config.style);

        match builder.try_init() {
            Ok(()) => log::debug!("env_logger installed"),
            Err(_) => log::debug!("keeping the host's logger"),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_filter_beats_environment() {
        let config = LoggingConfig::default().with_filter("sdf_raymarch=trace");
        let directives = config.directives(Some("warn".to_string()));
        assert_eq!(directives.as_deref(), Some("sdf_raymarch=trace"));
    }

    #[test]
    fn test_environment_used_without_filter() {
        let config = LoggingConfig::default();
        let directives = config.directives(Some("wgpu=warn".to_string()));
        assert_eq!(directives.as_deref(), Some("wgpu=warn"));
        assert_eq!(config.directives(None), None);
    }

    #[test]
    fn test_blank_directives_fall_back_to_default() {
        let config = LoggingConfig::default().with_filter("  ");
        assert_eq!(config.directives(Some("debug".to_string())), None);
    }

    #[test]
    fn test_repeated_init_is_harmless() {
        init_logging(LoggingConfig::default().with_style(WriteStyle::Never));
        init_logging(LoggingConfig::default());
    }
}
