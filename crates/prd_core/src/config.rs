//! Compiled runtime defaults.
//!
//! The desk reads no config files or environment variables; callers start
//! from these defaults and override fields in code.

use crate::logging::default_log_level;
use std::path::PathBuf;

const LOG_DIR_NAME: &str = "prd_desk";

/// Logging backend settings consumed by `init_logging`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error`.
    pub level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: std::env::temp_dir().join(LOG_DIR_NAME).join("logs"),
        }
    }
}

/// Layout settings for the console dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardConfig {
    pub banner_width: usize,
    pub recent_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            banner_width: 60,
            recent_limit: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DashboardConfig, LoggingConfig};

    #[test]
    fn defaults_are_usable_without_overrides() {
        let logging = LoggingConfig::default();
        assert!(logging.log_dir.is_absolute());
        assert!(logging.log_dir.ends_with("prd_desk/logs"));

        let dashboard = DashboardConfig::default();
        assert_eq!(dashboard.banner_width, 60);
        assert_eq!(dashboard.recent_limit, 5);
    }
}
