//! Console configuration
//!
//! Defines the tunable parameters of the console: the namespace prefix that
//! marks built-in jobs, the post-start settle delay, and the history page
//! size.

use std::time::Duration;

use crate::history::MAX_HISTORY_PAGE_SIZE;

/// Console configuration
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Type-name prefix identifying jobs shipped with the scheduler
    /// platform, as opposed to operator-authored ones.
    pub system_namespace_prefix: String,

    /// How long to wait after a start request before re-reading scheduler
    /// state. Gives the scheduler time to flip the running flag and write
    /// an initial log line; not a completion guarantee.
    pub settle_delay: Duration,

    /// Number of history entries requested per page. Clamped to
    /// [`MAX_HISTORY_PAGE_SIZE`].
    pub history_page_size: u32,
}

impl ConsoleConfig {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.system_namespace_prefix.is_empty() {
            anyhow::bail!("system_namespace_prefix cannot be empty");
        }

        if self.history_page_size == 0 {
            anyhow::bail!("history_page_size must be greater than 0");
        }

        Ok(())
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            system_namespace_prefix: "SystemJobs.".to_string(),
            settle_delay: Duration::from_secs(1),
            history_page_size: MAX_HISTORY_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConsoleConfig::default();
        assert_eq!(config.settle_delay, Duration::from_secs(1));
        assert_eq!(config.history_page_size, MAX_HISTORY_PAGE_SIZE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = ConsoleConfig::default();
        assert!(config.validate().is_ok());

        config.system_namespace_prefix = String::new();
        assert!(config.validate().is_err());

        config.system_namespace_prefix = "SystemJobs.".to_string();
        config.history_page_size = 0;
        assert!(config.validate().is_err());
    }
}
