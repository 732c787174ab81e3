//! Configuration module

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the scheduler admin API
    pub scheduler_url: String,
}
