//! Startup configuration from the environment

use std::env;
use tracing_subscriber::EnvFilter;
use unitconv_core::DEFAULT_PRECISION;

/// Decimal places for displayed results
pub const PRECISION_VAR: &str = "UNITCONV_PRECISION";
/// Log filter directives
pub const LOG_VAR: &str = "RUST_LOG";

pub const DEFAULT_LOG_FILTER: &str = "info";
const MAX_PRECISION: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub precision: usize,
    pub log_filter: String,
    /// Raw precision value that could not be used as given
    rejected_precision: Option<String>,
    /// Raw log filter that did not parse
    rejected_log_filter: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from a variable lookup
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut rejected_log_filter = None;
        let log_filter = match lookup(LOG_VAR).filter(|s| !s.trim().is_empty()) {
            None => DEFAULT_LOG_FILTER.to_string(),
            Some(raw) if EnvFilter::try_new(&raw).is_ok() => raw,
            Some(raw) => {
                rejected_log_filter = Some(raw);
                DEFAULT_LOG_FILTER.to_string()
            }
        };

        let mut rejected_precision = None;
        let precision = match lookup(PRECISION_VAR) {
            None => DEFAULT_PRECISION,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(p) if p <= MAX_PRECISION => p,
                Ok(_) => {
                    rejected_precision = Some(raw);
                    MAX_PRECISION
                }
                Err(_) => {
                    rejected_precision = Some(raw);
                    DEFAULT_PRECISION
                }
            },
        };

        Self { precision, log_filter, rejected_precision, rejected_log_filter }
    }

    /// The precision value that was replaced by a default or clamped, if any
    pub fn rejected_precision(&self) -> Option<&str> {
        self.rejected_precision.as_deref()
    }

    /// The log filter that was replaced by the default, if any
    pub fn rejected_log_filter(&self) -> Option<&str> {
        self.rejected_log_filter.as_deref()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            rejected_precision: None,
            rejected_log_filter: None,
        }
    }
}
