//! Configuration for the generator.

use anyhow::{bail, Result};

/// Generator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error) or a full filter directive.
    pub log_level: String,

    /// Program used to format generated files.
    pub rustfmt: String,

    /// Leave generated files unformatted.
    pub skip_fmt: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            rustfmt: "rustfmt".to_string(),
            skip_fmt: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let log_level = var("ARMID_LOG_LEVEL").unwrap_or(defaults.log_level);
        let rustfmt = var("ARMID_RUSTFMT").unwrap_or(defaults.rustfmt);

        let skip_fmt = match var("ARMID_SKIP_FMT").as_deref() {
            None | Some("") => defaults.skip_fmt,
            Some("1" | "true" | "yes") => true,
            Some("0" | "false" | "no") => false,
            Some(other) => bail!("ARMID_SKIP_FMT must be a boolean, got {other:?}"),
        };

        Ok(Self {
            log_level,
            rustfmt,
            skip_fmt,
        })
    }
}
