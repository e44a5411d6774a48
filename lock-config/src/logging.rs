//! Logging setup driven by [`LockOptions::log_level`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::options::LockOptions;

/// Verbosity of the widget's own log output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No output.
    #[default]
    Off,
    /// Failures only.
    Error,
    /// Failures and recoverable problems.
    Warn,
    /// Flow milestones such as requests sent.
    Info,
    /// Per-event detail.
    Debug,
    /// Everything, including HTTP traces.
    Verbose,
}

impl LogLevel {
    /// `EnvFilter` directive equivalent of this level.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Verbose => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Verbose => "verbose",
        };
        f.write_str(name)
    }
}

/// Returned when parsing a [`LogLevel`] from an unknown name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level '{0}'")]
pub struct UnknownLogLevel(pub String);

impl FromStr for LogLevel {
    type Err = UnknownLogLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(LogLevel::Off),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "verbose" | "trace" | "all" => Ok(LogLevel::Verbose),
            other => Err(UnknownLogLevel(other.to_string())),
        }
    }
}

/// Filter used by [`init_tracing`]. `RUST_LOG` wins over the options.
pub fn env_filter(options: &LockOptions) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.log_level.directive()))
}

/// Install a global fmt subscriber. Fails if one is already installed.
pub fn init_tracing(
    options: &LockOptions,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(options))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
