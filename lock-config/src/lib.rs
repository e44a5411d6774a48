//! Configuration library for Lock.
//!
//! Holds the widget options (with their defaulted fields and validated legal
//! links), loading of option overrides from files or the environment, and
//! the tracing setup that follows the configured log level.

pub mod loader;
pub mod logging;
pub mod options;

pub use loader::{OptionsSource, error::OptionsLoadError, sources::OptionsFile};
pub use logging::{LogLevel, init_tracing};
pub use options::{
    DEFAULT_PRIVACY_POLICY, DEFAULT_SCOPE, DEFAULT_TERMS_OF_SERVICE,
    LinkOption, LockOptions,
};
