//! Core library for Lock.
//!
//! Domain types shared by the widget screens: the configured identity
//! provider connections, the password recovery capability consumed by the
//! forgot-password screen together with its production implementation, and
//! the HTTP client for the hosted identity service.

pub mod authentication;
pub mod connections;
pub mod error;
pub mod recover;
pub mod validation;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use authentication::{Authentication, HttpAuthentication};
pub use connections::{Connections, DatabaseConnection, OfflineConnections};
pub use error::{AuthenticationError, PasswordRecoverableError, ValidationError};
pub use recover::{DatabasePasswordInteractor, PasswordRecoverable};
