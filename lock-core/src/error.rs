//! Error types for the password recovery flow.

use thiserror::Error;

/// Field level validation failure. Only ever used to flag an input as
/// invalid; never shown as a global message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("value is required")]
    Empty,

    #[error("invalid email: {0}")]
    InvalidEmail(String),
}

/// Outcome of a failed password recovery request.
///
/// The display text is the stable error code; the message collaborator shows
/// it as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordRecoverableError {
    #[error("NonValidInput")]
    NonValidInput,

    #[error("EmailNotSent")]
    EmailNotSent,

    #[error("NoDatabaseConnection")]
    NoDatabaseConnection,
}

/// Failure talking to the hosted identity service.
#[derive(Debug, Error)]
pub enum AuthenticationError {
    #[error("invalid identity service domain '{domain}': {source}")]
    InvalidDomain {
        domain: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("identity service responded {status}: {body}")]
    Response { status: u16, body: String },
}
