//! Password recovery use case.

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{info, warn};

use crate::{
    authentication::Authentication,
    connections::{Connections, DatabaseConnection},
    error::{PasswordRecoverableError, ValidationError},
    validation::validate_email,
};

/// Capability consumed by the forgot-password screen.
///
/// Implementations keep the email being recovered and whether it passed
/// validation; `request_email` is the only call that leaves the process.
#[async_trait]
pub trait PasswordRecoverable: Send + Sync {
    fn email(&self) -> Option<String>;

    fn valid_email(&self) -> bool;

    /// Validate and store `value`. A rejected value marks the email invalid
    /// but leaves the previously stored one in place.
    fn update_email(&self, value: &str) -> Result<(), ValidationError>;

    /// Request a password reset email for the stored address.
    async fn request_email(&self) -> Result<(), PasswordRecoverableError>;
}

#[derive(Debug, Default)]
struct RecoverState {
    email: Option<String>,
    valid_email: bool,
}

/// Recovers passwords of the first configured database connection.
#[derive(Debug)]
pub struct DatabasePasswordInteractor<A> {
    state: RwLock<RecoverState>,
    database: Option<DatabaseConnection>,
    authentication: A,
}

impl<A: Authentication> DatabasePasswordInteractor<A> {
    /// Interactor bound to the first database connection.
    pub fn new(connections: &dyn Connections, authentication: A) -> Self {
        Self {
            state: RwLock::new(RecoverState::default()),
            database: connections.database().cloned(),
            authentication,
        }
    }

    /// Seed the interactor with an email entered on a previous screen.
    pub fn with_email(self, email: &str) -> Self {
        // An invalid seed just leaves the interactor without a valid email.
        let _ = self.update_email(email);
        self
    }
}

#[async_trait]
impl<A: Authentication> PasswordRecoverable for DatabasePasswordInteractor<A> {
    fn email(&self) -> Option<String> {
        self.state.read().email.clone()
    }

    fn valid_email(&self) -> bool {
        self.state.read().valid_email
    }

    fn update_email(&self, value: &str) -> Result<(), ValidationError> {
        let mut state = self.state.write();
        match validate_email(value) {
            Ok(email) => {
                state.email = Some(email);
                state.valid_email = true;
                Ok(())
            }
            Err(err) => {
                state.valid_email = false;
                Err(err)
            }
        }
    }

    async fn request_email(&self) -> Result<(), PasswordRecoverableError> {
        let email = {
            let state = self.state.read();
            match (&state.email, state.valid_email) {
                (Some(email), true) => email.clone(),
                _ => return Err(PasswordRecoverableError::NonValidInput),
            }
        };
        let Some(database) = self.database.as_ref() else {
            return Err(PasswordRecoverableError::NoDatabaseConnection);
        };

        match self
            .authentication
            .reset_password(&email, &database.name)
            .await
        {
            Ok(()) => {
                info!(connection = %database.name, "password reset email requested");
                Ok(())
            }
            Err(err) => {
                warn!(
                    connection = %database.name,
                    error = %err,
                    "failed to request password reset email"
                );
                Err(PasswordRecoverableError::EmailNotSent)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        authentication::MockAuthentication, connections::OfflineConnections,
        error::AuthenticationError,
    };

    const EMAIL: &str = "info@auth0.com";
    const CONNECTION: &str = "Username-Password-Authentication";

    fn connections() -> OfflineConnections {
        let mut connections = OfflineConnections::new();
        OfflineConnections::database(&mut connections, CONNECTION, false);
        connections
    }

    #[test]
    fn starts_without_email() {
        let interactor = DatabasePasswordInteractor::new(
            &connections(),
            MockAuthentication::new(),
        );
        assert_eq!(interactor.email(), None);
        assert!(!interactor.valid_email());
    }

    #[test]
    fn stores_valid_email() {
        let interactor = DatabasePasswordInteractor::new(
            &connections(),
            MockAuthentication::new(),
        );

        interactor.update_email(" info@auth0.com ").expect("valid");
        assert_eq!(interactor.email().as_deref(), Some(EMAIL));
        assert!(interactor.valid_email());
    }

    #[test]
    fn invalid_email_keeps_previous_value() {
        let interactor = DatabasePasswordInteractor::new(
            &connections(),
            MockAuthentication::new(),
        )
        .with_email(EMAIL);

        let err = interactor.update_email("invalid").expect_err("invalid");
        assert_eq!(err, ValidationError::InvalidEmail("invalid".into()));
        assert_eq!(interactor.email().as_deref(), Some(EMAIL));
        assert!(!interactor.valid_email());
    }

    #[tokio::test]
    async fn request_without_valid_email_fails() {
        let mut auth = MockAuthentication::new();
        auth.expect_reset_password().never();
        let interactor = DatabasePasswordInteractor::new(&connections(), auth);

        assert_eq!(
            interactor.request_email().await,
            Err(PasswordRecoverableError::NonValidInput)
        );
    }

    #[tokio::test]
    async fn request_without_database_fails() {
        let mut auth = MockAuthentication::new();
        auth.expect_reset_password().never();
        let interactor =
            DatabasePasswordInteractor::new(&OfflineConnections::new(), auth)
                .with_email(EMAIL);

        assert_eq!(
            interactor.request_email().await,
            Err(PasswordRecoverableError::NoDatabaseConnection)
        );
    }

    #[tokio::test]
    async fn request_resets_password_on_database_connection() {
        let mut auth = MockAuthentication::new();
        auth.expect_reset_password()
            .withf(|email, connection| {
                email == EMAIL && connection == CONNECTION
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let interactor = DatabasePasswordInteractor::new(&connections(), auth)
            .with_email(EMAIL);

        assert_eq!(interactor.request_email().await, Ok(()));
    }

    #[tokio::test]
    async fn service_failure_maps_to_email_not_sent() {
        let mut auth = MockAuthentication::new();
        auth.expect_reset_password().times(1).returning(|_, _| {
            Err(AuthenticationError::Response {
                status: 400,
                body: "bad request".into(),
            })
        });
        let interactor = DatabasePasswordInteractor::new(&connections(), auth)
            .with_email(EMAIL);

        assert_eq!(
            interactor.request_email().await,
            Err(PasswordRecoverableError::EmailNotSent)
        );
    }
}
