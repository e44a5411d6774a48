//! Test doubles for crates built on top of `lock-core`.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::{
    error::{PasswordRecoverableError, ValidationError},
    recover::PasswordRecoverable,
};

/// Value rejected by [`StubForgotInteractor::update_email`].
pub const INVALID_EMAIL: &str = "invalid";

/// Canned outcome of `request_email`.
pub type RequestHandler =
    Arc<dyn Fn() -> Result<(), PasswordRecoverableError> + Send + Sync>;

/// Scriptable [`PasswordRecoverable`]: accepts every email except
/// [`INVALID_EMAIL`] and answers requests through a replaceable handler.
pub struct StubForgotInteractor {
    email: RwLock<Option<String>>,
    valid_email: RwLock<bool>,
    on_request: RwLock<RequestHandler>,
    requests: AtomicUsize,
}

impl std::fmt::Debug for StubForgotInteractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StubForgotInteractor")
            .field("email", &*self.email.read())
            .field("valid_email", &*self.valid_email.read())
            .field("requests", &self.requests.load(Ordering::SeqCst))
            .finish()
    }
}

impl Default for StubForgotInteractor {
    fn default() -> Self {
        Self {
            email: RwLock::new(None),
            valid_email: RwLock::new(false),
            on_request: RwLock::new(Arc::new(|| Ok(()))),
            requests: AtomicUsize::new(0),
        }
    }
}

impl StubForgotInteractor {
    /// Stub with no email and successful requests.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stored email and validity directly, bypassing validation.
    pub fn set_email(&self, email: Option<&str>, valid: bool) {
        *self.email.write() = email.map(str::to_string);
        *self.valid_email.write() = valid;
    }

    /// Replace the outcome of subsequent requests.
    pub fn on_request<F>(&self, handler: F)
    where
        F: Fn() -> Result<(), PasswordRecoverableError> + Send + Sync + 'static,
    {
        *self.on_request.write() = Arc::new(handler);
    }

    /// Number of `request_email` calls so far.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PasswordRecoverable for StubForgotInteractor {
    fn email(&self) -> Option<String> {
        self.email.read().clone()
    }

    fn valid_email(&self) -> bool {
        *self.valid_email.read()
    }

    fn update_email(&self, value: &str) -> Result<(), ValidationError> {
        if value == INVALID_EMAIL {
            *self.valid_email.write() = false;
            return Err(ValidationError::InvalidEmail(value.to_string()));
        }
        *self.valid_email.write() = true;
        *self.email.write() = Some(value.to_string());
        Ok(())
    }

    async fn request_email(&self) -> Result<(), PasswordRecoverableError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let handler = self.on_request.read().clone();
        handler()
    }
}
