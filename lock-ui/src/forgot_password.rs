//! Forgot-password screen presenter.
//!
//! The presenter owns the screen's view model and turns view events into
//! calls on a [`PasswordRecoverable`] interactor. The outcome of a request is
//! reported through the shared [`MessagePresenter`] from the request's
//! completion path only.

use std::sync::Arc;

use lock_core::{Connections, PasswordRecoverable};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::{
    input::{InputField, InputType, ReturnKey},
    message::MessagePresenter,
    view::DatabaseForgotPasswordView,
};

/// Banner text shown once the reset email has been requested.
pub const EMAIL_SENT_MESSAGE: &str =
    "We've just sent you an email to reset your password.";

/// Events emitted by the forgot-password view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForgotPasswordMessage {
    /// The user edited the field.
    ValueChanged(InputField),
    /// The user hit the return key on a field.
    Returned(InputField),
    /// The primary button was pressed.
    PrimaryPressed,
}

/// Presenter for the database connection's forgot-password screen.
pub struct DatabaseForgotPasswordPresenter {
    interactor: Arc<dyn PasswordRecoverable>,
    view: DatabaseForgotPasswordView,
    message_presenter: Option<Arc<dyn MessagePresenter>>,
}

impl std::fmt::Debug for DatabaseForgotPasswordPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseForgotPasswordPresenter")
            .field("view", &self.view)
            .field("has_message_presenter", &self.message_presenter.is_some())
            .finish()
    }
}

impl DatabaseForgotPasswordPresenter {
    /// Build the presenter and its view. The field is pre-filled with the
    /// interactor's email only when that email is already valid.
    pub fn new(
        interactor: Arc<dyn PasswordRecoverable>,
        connections: &dyn Connections,
    ) -> Self {
        let input_type = if connections.requires_username() {
            InputType::EmailOrUsername
        } else {
            InputType::Email
        };
        let email = if interactor.valid_email() {
            interactor.email()
        } else {
            None
        };

        Self {
            interactor,
            view: DatabaseForgotPasswordView::new(input_type, email),
            message_presenter: None,
        }
    }

    /// Builder form of [`Self::set_message_presenter`].
    pub fn with_message_presenter(
        mut self,
        message_presenter: Arc<dyn MessagePresenter>,
    ) -> Self {
        self.message_presenter = Some(message_presenter);
        self
    }

    /// Attach or detach the screen-wide banner collaborator.
    pub fn set_message_presenter(
        &mut self,
        message_presenter: Option<Arc<dyn MessagePresenter>>,
    ) {
        self.message_presenter = message_presenter;
    }

    /// The screen's view model.
    pub fn view(&self) -> &DatabaseForgotPasswordView {
        &self.view
    }

    /// Mutable view model, for hosts that add or drop the primary button.
    pub fn view_mut(&mut self) -> &mut DatabaseForgotPasswordView {
        &mut self.view
    }

    /// Handle a view event. Returns the handle of the spawned request when
    /// the event submitted the form.
    ///
    /// Submitting spawns onto the current tokio runtime. Outside a runtime
    /// the submit is dropped before the button is touched and `None` is
    /// returned.
    pub fn update(
        &mut self,
        message: ForgotPasswordMessage,
    ) -> Option<JoinHandle<()>> {
        match message {
            ForgotPasswordMessage::ValueChanged(input) => {
                self.on_value_change(input);
                None
            }
            ForgotPasswordMessage::Returned(input) => {
                if input.return_key == ReturnKey::Done {
                    self.submit()
                } else {
                    None
                }
            }
            ForgotPasswordMessage::PrimaryPressed => self.submit(),
        }
    }

    fn accepts(&self, input_type: InputType) -> bool {
        match self.view.form.input_type() {
            InputType::EmailOrUsername => matches!(
                input_type,
                InputType::Email | InputType::EmailOrUsername
            ),
            _ => input_type == InputType::Email,
        }
    }

    fn on_value_change(&mut self, input: InputField) {
        if let Some(messages) = &self.message_presenter {
            messages.hide();
        }

        if !self.accepts(input.input_type) {
            debug!(input_type = ?input.input_type, "ignoring unsupported input");
            return;
        }

        let field = &mut self.view.form.input;
        field.value = input.value;
        match self.interactor.update_email(&field.value) {
            Ok(()) => field.show_valid(),
            Err(err) => {
                debug!(error = %err, "email rejected");
                field.show_error();
            }
        }
    }

    fn submit(&self) -> Option<JoinHandle<()>> {
        let Some(button) = self.view.primary_button.clone() else {
            debug!("no primary button, ignoring submit");
            return None;
        };

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("no tokio runtime, ignoring submit");
            return None;
        };

        // Overlapping submits are not coalesced; each one issues a request.
        button.set_in_progress(true);
        let interactor = Arc::clone(&self.interactor);
        let messages = self.message_presenter.clone();

        Some(runtime.spawn(async move {
            let result = interactor.request_email().await;
            button.set_in_progress(false);

            match result {
                Ok(()) => {
                    info!("password reset email requested");
                    if let Some(messages) = messages {
                        messages.show_success(EMAIL_SENT_MESSAGE);
                    }
                }
                Err(err) => {
                    warn!(error = %err, "password reset request failed");
                    if let Some(messages) = messages {
                        messages.show_error(&err.to_string());
                    }
                }
            }
        }))
    }
}
