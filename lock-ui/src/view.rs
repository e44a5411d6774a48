//! View models for the forgot-password screen.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::input::{InputField, InputType, ReturnKey};

/// Screen title.
pub const FORGOT_PASSWORD_TITLE: &str = "Reset Password";
/// Primary button title.
pub const FORGOT_PASSWORD_ACTION: &str = "Send Email";

/// Submit button. Clones share the same progress flag, so a handle kept by
/// an in-flight request drives the button shown in the view.
#[derive(Debug, Clone)]
pub struct PrimaryButton {
    /// Button label.
    pub title: String,
    in_progress: Arc<AtomicBool>,
}

impl PrimaryButton {
    /// Idle button with the given label.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            in_progress: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a request started by this button is still running.
    pub fn in_progress(&self) -> bool {
        self.in_progress.load(Ordering::SeqCst)
    }

    pub(crate) fn set_in_progress(&self, in_progress: bool) {
        self.in_progress.store(in_progress, Ordering::SeqCst);
    }
}

/// Form with exactly one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleInputView {
    /// The only field.
    pub input: InputField,
}

impl SingleInputView {
    /// Field of `input_type` pre-filled with `value`; returning submits.
    pub fn new(input_type: InputType, value: Option<String>) -> Self {
        let input = InputField::new(input_type, value.unwrap_or_default())
            .with_return_key(ReturnKey::Done);
        Self { input }
    }

    /// Current field text.
    pub fn value(&self) -> &str {
        &self.input.value
    }

    /// Kind of the field.
    pub fn input_type(&self) -> InputType {
        self.input.input_type
    }
}

/// View model of the database forgot-password screen.
#[derive(Debug, Clone)]
pub struct DatabaseForgotPasswordView {
    /// Screen title.
    pub title: &'static str,
    /// Email or username form.
    pub form: SingleInputView,
    /// `None` once the host removed the action; submitting is then a no-op.
    pub primary_button: Option<PrimaryButton>,
}

impl DatabaseForgotPasswordView {
    /// Screen with a `Send Email` button.
    pub fn new(input_type: InputType, email: Option<String>) -> Self {
        Self {
            title: FORGOT_PASSWORD_TITLE,
            form: SingleInputView::new(input_type, email),
            primary_button: Some(PrimaryButton::new(FORGOT_PASSWORD_ACTION)),
        }
    }
}
