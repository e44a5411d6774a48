//! Text fields and their validation state.

/// Kind of value a text field collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputType {
    /// Email address.
    Email,
    /// Username.
    Username,
    /// Either an email or a username.
    EmailOrUsername,
    /// Phone number.
    Phone,
    /// One-time code.
    OneTimePassword,
    /// Password.
    Password,
}

/// Return key shown on the keyboard for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnKey {
    /// More fields follow.
    #[default]
    Next,
    /// Last field of a form; returning submits.
    Done,
}

/// A single text field and its validation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    /// What the field collects.
    pub input_type: InputType,
    /// Current text.
    pub value: String,
    /// `None` until the field has been validated.
    pub valid: Option<bool>,
    /// Keyboard return key.
    pub return_key: ReturnKey,
}

impl InputField {
    /// Unvalidated field with a `Next` return key.
    pub fn new(input_type: InputType, value: impl Into<String>) -> Self {
        Self {
            input_type,
            value: value.into(),
            valid: None,
            return_key: ReturnKey::default(),
        }
    }

    /// Builder form of [`Self::return_key`].
    pub fn with_return_key(mut self, return_key: ReturnKey) -> Self {
        self.return_key = return_key;
        self
    }

    /// Mark the value as accepted.
    pub fn show_valid(&mut self) {
        self.valid = Some(true);
    }

    /// Mark the value as rejected.
    pub fn show_error(&mut self) {
        self.valid = Some(false);
    }
}
