//! Headless presenters for the Lock widget screens.
//!
//! Views are plain data; a host toolkit renders them and feeds user events
//! back as messages. Screen-wide banners go through [`MessagePresenter`].

pub mod forgot_password;
pub mod input;
pub mod message;
pub mod view;

pub use forgot_password::{
    DatabaseForgotPasswordPresenter, EMAIL_SENT_MESSAGE, ForgotPasswordMessage,
};
pub use input::{InputField, InputType, ReturnKey};
pub use message::{Banner, BannerPresenter, MessagePresenter};
pub use view::{DatabaseForgotPasswordView, PrimaryButton, SingleInputView};
