use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use lock_core::{
    OfflineConnections, PasswordRecoverable, PasswordRecoverableError,
    testing::{INVALID_EMAIL, StubForgotInteractor},
};
use lock_ui::{
    BannerPresenter, DatabaseForgotPasswordPresenter, ForgotPasswordMessage,
    InputField, InputType, MessagePresenter, ReturnKey,
};

const EMAIL: &str = "info@auth0.com";
const CONNECTION: &str = "Username-Password-Authentication";

struct Fixture {
    interactor: Arc<StubForgotInteractor>,
    messages: BannerPresenter,
    connections: OfflineConnections,
    presenter: DatabaseForgotPasswordPresenter,
}

fn connections(requires_username: bool) -> OfflineConnections {
    let mut connections = OfflineConnections::new();
    connections.database(CONNECTION, requires_username);
    connections
}

fn fixture_with(connections: OfflineConnections) -> Fixture {
    let interactor = Arc::new(StubForgotInteractor::new());
    let messages = BannerPresenter::new();
    let presenter = DatabaseForgotPasswordPresenter::new(
        interactor.clone(),
        &connections,
    )
    .with_message_presenter(Arc::new(messages.clone()));

    Fixture {
        interactor,
        messages,
        connections,
        presenter,
    }
}

fn fixture() -> Fixture {
    fixture_with(connections(true))
}

fn email_input(value: &str) -> InputField {
    InputField::new(InputType::Email, value)
}

#[test]
fn uses_valid_email_from_interactor() {
    let f = fixture();
    f.interactor.set_email(Some(EMAIL), true);

    let presenter =
        DatabaseForgotPasswordPresenter::new(f.interactor.clone(), &f.connections);
    assert_eq!(presenter.view().form.value(), EMAIL);
}

#[test]
fn ignores_invalid_email_from_interactor() {
    let f = fixture();
    f.interactor.set_email(Some(EMAIL), false);

    let presenter =
        DatabaseForgotPasswordPresenter::new(f.interactor.clone(), &f.connections);
    assert_ne!(presenter.view().form.value(), EMAIL);
    assert!(presenter.view().form.value().is_empty());
}

#[test]
fn input_kind_follows_username_requirement() {
    let with_username = fixture_with(connections(true));
    assert_eq!(
        with_username.presenter.view().form.input_type(),
        InputType::EmailOrUsername
    );

    let email_only = fixture_with(connections(false));
    assert_eq!(
        email_only.presenter.view().form.input_type(),
        InputType::Email
    );
}

#[test]
fn input_change_clears_global_message() {
    let mut f = fixture();
    f.messages.show_error("Some Error");

    f.presenter
        .update(ForgotPasswordMessage::ValueChanged(email_input(EMAIL)));

    assert_eq!(f.messages.success(), None);
    assert_eq!(f.messages.message(), None);
}

#[test]
fn mismatched_input_still_clears_global_message() {
    let mut f = fixture();
    f.messages.show_error("Some Error");

    f.presenter.update(ForgotPasswordMessage::ValueChanged(InputField::new(
        InputType::Phone,
        "+1234567890",
    )));

    assert_eq!(f.messages.success(), None);
    assert_eq!(f.messages.message(), None);
    assert_eq!(f.interactor.email(), None);
}

#[test]
fn input_change_updates_email() {
    let mut f = fixture();

    f.presenter
        .update(ForgotPasswordMessage::ValueChanged(email_input(EMAIL)));

    assert_eq!(f.interactor.email().as_deref(), Some(EMAIL));
}

#[test]
fn mismatched_input_type_is_ignored() {
    let mut f = fixture();

    f.presenter.update(ForgotPasswordMessage::ValueChanged(
        InputField::new(InputType::Phone, "+1234567890"),
    ));

    assert_eq!(f.interactor.email(), None);
    assert_eq!(f.presenter.view().form.value(), "");
    assert_eq!(f.presenter.view().form.input.valid, None);
}

#[test]
fn email_or_username_input_is_accepted_when_username_is_required() {
    let mut f = fixture_with(connections(true));

    f.presenter.update(ForgotPasswordMessage::ValueChanged(
        InputField::new(InputType::EmailOrUsername, EMAIL),
    ));
    assert_eq!(f.interactor.email().as_deref(), Some(EMAIL));

    let mut email_only = fixture_with(connections(false));
    email_only.presenter.update(ForgotPasswordMessage::ValueChanged(
        InputField::new(InputType::EmailOrUsername, EMAIL),
    ));
    assert_eq!(email_only.interactor.email(), None);
}

#[test]
fn valid_value_hides_field_error() {
    let mut f = fixture();

    f.presenter
        .update(ForgotPasswordMessage::ValueChanged(email_input(EMAIL)));

    assert_eq!(f.presenter.view().form.input.valid, Some(true));
    assert_eq!(f.presenter.view().form.value(), EMAIL);
}

#[test]
fn invalid_value_shows_field_error() {
    let mut f = fixture();

    f.presenter.update(ForgotPasswordMessage::ValueChanged(email_input(
        INVALID_EMAIL,
    )));

    assert_eq!(f.presenter.view().form.input.valid, Some(false));
    assert!(!f.interactor.valid_email());
    assert_eq!(f.interactor.email(), None);
}

#[test]
fn submit_without_runtime_is_dropped() {
    let mut f = fixture();

    let handle = f.presenter.update(ForgotPasswordMessage::PrimaryPressed);

    assert!(handle.is_none());
    let button = f.presenter.view().primary_button.as_ref().expect("button");
    assert!(!button.in_progress());
    assert_eq!(f.interactor.requests(), 0);
    assert_eq!(f.messages.success(), None);
}

#[tokio::test]
async fn return_on_last_field_triggers_request() {
    let mut f = fixture();
    let input = email_input(EMAIL).with_return_key(ReturnKey::Done);

    let handle = f
        .presenter
        .update(ForgotPasswordMessage::Returned(input))
        .expect("request spawned");
    handle.await.expect("request task");

    assert_eq!(f.interactor.requests(), 1);
}

#[tokio::test]
async fn return_on_intermediate_field_does_not_submit() {
    let mut f = fixture();
    let input = email_input(EMAIL).with_return_key(ReturnKey::Next);

    assert!(f.presenter.update(ForgotPasswordMessage::Returned(input)).is_none());
    assert_eq!(f.interactor.requests(), 0);
}

#[tokio::test]
async fn missing_button_makes_submit_a_no_op() {
    let mut f = fixture();
    f.interactor
        .on_request(|| Err(PasswordRecoverableError::EmailNotSent));
    f.presenter.view_mut().primary_button = None;

    let input = InputField::new(InputType::OneTimePassword, "123456")
        .with_return_key(ReturnKey::Done);
    assert!(f.presenter.update(ForgotPasswordMessage::Returned(input)).is_none());
    assert!(f.presenter.update(ForgotPasswordMessage::PrimaryPressed).is_none());

    tokio::task::yield_now().await;
    assert_eq!(f.messages.success(), None);
    assert_eq!(f.interactor.requests(), 0);
}

#[tokio::test]
async fn failed_request_shows_global_error() {
    let mut f = fixture();
    f.interactor
        .on_request(|| Err(PasswordRecoverableError::EmailNotSent));

    f.presenter
        .update(ForgotPasswordMessage::PrimaryPressed)
        .expect("request spawned")
        .await
        .expect("request task");

    assert_eq!(f.messages.success(), Some(false));
    assert_eq!(f.messages.message().as_deref(), Some("EmailNotSent"));
}

#[tokio::test]
async fn successful_request_shows_global_success() {
    let mut f = fixture();
    f.interactor.on_request(|| Ok(()));

    f.presenter
        .update(ForgotPasswordMessage::PrimaryPressed)
        .expect("request spawned")
        .await
        .expect("request task");

    assert_eq!(f.messages.success(), Some(true));
    assert!(f.messages.message().is_some());
}

#[tokio::test]
async fn button_press_triggers_request() {
    let mut f = fixture();

    f.presenter
        .update(ForgotPasswordMessage::PrimaryPressed)
        .expect("request spawned")
        .await
        .expect("request task");

    assert_eq!(f.interactor.requests(), 1);
}

#[tokio::test]
async fn button_is_in_progress_during_request() {
    let mut f = fixture();
    let button = f
        .presenter
        .view()
        .primary_button
        .clone()
        .expect("primary button");
    let observed = Arc::new(AtomicBool::new(false));

    let seen = observed.clone();
    let during = button.clone();
    f.interactor.on_request(move || {
        seen.store(during.in_progress(), Ordering::SeqCst);
        Ok(())
    });

    f.presenter
        .update(ForgotPasswordMessage::PrimaryPressed)
        .expect("request spawned")
        .await
        .expect("request task");

    assert!(observed.load(Ordering::SeqCst));
    assert!(!button.in_progress());
}

#[tokio::test]
async fn button_returns_to_normal_after_failed_request() {
    let mut f = fixture();
    f.interactor
        .on_request(|| Err(PasswordRecoverableError::NoDatabaseConnection));

    let handle = f
        .presenter
        .update(ForgotPasswordMessage::PrimaryPressed)
        .expect("request spawned");
    handle.await.expect("request task");

    let button = f.presenter.view().primary_button.as_ref().expect("button");
    assert!(!button.in_progress());
    assert_eq!(f.messages.message().as_deref(), Some("NoDatabaseConnection"));
}

#[tokio::test]
async fn overlapping_submits_each_issue_a_request() {
    let mut f = fixture();

    let first = f
        .presenter
        .update(ForgotPasswordMessage::PrimaryPressed)
        .expect("first");
    let second = f
        .presenter
        .update(ForgotPasswordMessage::PrimaryPressed)
        .expect("second");
    first.await.expect("first task");
    second.await.expect("second task");

    assert_eq!(f.interactor.requests(), 2);
    assert_eq!(f.messages.success(), Some(true));
}

#[tokio::test]
async fn works_without_message_presenter() {
    let interactor = Arc::new(StubForgotInteractor::new());
    let mut presenter =
        DatabaseForgotPasswordPresenter::new(interactor.clone(), &connections(false));

    presenter
        .update(ForgotPasswordMessage::PrimaryPressed)
        .expect("request spawned")
        .await
        .expect("request task");

    assert_eq!(interactor.requests(), 1);
}
