//! Requests a password reset email through the forgot-password flow.

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result, bail};
use clap::Parser;
use lock_config::{LockOptions, LogLevel, init_tracing};
use lock_core::{
    DatabasePasswordInteractor, HttpAuthentication, OfflineConnections,
};
use lock_ui::{
    BannerPresenter, DatabaseForgotPasswordPresenter, ForgotPasswordMessage,
    InputField, InputType, ReturnKey,
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "lock-forgot-password",
    about = "Request a password reset email through the Lock forgot-password flow"
)]
struct Cli {
    /// Tenant domain, e.g. `samples.auth0.com`, or a full base URL
    #[arg(long)]
    domain: String,
    #[arg(long)]
    client_id: String,
    /// Database connection the account belongs to
    #[arg(long, default_value = "Username-Password-Authentication")]
    connection: String,
    #[arg(long)]
    requires_username: bool,
    /// Options file (TOML or JSON); falls back to `$LOCK_OPTIONS_PATH`,
    /// `$LOCK_OPTIONS_JSON` and `lock.toml`
    #[arg(long)]
    options: Option<PathBuf>,
    /// Overrides the options' log level
    #[arg(long)]
    log_level: Option<LogLevel>,
    email: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut options = match &cli.options {
        Some(path) => LockOptions::load_from_file(path)?,
        None => LockOptions::load_from_env()?.0,
    };
    if let Some(level) = cli.log_level {
        options.log_level = level;
    }
    init_tracing(&options).context("failed to initialise logging")?;

    let mut configured = OfflineConnections::new();
    configured.database(&cli.connection, cli.requires_username);
    let connections = configured.select(&options.allowed_connections);

    let authentication = HttpAuthentication::new(&cli.domain, &cli.client_id)?
        .with_http_logging(options.log_http_requests);
    let interactor =
        Arc::new(DatabasePasswordInteractor::new(&connections, authentication));

    let banner = BannerPresenter::new();
    let mut presenter =
        DatabaseForgotPasswordPresenter::new(interactor, &connections)
            .with_message_presenter(Arc::new(banner.clone()));

    presenter.update(ForgotPasswordMessage::ValueChanged(InputField::new(
        InputType::Email,
        &cli.email,
    )));
    if presenter.view().form.input.valid != Some(true) {
        bail!("'{}' is not a valid email address", cli.email);
    }

    let input = presenter
        .view()
        .form
        .input
        .clone()
        .with_return_key(ReturnKey::Done);
    if let Some(request) =
        presenter.update(ForgotPasswordMessage::Returned(input))
    {
        request.await.context("password reset request task failed")?;
    }

    match banner.current() {
        Some(result) if result.success => {
            info!(email = %cli.email, "password reset requested");
            println!("{}", result.message);
            Ok(())
        }
        Some(result) => bail!("password reset failed: {}", result.message),
        None => bail!("password reset was not submitted"),
    }
}
