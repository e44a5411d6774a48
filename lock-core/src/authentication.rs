//! Client for the hosted identity service's database endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::error::AuthenticationError;

const CHANGE_PASSWORD_PATH: &str = "dbconnections/change_password";

/// Identity service operations used by the widget.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authentication: Send + Sync {
    /// Ask the service to email a password reset link for `email` on the
    /// given database connection.
    async fn reset_password(
        &self,
        email: &str,
        connection: &str,
    ) -> Result<(), AuthenticationError>;
}

#[derive(Debug, Serialize)]
struct ChangePasswordRequest<'a> {
    client_id: &'a str,
    email: &'a str,
    connection: &'a str,
}

/// [`Authentication`] over HTTPS against a tenant domain.
#[derive(Debug, Clone)]
pub struct HttpAuthentication {
    client: Client,
    base_url: Url,
    client_id: String,
    log_http_requests: bool,
}

impl HttpAuthentication {
    /// `domain` is either a bare host (`tenant.auth0.com`, HTTPS assumed) or
    /// a full base URL.
    pub fn new(
        domain: &str,
        client_id: impl Into<String>,
    ) -> Result<Self, AuthenticationError> {
        let base_url = base_url(domain)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url,
            client_id: client_id.into(),
            log_http_requests: false,
        })
    }

    /// Log each request and response at debug level.
    pub fn with_http_logging(mut self, enabled: bool) -> Self {
        self.log_http_requests = enabled;
        self
    }

    /// Tenant base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Application client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}

fn base_url(domain: &str) -> Result<Url, AuthenticationError> {
    let trimmed = domain.trim().trim_end_matches('/');
    let raw = if trimmed.contains("://") {
        format!("{trimmed}/")
    } else {
        format!("https://{trimmed}/")
    };

    let url = Url::parse(&raw).map_err(|source| {
        AuthenticationError::InvalidDomain {
            domain: domain.to_string(),
            source,
        }
    })?;
    if !url.has_host() {
        return Err(AuthenticationError::InvalidDomain {
            domain: domain.to_string(),
            source: url::ParseError::EmptyHost,
        });
    }
    Ok(url)
}

#[async_trait]
impl Authentication for HttpAuthentication {
    async fn reset_password(
        &self,
        email: &str,
        connection: &str,
    ) -> Result<(), AuthenticationError> {
        let url = self.base_url.join(CHANGE_PASSWORD_PATH).map_err(|source| {
            AuthenticationError::InvalidDomain {
                domain: self.base_url.to_string(),
                source,
            }
        })?;
        let body = ChangePasswordRequest {
            client_id: &self.client_id,
            email,
            connection,
        };

        if self.log_http_requests {
            debug!(method = "POST", %url, connection, "identity service request");
        }

        let response = self.client.post(url.clone()).json(&body).send().await?;
        let status = response.status();

        if self.log_http_requests {
            debug!(%url, status = status.as_u16(), "identity service response");
        }

        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!(
            status = status.as_u16(),
            "password reset rejected by identity service"
        );
        Err(AuthenticationError::Response {
            status: status.as_u16(),
            body,
        })
    }
}
