//! Serde model of option overrides.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{logging::LogLevel, options::LockOptions};

/// On-disk / inline representation of [`LockOptions`]. Every field is
/// optional; anything left out keeps its default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionsFile {
    /// Overrides [`LockOptions`]'s `closable`.
    pub closable: Option<bool>,
    /// Overrides [`LockOptions`]'s `terms_of_service`.
    pub terms_of_service: Option<String>,
    /// Overrides [`LockOptions`]'s `privacy_policy`.
    pub privacy_policy: Option<String>,
    /// Overrides [`LockOptions`]'s `scope`.
    pub scope: Option<String>,
    /// Overrides [`LockOptions`]'s `parameters`.
    pub parameters: Option<HashMap<String, String>>,
    /// Overrides [`LockOptions`]'s `allowed_connections`.
    pub allowed_connections: Option<Vec<String>>,
    /// Overrides [`LockOptions`]'s `log_level`.
    pub log_level: Option<LogLevel>,
    /// Overrides [`LockOptions`]'s `log_http_requests`.
    pub log_http_requests: Option<bool>,
}

impl OptionsFile {
    /// Overlay the fields present in this file onto `options`.
    ///
    /// Links go through the regular setters, so a malformed URL is stored as
    /// text but the parsed link stays on its previous value.
    pub fn apply(self, options: &mut LockOptions) {
        if let Some(closable) = self.closable {
            options.closable = closable;
        }
        if let Some(tos) = self.terms_of_service
            && !options.set_terms_of_service(tos.clone())
        {
            warn!(
                value = %tos,
                fallback = %options.terms_of_service_url(),
                "ignoring invalid terms_of_service url"
            );
        }
        if let Some(privacy) = self.privacy_policy
            && !options.set_privacy_policy(privacy.clone())
        {
            warn!(
                value = %privacy,
                fallback = %options.privacy_policy_url(),
                "ignoring invalid privacy_policy url"
            );
        }
        if let Some(scope) = self.scope {
            options.scope = scope;
        }
        if let Some(parameters) = self.parameters {
            options.parameters = parameters;
        }
        if let Some(allowed) = self.allowed_connections {
            options.allowed_connections = allowed;
        }
        if let Some(level) = self.log_level {
            options.log_level = level;
        }
        if let Some(log_http) = self.log_http_requests {
            options.log_http_requests = log_http;
        }
    }
}

impl From<OptionsFile> for LockOptions {
    fn from(file: OptionsFile) -> Self {
        let mut options = LockOptions::default();
        file.apply(&mut options);
        options
    }
}
