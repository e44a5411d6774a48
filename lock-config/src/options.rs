//! Widget options.
//!
//! Most fields are plain values with defaults. The two legal links (terms of
//! service and privacy policy) keep the string the caller assigned alongside
//! a parsed [`Url`]; the parsed form only ever changes to a valid absolute
//! URL, so a bad assignment leaves the last good link in place.

use std::collections::HashMap;

use url::Url;

use crate::logging::LogLevel;

/// Terms of service link used until the host assigns its own.
pub const DEFAULT_TERMS_OF_SERVICE: &str = "https://auth0.com/terms";
/// Privacy policy link used until the host assigns its own.
pub const DEFAULT_PRIVACY_POLICY: &str = "https://auth0.com/privacy";
/// OAuth2 scope requested when none is configured.
pub const DEFAULT_SCOPE: &str = "openid";

/// A string option with a derived URL that never holds an invalid value.
///
/// `url_str` is the last valid value exactly as assigned (trimmed), while
/// `url` is its parsed, normalised form; `https://mysite.com` reads back
/// unchanged from `url_str` but as `https://mysite.com/` from `url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOption {
    raw: String,
    valid: String,
    url: Url,
}

impl LinkOption {
    fn with_default(default: &str) -> Self {
        Self {
            raw: default.to_string(),
            valid: default.to_string(),
            url: Url::parse(default)
                .expect("built-in link defaults are absolute URLs"),
        }
    }

    /// Assign a new string. Returns whether the derived URL followed it.
    pub fn set(&mut self, value: impl Into<String>) -> bool {
        self.raw = value.into();
        match parse_absolute(&self.raw) {
            Some(url) => {
                self.valid = self.raw.trim().to_string();
                self.url = url;
                true
            }
            None => false,
        }
    }

    /// The string last assigned, valid or not.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The last valid link as it was assigned.
    pub fn url_str(&self) -> &str {
        &self.valid
    }

    /// Parsed form of [`Self::url_str`].
    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Strict parse: the value must be an absolute URL with a host.
fn parse_absolute(value: &str) -> Option<Url> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Url::parse(trimmed).ok().filter(|url| url.has_host())
}

/// Configuration for a Lock widget instance.
#[derive(Debug, Clone, PartialEq)]
pub struct LockOptions {
    /// Whether the widget can be dismissed by the user.
    pub closable: bool,
    terms_of_service: LinkOption,
    privacy_policy: LinkOption,
    /// OAuth2 scope requested on authentication.
    pub scope: String,
    /// Extra authentication parameters forwarded to the identity service.
    pub parameters: HashMap<String, String>,
    /// Connection names the widget may use. Empty allows every connection.
    pub allowed_connections: Vec<String>,
    /// Verbosity of the widget's own logging.
    pub log_level: LogLevel,
    /// Log every request/response made against the identity service.
    pub log_http_requests: bool,
}

impl Default for LockOptions {
    fn default() -> Self {
        Self {
            closable: false,
            terms_of_service: LinkOption::with_default(
                DEFAULT_TERMS_OF_SERVICE,
            ),
            privacy_policy: LinkOption::with_default(DEFAULT_PRIVACY_POLICY),
            scope: DEFAULT_SCOPE.to_string(),
            parameters: HashMap::new(),
            allowed_connections: Vec::new(),
            log_level: LogLevel::default(),
            log_http_requests: false,
        }
    }
}

impl LockOptions {
    /// Options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Terms of service as last assigned, even when it is not a URL.
    pub fn terms_of_service(&self) -> &str {
        self.terms_of_service.as_str()
    }

    /// Last valid terms of service link, as assigned.
    pub fn terms_of_service_url_str(&self) -> &str {
        self.terms_of_service.url_str()
    }

    /// Parsed terms of service link; never invalid.
    pub fn terms_of_service_url(&self) -> &Url {
        self.terms_of_service.url()
    }

    /// Returns `false` when the value is not a URL; the string is still
    /// stored but [`Self::terms_of_service_url`] keeps its previous value.
    pub fn set_terms_of_service(&mut self, value: impl Into<String>) -> bool {
        self.terms_of_service.set(value)
    }

    /// Privacy policy as last assigned, even when it is not a URL.
    pub fn privacy_policy(&self) -> &str {
        self.privacy_policy.as_str()
    }

    /// Last valid privacy policy link, as assigned.
    pub fn privacy_policy_url_str(&self) -> &str {
        self.privacy_policy.url_str()
    }

    /// Parsed privacy policy link; never invalid.
    pub fn privacy_policy_url(&self) -> &Url {
        self.privacy_policy.url()
    }

    /// Same fallback rule as [`Self::set_terms_of_service`].
    pub fn set_privacy_policy(&mut self, value: impl Into<String>) -> bool {
        self.privacy_policy.set(value)
    }

    /// Builder form of [`Self::closable`].
    pub fn with_closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Builder form of [`Self::scope`].
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Add one entry to [`Self::parameters`].
    pub fn with_parameter(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Builder form of [`Self::allowed_connections`].
    pub fn with_allowed_connections<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_connections = names.into_iter().map(Into::into).collect();
        self
    }

    /// Builder form of [`Self::log_level`].
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}
