//! Client configuration.
//!
//! [`Config`] carries the base URL and credentials. It is a plain
//! deserializable value: loading it from files or the environment is left to
//! the caller. Authentication invariants are checked lazily, when a request
//! is built, not when the value is constructed.

use serde::{Deserialize, Serialize};

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.ticketswitch.com";

/// Credentials and endpoint for the TicketSwitch API.
///
/// Two authentication modes are supported:
///
/// - header auth: `user` and `password` are sent as HTTP Basic credentials
/// - crypto-block auth: `user` and `crypto_block` are sent as query parameters
///
/// `sub_user` is orthogonal to both and is sent as `sub_id`. Empty strings
/// are treated the same as absent values.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API base URL, e.g. `https://api.ticketswitch.com`.
    pub base_url: String,
    /// Account user id.
    pub user: Option<String>,
    /// Account password, used in header-auth mode.
    pub password: Option<String>,
    /// Optional sub-user id.
    pub sub_user: Option<String>,
    /// Preferred response language, sent as `Accept-Language`.
    pub language: Option<String>,
    /// Pre-computed crypto block; switches to query-parameter auth.
    pub crypto_block: Option<String>,
    /// Emit raw response bodies at debug level.
    pub debug_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            user: None,
            password: None,
            sub_user: None,
            language: None,
            crypto_block: None,
            debug_mode: false,
        }
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

impl Config {
    /// Creates a header-auth configuration against the default base URL.
    #[must_use]
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
            password: Some(password.into()),
            ..Self::default()
        }
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the user id.
    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Sets the password.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the sub-user id.
    #[must_use]
    pub fn with_sub_user(mut self, sub_user: impl Into<String>) -> Self {
        self.sub_user = Some(sub_user.into());
        self
    }

    /// Sets the preferred language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the crypto block, switching to query-parameter auth.
    #[must_use]
    pub fn with_crypto_block(mut self, crypto_block: impl Into<String>) -> Self {
        self.crypto_block = Some(crypto_block.into());
        self
    }

    /// Enables or disables debug logging of response bodies.
    #[must_use]
    pub const fn with_debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }

    /// The user id, if set and non-empty.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        non_empty(self.user.as_ref())
    }

    /// The password, if set and non-empty.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        non_empty(self.password.as_ref())
    }

    /// The sub-user id, if set and non-empty.
    #[must_use]
    pub fn sub_user(&self) -> Option<&str> {
        non_empty(self.sub_user.as_ref())
    }

    /// The language, if set and non-empty.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        non_empty(self.language.as_ref())
    }

    /// The crypto block, if set and non-empty.
    #[must_use]
    pub fn crypto_block(&self) -> Option<&str> {
        non_empty(self.crypto_block.as_ref())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("user", &self.user)
            .field("has_password", &self.password().is_some())
            .field("sub_user", &self.sub_user)
            .field("language", &self.language)
            .field("has_crypto_block", &self.crypto_block().is_some())
            .field("debug_mode", &self.debug_mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://api.ticketswitch.com");
        assert!(config.user().is_none());
        assert!(!config.debug_mode);
    }

    #[test]
    fn test_empty_values_are_absent() {
        let config = Config::new("", "").with_sub_user("");
        assert!(config.user().is_none());
        assert!(config.password().is_none());
        assert!(config.sub_user().is_none());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: Config = serde_json::from_str(r#"{"user": "bill", "crypto_block": "abc"}"#)
            .unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.user(), Some("bill"));
        assert_eq!(config.crypto_block(), Some("abc"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::new("bill", "s3cret").with_crypto_block("deadbeef");
        let debug = format!("{config:?}");
        assert!(debug.contains("bill"));
        assert!(!debug.contains("s3cret"));
        assert!(!debug.contains("deadbeef"));
        assert!(debug.contains("has_password: true"));
    }
}
