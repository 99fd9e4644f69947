//! Error types for the TicketSwitch client.
//!
//! Failures fall into a few families that callers are expected to treat
//! differently:
//!
//! - configuration problems detected while building a request ([`Error::Config`])
//! - transport failures, passed through untouched ([`Error::Transport`])
//! - errors reported by the API itself ([`Error::Api`], see [`ApiError`])
//! - responses that do not match the expected envelope ([`Error::Decode`],
//!   [`Error::MissingField`])
//! - a specific id missing from a batch lookup ([`Error::EventNotFound`])

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::transport::TransportError;

/// Error code the API uses to signal failed authentication.
pub const AUTHENTICATION_ERROR_CODE: i64 = 3;

/// HTTP status the API uses once a callback has expired.
pub const STATUS_GONE: u16 = 410;

/// Base error type for TicketSwitch operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The client configuration cannot produce a valid request.
    #[error("ticketswitch: {0}")]
    Config(String),

    /// The configured base URL could not be parsed.
    #[error("ticketswitch: invalid base url: {0}")]
    Url(#[from] url::ParseError),

    /// A configured value is not a legal HTTP header value.
    #[error("ticketswitch: invalid header value: {0}")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),

    /// The API returned an error envelope.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A response body did not decode into the expected shape.
    #[error("ticketswitch: failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// A request body could not be encoded.
    #[error("ticketswitch: failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A required top-level key was absent from the response.
    #[error("ticketswitch: no {0} in response")]
    MissingField(&'static str),

    /// A specifically requested event was not part of the response.
    #[error("ticketswitch: event not found: {0}")]
    EventNotFound(String),

    /// Call parameters were rejected before any request was sent.
    #[error("ticketswitch: {0}")]
    Validation(String),

    /// The transport failed to execute the request.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    /// Returns the classified API error, if this is one.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Returns `true` when the API rejected the credentials.
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        self.api_error().is_some_and(|err| err.authentication)
    }

    /// Returns `true` when the API answered `410 Gone`.
    #[must_use]
    pub fn is_gone(&self) -> bool {
        self.api_error().is_some_and(|err| err.gone)
    }

    /// Returns `true` for the typed not-found condition of batch lookups.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::EventNotFound(_))
    }
}

/// An error reported by the API.
///
/// Decoded from the `{"error_code": .., "error_desc": ..}` envelope. The two
/// flags are derived: `authentication` from the error code and `gone` from
/// the HTTP status, so neither is part of the wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Numeric error code.
    #[serde(rename = "error_code", default)]
    pub code: i64,
    /// Human-readable description.
    #[serde(rename = "error_desc", default)]
    pub description: String,
    /// The credentials were rejected; the caller should re-authenticate.
    #[serde(skip)]
    pub authentication: bool,
    /// The resource (usually a purchase callback) has expired.
    #[serde(skip)]
    pub gone: bool,
}

impl ApiError {
    /// Creates a new API error with no derived flags set.
    #[must_use]
    pub fn new(code: i64, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            authentication: false,
            gone: false,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ticketswitch: API error {}: {}",
            self.code, self.description
        )
    }
}

impl std::error::Error for ApiError {}

/// Classifies a non-successful response.
///
/// Returns `Ok(None)` only when the body carries no error signal at all and
/// no flag was forced by the status or code. A body that is not valid JSON is
/// itself an error and is returned as such.
///
/// A `410` with a non-JSON body is therefore a decode error, not a gone one.
///
/// # Errors
///
/// Returns the [`serde_json::Error`] when the body cannot be decoded.
pub fn classify(status: u16, body: &[u8]) -> Result<Option<ApiError>, serde_json::Error> {
    let mut err: ApiError = serde_json::from_slice(body)?;

    if status == STATUS_GONE {
        err.gone = true;
    }
    if err.code == AUTHENTICATION_ERROR_CODE {
        err.authentication = true;
    }

    if err.code != 0 || !err.description.is_empty() || err.gone || err.authentication {
        Ok(Some(err))
    } else {
        Ok(None)
    }
}
