//! Request descriptors and wire assembly.
//!
//! A [`Request`] names an endpoint and carries its parameters. The
//! [`RequestBuilder`] turns it into an [`HttpRequest`] in three independent
//! steps, each usable on its own:
//!
//! - [`RequestBuilder::build_url`] composes `{base}/f13/{endpoint}?{query}`,
//!   including query-parameter authentication
//! - [`RequestBuilder::set_headers`] adds language, Basic auth and tracking
//!   headers
//! - [`RequestBuilder::encode_body`] serializes the JSON body

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use http::header::{ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde_json::ser::{PrettyFormatter, Serializer};
use url::Url;

use crate::config::Config;
use crate::context::{REQUEST_ID_HEADER, RequestContext};
use crate::error::Error;
use crate::params::{ParameterProvider, ParameterSet};
use crate::transport::HttpRequest;

/// Fixed protocol version segment injected into every path.
pub const PROTOCOL_SEGMENT: &str = "f13";

/// Endpoint names.
pub mod endpoint {
    /// Connectivity and credentials check.
    pub const TEST: &str = "test.v1";
    /// Event search.
    pub const EVENTS: &str = "events.v1";
    /// Batch event lookup.
    pub const EVENTS_BY_ID: &str = "events_by_id.v1";
    /// Performances of an event.
    pub const PERFORMANCES: &str = "performances.v1";
    /// Unique performance times of an event.
    pub const TIMES: &str = "times.v1";
    /// Seat availability of a performance.
    pub const AVAILABILITY: &str = "availability.v1";
    /// Discounts for a price band.
    pub const DISCOUNTS: &str = "discounts.v1";
    /// Backend systems.
    pub const SOURCES: &str = "sources.v1";
    /// Ticket delivery methods.
    pub const SEND_METHODS: &str = "send_methods.v1";
    /// Months with performances.
    pub const MONTHS: &str = "months.v1";
    /// Place a hold.
    pub const RESERVE: &str = "reserve.v1";
    /// Release a hold.
    pub const RELEASE: &str = "release.v1";
    /// Purchase a reservation.
    pub const PURCHASE: &str = "purchase.v1";
    /// Transaction status.
    pub const STATUS: &str = "status.v1";
    /// Cancel a purchase.
    pub const CANCEL: &str = "cancel.v1";
    /// Email address validation.
    pub const EMAIL_CHECK: &str = "email_check.v1";
}

/// JSON body encoding policy.
///
/// Fixed when the builder is constructed and shared by every request it
/// builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Indent with two spaces.
    pub indent: bool,
    /// Escape `<`, `>`, `&`, U+2028 and U+2029 as `\uXXXX`.
    pub escape_html: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            indent: true,
            escape_html: true,
        }
    }
}

impl EncoderConfig {
    /// Serializes `value`, always ending with a newline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if serialization fails.
    pub fn encode<T: serde::Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, Error> {
        let mut out = Vec::new();
        if self.indent {
            let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"  "));
            value.serialize(&mut ser).map_err(Error::Encode)?;
        } else {
            serde_json::to_writer(&mut out, value).map_err(Error::Encode)?;
        }
        if self.escape_html {
            out = escape_html(&out);
        }
        out.push(b'\n');
        Ok(out)
    }
}

/// Escapes HTML-sensitive characters in serialized JSON.
///
/// These can only occur inside string literals, so a flat byte rewrite
/// keeps the document valid.
fn escape_html(json: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(json.len());
    let mut i = 0;
    while i < json.len() {
        match json[i] {
            b'<' => out.extend_from_slice(b"\\u003c"),
            b'>' => out.extend_from_slice(b"\\u003e"),
            b'&' => out.extend_from_slice(b"\\u0026"),
            // U+2028 and U+2029 encode as E2 80 A8 / E2 80 A9.
            0xE2 if json.get(i + 1) == Some(&0x80)
                && matches!(json.get(i + 2), Some(0xA8 | 0xA9)) =>
            {
                out.extend_from_slice(if json[i + 2] == 0xA8 {
                    b"\\u2028"
                } else {
                    b"\\u2029"
                });
                i += 2;
            }
            byte => out.push(byte),
        }
        i += 1;
    }
    out
}

/// A call to one API endpoint.
#[derive(Debug, Clone)]
pub struct Request {
    /// `GET` or `POST`.
    pub method: Method,
    /// Endpoint name, e.g. `events.v1`.
    pub endpoint: String,
    /// Extra headers.
    pub headers: HeaderMap,
    /// Query parameters.
    pub values: ParameterSet,
    /// JSON body; only valid on `POST`.
    pub body: Option<serde_json::Value>,
}

impl Request {
    /// Creates a request with no parameters.
    #[must_use]
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            headers: HeaderMap::new(),
            values: ParameterSet::new(),
            body: None,
        }
    }

    /// Creates a `GET` request.
    #[must_use]
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    /// Creates a `POST` request.
    #[must_use]
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::POST, endpoint)
    }

    /// Overlays the provider's parameters onto the query.
    #[must_use]
    pub fn with_params(mut self, params: &impl ParameterProvider) -> Self {
        self.values.merge(params.flatten());
        self
    }

    /// Sets a single query parameter.
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.set(key, value);
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Assembles wire requests from [`Request`]s.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    config: Config,
    encoder: EncoderConfig,
}

impl RequestBuilder {
    /// Creates a builder.
    #[must_use]
    pub const fn new(config: Config, encoder: EncoderConfig) -> Self {
        Self { config, encoder }
    }

    /// The client configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The body encoding policy.
    #[must_use]
    pub const fn encoder(&self) -> EncoderConfig {
        self.encoder
    }

    /// Composes the request URL.
    ///
    /// Parameters already present in the base URL's query are kept. The
    /// query is encoded in key order.
    ///
    /// # Errors
    ///
    /// - [`Error::Url`] if the base URL does not parse
    /// - [`Error::Config`] if a crypto block is configured without a user
    pub fn build_url(&self, request: &Request) -> Result<Url, Error> {
        let mut url = Url::parse(&self.config.base_url)?;

        let mut query: ParameterSet = url.query_pairs().into_owned().collect();
        for (key, value) in request.values.iter() {
            query.append(key, value);
        }

        if let Some(crypto_block) = self.config.crypto_block() {
            let user = self.config.user().ok_or_else(|| {
                Error::Config("config specifies cryptoblock but doesn't supply a user".into())
            })?;
            query.set("user_id", user);
            query.set("crypto_block", crypto_block);
        }
        if let Some(sub_user) = self.config.sub_user() {
            query.set("sub_id", sub_user);
        }

        if query.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(query.iter());
        }

        let path = format!(
            "{}/{PROTOCOL_SEGMENT}/{}",
            url.path().trim_end_matches('/'),
            request.endpoint
        );
        url.set_path(&path);

        Ok(url)
    }

    /// Adds configured and request-scoped headers.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] in header-auth mode when user or password is missing
    /// - [`Error::InvalidHeader`] when a value cannot be sent as a header
    pub fn set_headers(&self, request: &mut Request, ctx: &RequestContext) -> Result<(), Error> {
        if let Some(language) = self.config.language() {
            request
                .headers
                .insert(ACCEPT_LANGUAGE, HeaderValue::from_str(language)?);
        }

        if self.config.crypto_block().is_none() {
            let user = self
                .config
                .user()
                .ok_or_else(|| Error::Config("config does not specify a user".into()))?;
            let password = self
                .config
                .password()
                .ok_or_else(|| Error::Config("config does not specify a password".into()))?;
            request
                .headers
                .insert(AUTHORIZATION, basic_auth(user, password)?);
        }

        if let Some(tracking_id) = ctx.tracking_id() {
            request.headers.insert(
                HeaderName::from_static(REQUEST_ID_HEADER),
                HeaderValue::from_str(tracking_id)?,
            );
        }

        Ok(())
    }

    /// Encodes the body, if any, and marks it as JSON.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] if a `GET` request carries a body
    /// - [`Error::Encode`] if serialization fails
    pub fn encode_body(&self, request: &mut Request) -> Result<Option<Vec<u8>>, Error> {
        let Some(body) = &request.body else {
            return Ok(None);
        };
        if request.method == Method::GET {
            return Err(Error::Validation(format!(
                "GET request to {} cannot carry a body",
                request.endpoint
            )));
        }

        let bytes = self.encoder.encode(body)?;
        request
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(Some(bytes))
    }

    /// Runs all three steps and produces a wire request.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`build_url`](Self::build_url),
    /// [`set_headers`](Self::set_headers) or
    /// [`encode_body`](Self::encode_body).
    pub fn prepare(&self, mut request: Request, ctx: &RequestContext) -> Result<HttpRequest, Error> {
        let url = self.build_url(&request)?;
        self.set_headers(&mut request, ctx)?;
        let body = self.encode_body(&mut request)?;

        Ok(HttpRequest {
            method: request.method,
            url,
            headers: request.headers,
            body,
            timeout: ctx.timeout,
        })
    }
}

fn basic_auth(user: &str, password: &str) -> Result<HeaderValue, Error> {
    let encoded = BASE64_STANDARD.encode(format!("{user}:{password}"));
    let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))?;
    value.set_sensitive(true);
    Ok(value)
}
