//! reqwest transport for the TicketSwitch F13 API client.
//!
//! Provides [`ReqwestTransport`], an implementation of
//! [`ticketswitch::Transport`] backed by a shared [`reqwest::Client`], and
//! [`connect`] for building a ready-to-use [`HttpClient`].
//!
//! ```no_run
//! use ticketswitch::{Config, RequestContext};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ticketswitch_http::connect(Config::new("demo", "demopass"))?;
//! let user = client.test(&RequestContext::new()).await?;
//! println!("authenticated as {}", user.id);
//! # Ok(())
//! # }
//! ```
//!
//! # Feature Flags
//!
//! - `telemetry` - wraps every round trip in a `ticketswitch.http` span and
//!   enables the core crate's instrumentation

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

use std::time::Duration;

use ticketswitch::transport::BoxFuture;
use ticketswitch::{Client, Config, HttpRequest, HttpResponse, Transport, TransportError};
#[cfg(feature = "telemetry")]
use tracing::{Instrument, Span};

pub use ticketswitch;

/// Timeout applied to requests that carry none of their own.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum number of redirects followed per request.
pub const MAX_REDIRECTS: usize = 10;

/// A [`Client`] speaking HTTP through reqwest.
pub type HttpClient = Client<ReqwestTransport>;

/// Builds a client for `config` on a fresh [`ReqwestTransport`].
///
/// # Errors
///
/// Returns a [`reqwest::Error`] if the TLS backend cannot be initialized.
pub fn connect(config: Config) -> Result<HttpClient, reqwest::Error> {
    Ok(Client::new(config, ReqwestTransport::new()?))
}

/// [`Transport`] backed by a [`reqwest::Client`].
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with [`DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns a [`reqwest::Error`] if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a transport with a client-wide timeout.
    ///
    /// A timeout set on an individual request takes precedence.
    ///
    /// # Errors
    ///
    /// Returns a [`reqwest::Error`] if the TLS backend cannot be initialized.
    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an existing reqwest client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Returns the underlying reqwest client.
    #[must_use]
    pub const fn client(&self) -> &reqwest::Client {
        &self.client
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut req = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            req = req.body(body);
        }
        if let Some(timeout) = request.timeout {
            req = req.timeout(timeout);
        }

        let response = req.send().await.map_err(TransportError::new)?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(TransportError::new)?;

        #[cfg(feature = "telemetry")]
        Span::current().record("status", status);

        Ok(HttpResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse, TransportError>> {
        #[cfg(feature = "telemetry")]
        {
            let span = tracing::info_span!(
                "ticketswitch.http",
                method = %request.method,
                path = %request.url.path(),
                timeout = ?request.timeout,
                status = tracing::field::Empty,
            );
            Box::pin(with_span(self.send(request), span))
        }
        #[cfg(not(feature = "telemetry"))]
        {
            Box::pin(self.send(request))
        }
    }
}

/// Instruments a future with a given tracing span.
#[cfg(feature = "telemetry")]
fn with_span<F: Future>(fut: F, span: Span) -> impl Future<Output = F::Output> {
    fut.instrument(span)
}
