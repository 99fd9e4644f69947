//! The HTTP execution seam.
//!
//! The core crate never performs I/O. A [`Transport`] receives a fully built
//! [`HttpRequest`] and returns the raw [`HttpResponse`]; status handling and
//! decoding stay in [`Client`](crate::Client). Implement this trait to plug
//! in any HTTP stack, or use the reqwest-backed one from `ticketswitch-http`.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use http::{HeaderMap, Method};
use url::Url;

/// Boxed future used by object-safe async traits.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A request ready to be sent over the wire.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL including the query string.
    pub url: Url,
    /// Request headers.
    pub headers: HeaderMap,
    /// Encoded JSON body, if any.
    pub body: Option<Vec<u8>>,
    /// Deadline for the whole exchange.
    pub timeout: Option<Duration>,
}

/// A raw response as received from the wire.
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response with no headers.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}

/// A network-level failure: DNS, connect, timeout, or similar.
///
/// Wraps the transport's own error untouched so callers can downcast it.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct TransportError(Box<dyn std::error::Error + Send + Sync>);

impl TransportError {
    /// Wraps a transport-specific error.
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(source.into())
    }

    /// The wrapped error.
    #[must_use]
    pub fn get_ref(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        &*self.0
    }

    /// Attempts to downcast the wrapped error.
    #[must_use]
    pub fn downcast_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }
}

/// Executes HTTP requests.
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the response, whatever its status.
    fn execute(&self, request: HttpRequest)
    -> BoxFuture<'_, Result<HttpResponse, TransportError>>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> BoxFuture<'_, Result<HttpResponse, TransportError>> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> BoxFuture<'_, Result<HttpResponse, TransportError>> {
        (**self).execute(request)
    }
}
