//! Request-scoped metadata.
//!
//! Every client operation takes a [`RequestContext`] explicitly. Concurrent
//! calls on one client can therefore carry distinct tracking ids without any
//! shared state. Cancellation is handled by dropping the returned future.

use std::time::Duration;

/// Header carrying the caller's tracking id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-call metadata passed alongside each operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Session tracking id, sent as `x-request-id` when present.
    pub tracking_id: Option<String>,
    /// Deadline for the whole request, enforced by the transport.
    pub timeout: Option<Duration>,
}

impl RequestContext {
    /// Creates an empty context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tracking_id: None,
            timeout: None,
        }
    }

    /// Sets the tracking id.
    #[must_use]
    pub fn with_tracking_id(mut self, tracking_id: impl Into<String>) -> Self {
        self.tracking_id = Some(tracking_id.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The tracking id, if set and non-empty.
    #[must_use]
    pub fn tracking_id(&self) -> Option<&str> {
        self.tracking_id.as_deref().filter(|id| !id.is_empty())
    }
}
