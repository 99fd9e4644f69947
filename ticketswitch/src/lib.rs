#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Core types for the TicketSwitch F13 inventory API.
//!
//! This crate turns typed call parameters into wire requests and turns the
//! API's JSON responses back into typed results. It never touches the network
//! itself: HTTP execution is delegated to a [`Transport`] implementation
//! (see the `ticketswitch-http` crate for the reqwest-backed one).
//!
//! # Overview
//!
//! A call flows through the crate like this:
//!
//! 1. A parameter object ([`params`]) is flattened into a [`ParameterSet`].
//! 2. The [`RequestBuilder`] composes the URL (`{base}/f13/{endpoint}`),
//!    authentication, headers and an optional JSON body.
//! 3. The [`Transport`] executes the request.
//! 4. Non-200 responses are classified into an [`ApiError`]; successful ones
//!    are decoded by the endpoint's resolver ([`resolve`]).
//!
//! # Modules
//!
//! - [`client`] - [`Client`] with one method per API endpoint
//! - [`config`] - Credentials and base URL
//! - [`context`] - Request-scoped metadata (tracking id, timeout)
//! - [`error`] - Error taxonomy and the API error classifier
//! - [`geo`] - Geographic search areas
//! - [`model`] - Domain entities decoded from responses
//! - [`params`] - Parameter providers for every call
//! - [`request`] - Request descriptors, URL and header assembly
//! - [`resolve`] - Per-endpoint response decoding
//! - [`transport`] - The HTTP execution seam
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation for debugging and monitoring

pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod geo;
pub mod model;
pub mod params;
pub mod request;
pub mod resolve;
pub mod transport;

pub use client::Client;
pub use config::Config;
pub use context::RequestContext;
pub use error::{ApiError, Error};
pub use params::{ParameterProvider, ParameterSet};
pub use request::{EncoderConfig, Request, RequestBuilder};
pub use transport::{HttpRequest, HttpResponse, Transport, TransportError};
