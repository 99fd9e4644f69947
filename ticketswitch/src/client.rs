//! The API client.
//!
//! [`Client`] exposes one async method per endpoint. Every call issues
//! exactly one request through the configured [`Transport`]; there are no
//! retries and no caching. Each method takes a [`RequestContext`] carrying
//! the tracking id and timeout for that call.
//!
//! ## Error Handling
//!
//! A non-`200` response is classified before any decoding:
//!
//! - an error envelope becomes [`Error::Api`]
//! - a body that is not JSON becomes [`Error::Decode`]
//! - an envelope with no error signal is decoded like a success
//!
//! ## Telemetry
//!
//! With the `telemetry` feature every call runs in its own span. When
//! [`Config::debug_mode`] is set, raw response bodies are logged at `debug`.

use std::collections::HashMap;
use std::fmt::Display;

use http::Method;
#[cfg(feature = "telemetry")]
use tracing::{Span, instrument};

use crate::config::Config;
use crate::context::RequestContext;
use crate::error::{Error, classify};
use crate::model::{
    AvailabilityResult, CancellationResult, DiscountsResult, Event, ListEventsResults,
    ListPerformanceTimesResults, ListPerformancesResults, MakePurchaseResult, MonthsResult,
    ReservationResult, SendMethodsResults, SourcesResult, StatusResult, User,
};
use crate::params::{
    CancellationParams, EmailCheckParams, GetAvailabilityParams, GetMonthsParams,
    ListEventsParams, ListPerformancesParams, MakePurchaseParams, MakeReservationParams,
    ParameterProvider, TransactionParams, UniversalParams, join_list,
};
use crate::request::{EncoderConfig, Request, RequestBuilder, endpoint};
use crate::resolve;
use crate::transport::{HttpResponse, Transport};

/// Typed client for the TicketSwitch F13 API.
///
/// Cheap to share: wrap it in an `Arc` to use it from several tasks.
#[derive(Debug, Clone)]
pub struct Client<T> {
    builder: RequestBuilder,
    transport: T,
}

impl<T: Transport> Client<T> {
    /// Creates a client with the default body encoding.
    #[must_use]
    pub fn new(config: Config, transport: T) -> Self {
        Self::with_encoder(config, EncoderConfig::default(), transport)
    }

    /// Creates a client with an explicit body encoding policy.
    #[must_use]
    pub const fn with_encoder(config: Config, encoder: EncoderConfig, transport: T) -> Self {
        Self {
            builder: RequestBuilder::new(config, encoder),
            transport,
        }
    }

    /// The client configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        self.builder.config()
    }

    /// The request builder.
    #[must_use]
    pub const fn request_builder(&self) -> &RequestBuilder {
        &self.builder
    }

    /// The underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds, sends and status-checks a request.
    ///
    /// The response is returned as-is when the status is `200`, or when a
    /// non-`200` body carries no error signal.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`], [`Error::Url`] or [`Error::InvalidHeader`] if the
    ///   request cannot be built
    /// - [`Error::Transport`] if the request cannot be sent
    /// - [`Error::Api`] for a classified API error
    /// - [`Error::Decode`] if a non-`200` body is not JSON
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "ticketswitch.execute",
            skip_all,
            fields(
                method = %request.method,
                endpoint = %request.endpoint,
                status = tracing::field::Empty,
                otel.status_code = tracing::field::Empty,
                error.message = tracing::field::Empty,
            )
        )
    )]
    pub async fn execute(
        &self,
        ctx: &RequestContext,
        request: Request,
    ) -> Result<HttpResponse, Error> {
        let result = self.execute_inner(ctx, request).await;
        record_result_on_span(&result);
        result
    }

    async fn execute_inner(
        &self,
        ctx: &RequestContext,
        request: Request,
    ) -> Result<HttpResponse, Error> {
        let prepared = self.builder.prepare(request, ctx)?;
        let response = self.transport.execute(prepared).await?;

        #[cfg(feature = "telemetry")]
        {
            Span::current().record("status", response.status);
            if self.config().debug_mode {
                tracing::debug!(
                    status = response.status,
                    body = %String::from_utf8_lossy(&response.body),
                    "ticketswitch.response"
                );
            }
        }

        if response.status != 200 {
            match classify(response.status, &response.body) {
                Ok(Some(err)) => return Err(Error::Api(err)),
                Ok(None) => {}
                Err(err) => return Err(Error::Decode(err)),
            }
        }

        Ok(response)
    }

    async fn call<R>(
        &self,
        ctx: &RequestContext,
        request: Request,
        resolve: fn(&[u8]) -> Result<R, Error>,
    ) -> Result<R, Error> {
        let response = self.execute(ctx, request).await?;
        resolve(&response.body)
    }

    /// Checks connectivity and credentials, returning the account.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute); also [`Error::Decode`] on a malformed
    /// response.
    #[cfg_attr(feature = "telemetry", instrument(name = "ticketswitch.test", skip_all, err))]
    pub async fn test(&self, ctx: &RequestContext) -> Result<User, Error> {
        self.call(ctx, Request::get(endpoint::TEST), resolve::resolve_test)
            .await
    }

    /// Searches for events.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute); also [`Error::MissingField`] when the
    /// response has no `results`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "ticketswitch.list_events", skip_all, err)
    )]
    pub async fn list_events(
        &self,
        ctx: &RequestContext,
        params: &ListEventsParams,
    ) -> Result<ListEventsResults, Error> {
        let request = Request::get(endpoint::EVENTS).with_params(params);
        self.call(ctx, request, resolve::resolve_list_events).await
    }

    /// Fetches several events by id, keyed by id.
    ///
    /// Ids unknown to the API are simply absent from the map.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "ticketswitch.get_events", skip_all, err)
    )]
    pub async fn get_events<S: AsRef<str> + Sync>(
        &self,
        ctx: &RequestContext,
        event_ids: &[S],
        params: &UniversalParams,
    ) -> Result<HashMap<String, Event>, Error> {
        let ids: Vec<&str> = event_ids.iter().map(AsRef::as_ref).collect();
        let request = Request::get(endpoint::EVENTS_BY_ID)
            .with_params(params)
            .with_value("event_id_list", join_list(&ids));
        self.call(ctx, request, resolve::resolve_events_by_id).await
    }

    /// Fetches a single event.
    ///
    /// # Errors
    ///
    /// [`Error::EventNotFound`] if the API does not return the event;
    /// otherwise see [`execute`](Self::execute).
    pub async fn get_event(
        &self,
        ctx: &RequestContext,
        event_id: &str,
        params: &UniversalParams,
    ) -> Result<Event, Error> {
        let mut events = self.get_events(ctx, &[event_id], params).await?;
        events
            .remove(event_id)
            .ok_or_else(|| Error::EventNotFound(event_id.to_owned()))
    }

    /// Lists an event's performances.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "ticketswitch.list_performances", skip_all, err)
    )]
    pub async fn list_performances(
        &self,
        ctx: &RequestContext,
        params: &ListPerformancesParams,
    ) -> Result<ListPerformancesResults, Error> {
        let request = Request::get(endpoint::PERFORMANCES).with_params(params);
        self.call(ctx, request, resolve::resolve_list_performances)
            .await
    }

    /// Lists the distinct start times of an event's performances.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "ticketswitch.list_performance_times", skip_all, err)
    )]
    pub async fn list_performance_times(
        &self,
        ctx: &RequestContext,
        params: &ListPerformancesParams,
    ) -> Result<ListPerformanceTimesResults, Error> {
        let request = Request::get(endpoint::TIMES).with_params(params);
        self.call(ctx, request, resolve::resolve_list_performance_times)
            .await
    }

    /// Fetches live availability for a performance.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "ticketswitch.get_availability", skip_all, err)
    )]
    pub async fn get_availability(
        &self,
        ctx: &RequestContext,
        performance_id: &str,
        params: &GetAvailabilityParams,
    ) -> Result<AvailabilityResult, Error> {
        let request = Request::get(endpoint::AVAILABILITY)
            .with_params(params)
            .with_value("perf_id", performance_id);
        self.call(ctx, request, resolve::resolve_availability).await
    }

    /// Fetches the discounts for a ticket type and price band.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "ticketswitch.get_discounts", skip_all, err)
    )]
    pub async fn get_discounts(
        &self,
        ctx: &RequestContext,
        performance_id: &str,
        ticket_type_code: &str,
        price_band_code: &str,
        params: &UniversalParams,
    ) -> Result<DiscountsResult, Error> {
        let request = Request::get(endpoint::DISCOUNTS)
            .with_params(params)
            .with_value("perf_id", performance_id)
            .with_value("ticket_type_code", ticket_type_code)
            .with_value("price_band_code", price_band_code);
        self.call(ctx, request, resolve::resolve_discounts).await
    }

    /// Lists the backend systems available to the account.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "ticketswitch.get_sources", skip_all, err)
    )]
    pub async fn get_sources(
        &self,
        ctx: &RequestContext,
        params: &UniversalParams,
    ) -> Result<SourcesResult, Error> {
        let request = Request::get(endpoint::SOURCES).with_params(params);
        self.call(ctx, request, resolve::resolve_sources).await
    }

    /// Lists the delivery methods for a performance.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "ticketswitch.get_send_methods", skip_all, err)
    )]
    pub async fn get_send_methods(
        &self,
        ctx: &RequestContext,
        performance_id: &str,
        params: &UniversalParams,
    ) -> Result<SendMethodsResults, Error> {
        let request = Request::get(endpoint::SEND_METHODS)
            .with_params(params)
            .with_value("perf_id", performance_id);
        self.call(ctx, request, resolve::resolve_send_methods).await
    }

    /// Lists the months in which an event has performances.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "ticketswitch.get_months", skip_all, err)
    )]
    pub async fn get_months(
        &self,
        ctx: &RequestContext,
        params: &GetMonthsParams,
    ) -> Result<MonthsResult, Error> {
        let request = Request::get(endpoint::MONTHS).with_params(params);
        self.call(ctx, request, resolve::resolve_months).await
    }

    /// Places a hold on inventory.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "ticketswitch.make_reservation", skip_all, err)
    )]
    pub async fn make_reservation(
        &self,
        ctx: &RequestContext,
        params: &MakeReservationParams,
    ) -> Result<ReservationResult, Error> {
        let request = Request::post(endpoint::RESERVE).with_body(json_body(params)?);
        self.call(ctx, request, resolve::resolve_reservation).await
    }

    /// Makes a best effort attempt to release a reservation.
    ///
    /// Returns `false` when the API does not confirm the release.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "ticketswitch.release_reservation", skip_all, err)
    )]
    pub async fn release_reservation(
        &self,
        ctx: &RequestContext,
        params: &TransactionParams,
    ) -> Result<bool, Error> {
        let request = Request::post(endpoint::RELEASE).with_body(json_body(params)?);
        self.call(ctx, request, resolve::resolve_release).await
    }

    /// Purchases a reserved transaction.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute). An expired callback surfaces as an
    /// [`Error::Api`] with `gone` set.
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "ticketswitch.make_purchase", skip_all, err)
    )]
    pub async fn make_purchase(
        &self,
        ctx: &RequestContext,
        params: &MakePurchaseParams,
    ) -> Result<MakePurchaseResult, Error> {
        let request = Request::post(endpoint::PURCHASE).with_body(json_body(params)?);
        self.call(ctx, request, resolve::resolve_purchase).await
    }

    /// Fetches the current state of a transaction.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "ticketswitch.get_status", skip_all, err)
    )]
    pub async fn get_status(
        &self,
        ctx: &RequestContext,
        params: &TransactionParams,
    ) -> Result<StatusResult, Error> {
        let request = Request::get(endpoint::STATUS).with_params(params);
        self.call(ctx, request, resolve::resolve_status).await
    }

    /// Cancels a purchased transaction, or some of its items.
    ///
    /// Parameters travel in the query string of a `POST`.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "ticketswitch.cancel", skip_all, err)
    )]
    pub async fn cancel(
        &self,
        ctx: &RequestContext,
        params: &CancellationParams,
    ) -> Result<CancellationResult, Error> {
        let request = Request::new(Method::POST, endpoint::CANCEL).with_params(params);
        self.call(ctx, request, resolve::resolve_cancellation).await
    }

    /// Validates an email address.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] without sending anything if the address is
    /// empty; otherwise see [`execute`](Self::execute).
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "ticketswitch.email_check", skip_all, err)
    )]
    pub async fn email_check(
        &self,
        ctx: &RequestContext,
        params: &EmailCheckParams,
    ) -> Result<(), Error> {
        if params.email_address.is_empty() {
            return Err(Error::Validation(
                "No email was provided for verification".into(),
            ));
        }
        let request = Request::get(endpoint::EMAIL_CHECK).with_params(params);
        self.execute(ctx, request).await.map(drop)
    }
}

fn json_body(params: &impl ParameterProvider) -> Result<serde_json::Value, Error> {
    serde_json::to_value(params.flatten()).map_err(Error::Encode)
}

/// Records the outcome of a request on the current span.
#[cfg(feature = "telemetry")]
fn record_result_on_span<R, E: Display>(result: &Result<R, E>) {
    let span = Span::current();
    match result {
        Ok(_) => {
            span.record("otel.status_code", "OK");
        }
        Err(err) => {
            span.record("otel.status_code", "ERROR");
            span.record("error.message", tracing::field::display(err));
            tracing::event!(tracing::Level::WARN, error = %err, "ticketswitch request failed");
        }
    }
}

/// Noop if telemetry feature is off.
#[cfg(not(feature = "telemetry"))]
const fn record_result_on_span<R, E: Display>(_result: &Result<R, E>) {}
