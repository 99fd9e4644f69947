//! Per-endpoint response decoding.
//!
//! Each resolver takes the raw body of a `200` response and produces the
//! endpoint's typed result. Most are a plain decode; the ones here with
//! extra logic unwrap an envelope or apply a default.

use std::collections::HashMap;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;

use crate::error::Error;
use crate::model::{
    AvailabilityResult, CancellationResult, CurrencyDetails, DiscountsResult, Event,
    ListEventsResults, ListPerformanceTimesResults, ListPerformancesResults, MakePurchaseResult,
    MonthsResult, ReservationResult, SendMethodsResults, SourcesResult, StatusResult, User,
};

/// Decodes `body` as `T`.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the body does not match `T`.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(Error::Decode)
}

/// Decodes the `test.v1` response.
///
/// # Errors
///
/// Returns [`Error::Decode`] on malformed JSON.
pub fn resolve_test(body: &[u8]) -> Result<User, Error> {
    decode(body)
}

/// Decodes the `events.v1` response.
///
/// The events live under `results`; currency details sit beside them at
/// the top level and are moved into the result.
///
/// # Errors
///
/// - [`Error::Decode`] on malformed JSON
/// - [`Error::MissingField`] if `results` is absent
pub fn resolve_list_events(body: &[u8]) -> Result<ListEventsResults, Error> {
    let doc: HashMap<String, Box<RawValue>> = decode(body)?;

    let raw_results = doc.get("results").ok_or(Error::MissingField("results"))?;
    let mut results: ListEventsResults =
        serde_json::from_str(raw_results.get()).map_err(Error::Decode)?;

    if let Some(raw_currencies) = doc.get("currency_details") {
        results.currencies = serde_json::from_str::<CurrencyDetails>(raw_currencies.get())
            .map_err(Error::Decode)?;
    }

    Ok(results)
}

#[derive(Deserialize)]
struct WrappedEvent {
    #[serde(default)]
    event: Option<Event>,
}

#[derive(Deserialize)]
struct EventsById {
    #[serde(default)]
    events_by_id: HashMap<String, WrappedEvent>,
}

/// Decodes the `events_by_id.v1` response into events keyed by id.
///
/// Entries without an `event` are dropped.
///
/// # Errors
///
/// Returns [`Error::Decode`] on malformed JSON.
pub fn resolve_events_by_id(body: &[u8]) -> Result<HashMap<String, Event>, Error> {
    let doc: EventsById = decode(body)?;
    Ok(doc
        .events_by_id
        .into_iter()
        .filter_map(|(id, wrapped)| wrapped.event.map(|event| (id, event)))
        .collect())
}

#[derive(Deserialize)]
struct PerformancesEnvelope {
    #[serde(default)]
    autoselect_this_performance: bool,
    #[serde(default)]
    results: ListPerformancesResults,
}

/// Decodes the `performances.v1` response.
///
/// # Errors
///
/// Returns [`Error::Decode`] on malformed JSON.
pub fn resolve_list_performances(body: &[u8]) -> Result<ListPerformancesResults, Error> {
    let envelope: PerformancesEnvelope = decode(body)?;
    let mut results = envelope.results;
    results.autoselect = envelope.autoselect_this_performance;
    Ok(results)
}

#[derive(Deserialize)]
struct TimesEnvelope {
    #[serde(default)]
    results: ListPerformanceTimesResults,
}

/// Decodes the `times.v1` response.
///
/// # Errors
///
/// Returns [`Error::Decode`] on malformed JSON.
pub fn resolve_list_performance_times(body: &[u8]) -> Result<ListPerformanceTimesResults, Error> {
    decode::<TimesEnvelope>(body).map(|envelope| envelope.results)
}

/// Decodes the `availability.v1` response.
///
/// # Errors
///
/// Returns [`Error::Decode`] on malformed JSON.
pub fn resolve_availability(body: &[u8]) -> Result<AvailabilityResult, Error> {
    decode(body)
}

/// Decodes the `discounts.v1` response.
///
/// # Errors
///
/// Returns [`Error::Decode`] on malformed JSON.
pub fn resolve_discounts(body: &[u8]) -> Result<DiscountsResult, Error> {
    decode(body)
}

/// Decodes the `sources.v1` response, a bare array.
///
/// # Errors
///
/// Returns [`Error::Decode`] on malformed JSON.
pub fn resolve_sources(body: &[u8]) -> Result<SourcesResult, Error> {
    decode(body)
}

/// Decodes the `send_methods.v1` response.
///
/// # Errors
///
/// Returns [`Error::Decode`] on malformed JSON.
pub fn resolve_send_methods(body: &[u8]) -> Result<SendMethodsResults, Error> {
    decode(body)
}

/// Decodes the `months.v1` response.
///
/// # Errors
///
/// Returns [`Error::Decode`] on malformed JSON.
pub fn resolve_months(body: &[u8]) -> Result<MonthsResult, Error> {
    decode(body)
}

/// Decodes the `reserve.v1` response.
///
/// # Errors
///
/// Returns [`Error::Decode`] on malformed JSON.
pub fn resolve_reservation(body: &[u8]) -> Result<ReservationResult, Error> {
    decode(body)
}

/// Decodes the `release.v1` response.
///
/// A missing `released_ok` key means the release did not happen.
///
/// # Errors
///
/// Returns [`Error::Decode`] on malformed JSON.
pub fn resolve_release(body: &[u8]) -> Result<bool, Error> {
    let doc: HashMap<String, bool> = decode(body)?;
    Ok(doc.get("released_ok").copied().unwrap_or(false))
}

/// Decodes the `purchase.v1` response.
///
/// # Errors
///
/// Returns [`Error::Decode`] on malformed JSON.
pub fn resolve_purchase(body: &[u8]) -> Result<MakePurchaseResult, Error> {
    decode(body)
}

/// Decodes the `status.v1` response.
///
/// # Errors
///
/// Returns [`Error::Decode`] on malformed JSON.
pub fn resolve_status(body: &[u8]) -> Result<StatusResult, Error> {
    decode(body)
}

/// Decodes the `cancel.v1` response.
///
/// # Errors
///
/// Returns [`Error::Decode`] on malformed JSON.
pub fn resolve_cancellation(body: &[u8]) -> Result<CancellationResult, Error> {
    decode(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_events() {
        let body = br#"{
            "results": {
                "event": [{"event_id": "6IF"}, {"event_id": "25DR"}],
                "paging_status": {"page_length": 50, "page_number": 0, "total_unpaged_results": 2}
            },
            "currency_details": {"gbp": {"currency_code": "gbp", "currency_places": 2}}
        }"#;
        let results = resolve_list_events(body).unwrap();
        assert_eq!(results.events.len(), 2);
        assert_eq!(results.events[1].id, "25DR");
        assert_eq!(results.paging_status.total_results, 2);
        assert_eq!(results.currencies["gbp"].places, 2);
    }

    #[test]
    fn test_list_events_without_currencies() {
        let results = resolve_list_events(br#"{"results": {"event": []}}"#).unwrap();
        assert!(results.events.is_empty());
        assert!(results.currencies.is_empty());
    }

    #[test]
    fn test_list_events_missing_results() {
        let err = resolve_list_events(br#"{"currency_details": {}}"#).unwrap_err();
        assert!(matches!(err, Error::MissingField("results")));
    }

    #[test]
    fn test_list_events_bad_currencies() {
        let err =
            resolve_list_events(br#"{"results": {}, "currency_details": [1, 2]}"#).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_events_by_id() {
        let body = br#"{
            "events_by_id": {
                "6IF": {"event": {"event_id": "6IF", "event_desc": "Nutcracker"}},
                "25DR": {"event": {"event_id": "25DR"}},
                "GONE": {}
            }
        }"#;
        let events = resolve_events_by_id(body).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events["6IF"].description, "Nutcracker");
        assert!(!events.contains_key("GONE"));
    }

    #[test]
    fn test_performances_envelope() {
        let body = br#"{
            "autoselect_this_performance": true,
            "results": {
                "has_perf_names": false,
                "performance": [{"perf_id": "6IF-A7N", "iso8601_date_and_time": "2017-01-02T19:30:00+00:00"}]
            }
        }"#;
        let results = resolve_list_performances(body).unwrap();
        assert!(results.autoselect);
        assert_eq!(results.performances[0].id, "6IF-A7N");
        assert!(results.performances[0].datetime.is_some());
    }

    #[test]
    fn test_times_envelope() {
        let body = br#"{"results": {"time": [{"time_desc": "7.30 PM"}, {"time_desc": "2.30 PM"}]}}"#;
        let results = resolve_list_performance_times(body).unwrap();
        assert_eq!(results.times.len(), 2);
        assert_eq!(results.times[0].time_desc, "7.30 PM");
    }

    #[test]
    fn test_sources_bare_array() {
        let body = br#"[{"source_code": "ext_test0", "source_desc_from_config": "External Test Backend 0"}]"#;
        let result = resolve_sources(body).unwrap();
        assert_eq!(result.sources.len(), 1);
        assert_eq!(result.sources[0].description, "External Test Backend 0");
    }

    #[test]
    fn test_release() {
        assert!(resolve_release(br#"{"released_ok": true}"#).unwrap());
        assert!(!resolve_release(br#"{"released_ok": false}"#).unwrap());
        assert!(!resolve_release(b"{}").unwrap());
        assert!(resolve_release(b"nope").is_err());
    }

    #[test]
    fn test_decode_error() {
        assert!(matches!(resolve_test(b"not real json"), Err(Error::Decode(_))));
        assert!(matches!(resolve_status(b""), Err(Error::Decode(_))));
    }

    #[test]
    fn test_minimal_objects() {
        assert_eq!(resolve_test(b"{}").unwrap(), User::default());
        assert_eq!(
            resolve_availability(b"{}").unwrap(),
            AvailabilityResult::default()
        );
        assert_eq!(resolve_months(br#"{"extra": 1}"#).unwrap(), MonthsResult::default());
        assert!(resolve_cancellation(b"{}").unwrap().trolley.bundles.is_empty());
    }
}
