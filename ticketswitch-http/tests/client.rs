use std::collections::HashMap;
use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde_json::json;
use ticketswitch::params::{
    CancellationParams, EmailCheckParams, GetAvailabilityParams, ListEventsParams,
    ListPerformancesParams, MakePurchaseParams, MakeReservationParams, ParameterSet,
    PaginationParams, TransactionParams, UniversalParams,
};
use ticketswitch::model::Customer;
use ticketswitch::{Config, Error, RequestContext};
use ticketswitch_http::{HttpClient, ReqwestTransport, connect};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn client(server: &MockServer) -> HttpClient {
    connect(Config::new("fred_flintstone", "yabadabadoo").with_base_url(server.uri())).unwrap()
}

async fn received(server: &MockServer) -> Vec<Request> {
    server.received_requests().await.unwrap()
}

fn query(request: &Request) -> HashMap<String, String> {
    request.url.query_pairs().into_owned().collect()
}

#[tokio::test]
async fn test_basic_auth_and_get_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/f13/test.v1"))
        .and(header(
            "authorization",
            "Basic ZnJlZF9mbGludHN0b25lOnlhYmFkYWJhZG9v",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": "fred_flintstone",
            "real_name": "Fred Flintstone",
            "default_country_code": "us",
            "is_b2b": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = client(&server).test(&RequestContext::new()).await.unwrap();
    assert_eq!(user.id, "fred_flintstone");
    assert_eq!(user.name, "Fred Flintstone");
    assert_eq!(user.country, "us");
    assert!(user.is_b2b);

    let requests = received(&server).await;
    assert!(requests[0].headers.get("content-type").is_none());
    assert!(requests[0].body.is_empty());
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_crypto_block_and_sub_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/f13/test.v1"))
        .and(query_param("user_id", "bill"))
        .and(query_param("crypto_block", "c0ffee"))
        .and(query_param("sub_id", "ted"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user_id": "bill"})))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config::default()
        .with_base_url(server.uri())
        .with_user("bill")
        .with_crypto_block("c0ffee")
        .with_sub_user("ted");
    let client = connect(config).unwrap();
    client.test(&RequestContext::new()).await.unwrap();

    let requests = received(&server).await;
    assert!(requests[0].headers.get("authorization").is_none());
    assert_eq!(query(&requests[0]).len(), 3);
}

#[tokio::test]
async fn test_language_and_tracking_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/f13/sources.v1"))
        .and(header("accept-language", "de"))
        .and(header("x-request-id", "session-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"source_code": "ext_test0", "source_desc_from_config": "External Test Backend 0"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config::new("fred_flintstone", "yabadabadoo")
        .with_base_url(server.uri())
        .with_language("de");
    let client = connect(config).unwrap();
    let ctx = RequestContext::new().with_tracking_id("session-42");
    let result = client
        .get_sources(&ctx, &UniversalParams::default())
        .await
        .unwrap();
    assert_eq!(result.sources[0].code, "ext_test0");
}

#[tokio::test]
async fn test_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error_code": 3,
            "error_desc": "User authorisation failure"
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .test(&RequestContext::new())
        .await
        .unwrap_err();
    assert!(err.is_authentication());
    assert!(!err.is_gone());
    assert_eq!(
        err.to_string(),
        "ticketswitch: API error 3: User authorisation failure"
    );
}

#[tokio::test]
async fn test_gone_on_expired_callback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/f13/purchase.v1"))
        .respond_with(ResponseTemplate::new(410).set_body_json(json!({
            "error_code": 1100,
            "error_desc": "Callback has already been processed"
        })))
        .mount(&server)
        .await;

    let params = MakePurchaseParams::new("4df498e9", Customer::default());
    let err = client(&server)
        .make_purchase(&RequestContext::new(), &params)
        .await
        .unwrap_err();
    assert!(err.is_gone());
    assert!(!err.is_authentication());
}

#[tokio::test]
async fn test_non_json_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client(&server)
        .test(&RequestContext::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = connect(
        Config::new("fred_flintstone", "yabadabadoo").with_base_url("http://127.0.0.1:9"),
    )
    .unwrap();
    let err = client.test(&RequestContext::new()).await.unwrap_err();
    let Error::Transport(err) = err else {
        panic!("expected a transport error, got {err:?}");
    };
    assert!(err.downcast_ref::<reqwest::Error>().is_some());
}

#[tokio::test]
async fn test_request_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let ctx = RequestContext::new().with_timeout(Duration::from_millis(100));
    let err = client(&server).test(&ctx).await.unwrap_err();
    let Error::Transport(err) = err else {
        panic!("expected a transport error, got {err:?}");
    };
    assert!(err.downcast_ref::<reqwest::Error>().unwrap().is_timeout());
}

#[tokio::test]
async fn test_list_events() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/f13/events.v1"))
        .and(query_param("keywords", "nutcracker,ballet"))
        .and(query_param("date_range", "20170101:20170601"))
        .and(query_param("country_code", "uk"))
        .and(query_param("page_len", "10"))
        .and(query_param("page_no", "2"))
        .and(query_param("req_cost_range", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": {
                "event": [
                    {
                        "event_id": "6IF",
                        "event_desc": "Matthew Bourne's Nutcracker TEST",
                        "cost_range": {"min_seatprice": 21.5, "max_seatprice": 30, "range_currency_code": "gbp"}
                    },
                    {"event_id": "25DR", "event_desc": "Swan Lake"}
                ],
                "paging_status": {
                    "page_length": 10,
                    "page_number": 2,
                    "pages_remaining": 0,
                    "results_remaining": 0,
                    "total_unpaged_results": 22
                }
            },
            "currency_details": {
                "gbp": {"currency_code": "gbp", "currency_places": 2, "currency_pre_symbol": "£"}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = ListEventsParams {
        universal: UniversalParams {
            cost_range: true,
            ..UniversalParams::default()
        },
        pagination: PaginationParams::new(10, 2),
        keywords: vec!["nutcracker".into(), "ballet".into()],
        start_date: NaiveDate::from_ymd_opt(2017, 1, 1),
        end_date: NaiveDate::from_ymd_opt(2017, 6, 1),
        country_code: Some("uk".into()),
        ..ListEventsParams::default()
    };
    let results = client(&server)
        .list_events(&RequestContext::new(), &params)
        .await
        .unwrap();

    assert_eq!(results.events.len(), 2);
    assert_eq!(results.events[0].id, "6IF");
    assert_eq!(
        results.events[0].cost_range.min_seatprice,
        Decimal::new(215, 1)
    );
    assert_eq!(results.paging_status.total_results, 22);
    assert_eq!(results.currencies["gbp"].pre_symbol, "£");
}

#[tokio::test]
async fn test_list_events_missing_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"currency_details": {}})))
        .mount(&server)
        .await;

    let err = client(&server)
        .list_events(&RequestContext::new(), &ListEventsParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingField("results")));
}

#[tokio::test]
async fn test_get_event_and_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/f13/events_by_id.v1"))
        .and(query_param("event_id_list", "6IF"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "events_by_id": {"6IF": {"event": {"event_id": "6IF", "venue_desc": "Sadler's Wells"}}}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/f13/events_by_id.v1"))
        .and(query_param("event_id_list", "NOPE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"events_by_id": {}})))
        .mount(&server)
        .await;

    let client = client(&server);
    let ctx = RequestContext::new();
    let universal = UniversalParams::default();

    let event = client.get_event(&ctx, "6IF", &universal).await.unwrap();
    assert_eq!(event.venue, "Sadler's Wells");

    let err = client.get_event(&ctx, "NOPE", &universal).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_list_performances() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/f13/performances.v1"))
        .and(query_param("event_id", "6IF"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "autoselect_this_performance": true,
            "results": {
                "has_perf_names": false,
                "performance": [
                    {"perf_id": "6IF-A7N", "iso8601_date_and_time": "2017-01-02T19:30:00+00:00"},
                    {"perf_id": "6IF-A7P", "iso8601_date_and_time": "2017-01-03T19:30:00+00:00"}
                ],
                "paging_status": {"total_unpaged_results": 2}
            }
        })))
        .mount(&server)
        .await;

    let results = client(&server)
        .list_performances(&RequestContext::new(), &ListPerformancesParams::new("6IF"))
        .await
        .unwrap();
    assert!(results.autoselect);
    assert_eq!(results.performances.len(), 2);
    let first = results.performances[0].datetime.unwrap();
    assert_eq!((first.year(), first.month(), first.day()), (2017, 1, 2));
}

#[tokio::test]
async fn test_get_availability() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/f13/availability.v1"))
        .and(query_param("perf_id", "6IF-A7N"))
        .and(query_param("number_of_seats", "2"))
        .and(query_param("add_discounts", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "availability": {"ticket_type": [{
                "ticket_type_code": "CIRCLE",
                "ticket_type_desc": "Upper circle",
                "price_band": [{
                    "price_band_code": "A",
                    "sale_seatprice": "25.00",
                    "sale_surcharge": 2.5,
                    "number_available": 6
                }]
            }]},
            "backend_is_broken": false,
            "currency_code": "gbp",
            "valid_quantities": [1, 2, 3, 4]
        })))
        .mount(&server)
        .await;

    let params = GetAvailabilityParams {
        number_of_seats: 2,
        discounts: true,
        ..GetAvailabilityParams::default()
    };
    let result = client(&server)
        .get_availability(&RequestContext::new(), "6IF-A7N", &params)
        .await
        .unwrap();

    let band = &result.ticket_types()[0].price_bands[0];
    assert_eq!(band.code, "A");
    assert_eq!(band.seatprice, Decimal::new(25, 0));
    assert_eq!(band.surcharge, Decimal::new(25, 1));
    assert_eq!(result.valid_quantities, [1, 2, 3, 4]);
}

#[tokio::test]
async fn test_make_reservation_posts_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/f13/reserve.v1"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "no_of_seats": "2",
            "perf_id": "6IF-A7N",
            "price_band_code": "A/pool",
            "ticket_type_code": "STALLS",
            "seat0": "A12",
            "seat1": "A13",
            "ext_test0_send_code": "COBO"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transaction_status": "reserved",
            "minutes_left_on_reserve": 15.0,
            "needs_email_address": true,
            "trolley_contents": {"transaction_uuid": "4df498e9"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = MakeReservationParams {
        performance_id: "6IF-A7N".into(),
        number_of_seats: 2,
        ticket_type_code: "STALLS".into(),
        price_band_code: "A/pool".into(),
        seats: vec!["A12".into(), "A13".into()],
        source_code: Some("ext_test0".into()),
        send_method: Some("COBO".into()),
        ..MakeReservationParams::default()
    };
    let result = client(&server)
        .make_reservation(&RequestContext::new(), &params)
        .await
        .unwrap();
    assert_eq!(result.transaction_status, "reserved");
    assert!(result.needs_email_address);
    assert_eq!(result.trolley.transaction_uuid, "4df498e9");

    let requests = received(&server).await;
    assert!(requests[0].url.query().is_none());
    assert!(requests[0].body.ends_with(b"\n"));
}

#[tokio::test]
async fn test_release_reservation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/f13/release.v1"))
        .and(body_json(json!({"transaction_uuid": "released"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"released_ok": true})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/f13/release.v1"))
        .and(body_json(json!({"transaction_uuid": "silent"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = client(&server);
    let ctx = RequestContext::new();
    assert!(
        client
            .release_reservation(&ctx, &TransactionParams::new("released"))
            .await
            .unwrap()
    );
    assert!(
        !client
            .release_reservation(&ctx, &TransactionParams::new("silent"))
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_make_purchase_with_payment_method() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/f13/purchase.v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transaction_status": "purchased",
            "trolley_contents": {"transaction_uuid": "4df498e9"},
            "customer": {"first_name": "Fred", "email_addr": "fred@example.com"}
        })))
        .mount(&server)
        .await;

    let customer = Customer {
        first_name: "Fred".into(),
        last_name: "Flintstone".into(),
        email_address: "fred@example.com".into(),
        ..Customer::default()
    };
    let card: ParameterSet = [("card_number", "4111111111111111"), ("expiry_date", "0530")].into();
    let params = MakePurchaseParams {
        send_confirmation_email: true,
        ..MakePurchaseParams::new("4df498e9", customer)
    }
    .with_payment_method(card);

    let result = client(&server)
        .make_purchase(&RequestContext::new(), &params)
        .await
        .unwrap();
    assert_eq!(result.status, "purchased");
    assert_eq!(result.customer.email_address, "fred@example.com");

    let requests = received(&server).await;
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["transaction_uuid"], "4df498e9");
    assert_eq!(body["first_name"], "Fred");
    assert_eq!(body["email_address"], "fred@example.com");
    assert_eq!(body["card_number"], "4111111111111111");
    assert_eq!(body["send_confirmation_email"], "1");
}

#[tokio::test]
async fn test_get_status_with_customer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/f13/status.v1"))
        .and(query_param("transaction_uuid", "4df498e9"))
        .and(query_param("add_customer", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transaction_status": "purchased",
            "customer": {"last_name": "Flintstone"}
        })))
        .mount(&server)
        .await;

    let params = TransactionParams {
        universal: UniversalParams {
            add_customer: true,
            ..UniversalParams::default()
        },
        ..TransactionParams::new("4df498e9")
    };
    let result = client(&server)
        .get_status(&RequestContext::new(), &params)
        .await
        .unwrap();
    assert_eq!(result.status, "purchased");
    assert_eq!(result.customer.last_name, "Flintstone");
}

#[tokio::test]
async fn test_cancel() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/f13/cancel.v1"))
        .and(query_param("transaction_uuid", "4df498e9"))
        .and(query_param("cancel_items_list", "1,2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cancelled_item_numbers": [1, 2],
            "trolley_contents": {"bundle": [{"order": [
                {"item_number": 1, "cancellation_status": "cancelled"},
                {"item_number": 2, "cancellation_status": "cancelled"}
            ]}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = CancellationParams {
        cancel_items: vec![1, 2],
        ..CancellationParams::new("4df498e9")
    };
    let result = client(&server)
        .cancel(&RequestContext::new(), &params)
        .await
        .unwrap();
    assert_eq!(result.cancelled_item_numbers, [1, 2]);
    assert!(result.is_fully_cancelled());

    let requests = received(&server).await;
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_email_check() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/f13/email_check.v1"))
        .and(query_param("email_address", "fred@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"valid_email_address": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let ctx = RequestContext::new();
    client
        .email_check(&ctx, &EmailCheckParams::new("fred@example.com"))
        .await
        .unwrap();

    let err = client
        .email_check(&ctx, &EmailCheckParams::new(""))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn test_custom_reqwest_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/f13/test.v1"))
        .and(header("user-agent", "box-office/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user_id": "fred"})))
        .expect(1)
        .mount(&server)
        .await;

    let reqwest_client = reqwest::Client::builder()
        .user_agent("box-office/1.0")
        .build()
        .unwrap();
    let client = ticketswitch::Client::new(
        Config::new("fred", "pebbles").with_base_url(server.uri()),
        ReqwestTransport::from_client(reqwest_client),
    );
    let user = client.test(&RequestContext::new()).await.unwrap();
    assert_eq!(user.id, "fred");
}
