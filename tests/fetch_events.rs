mod common;

use std::time::Duration;

use event_board::services::EventsClient;
use event_board::FetchError;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{events_service, fake_event, launch_event, page_body};

async fn client_for(server: &MockServer) -> EventsClient {
    EventsClient::from_config(&events_service(&server.uri())).unwrap()
}

#[tokio::test]
async fn query_carries_page_and_quantity_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .and(query_param("page", "3"))
        .and(query_param("quantity", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server).await.fetch_events(3, 25).await.unwrap();
    assert!(page.events.is_empty());

    let requests = server.received_requests().await.unwrap();
    let pairs: Vec<(String, String)> = requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("page".to_string(), "3".to_string()),
            ("quantity".to_string(), "25".to_string())
        ]
    );
}

#[tokio::test]
async fn decoded_events_keep_server_order() {
    let server = MockServer::start().await;
    let events = vec![fake_event(9), fake_event(2), fake_event(5)];
    let body = page_body(events.iter().map(|e| serde_json::to_value(e).unwrap()).collect());
    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let page = client_for(&server).await.fetch_events(1, 3).await.unwrap();
    assert_eq!(page.events, events);
}

#[tokio::test]
async fn connection_refused_is_a_network_error() {
    // Grab a free port, then release it so nothing is listening.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = EventsClient::from_config(&events_service(&format!("http://127.0.0.1:{port}"))).unwrap();

    let err = client.fetch_events(1, 10).await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).await.fetch_events(1, 10).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn missing_events_is_a_shape_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": {} })))
        .mount(&server)
        .await;

    let err = client_for(&server).await.fetch_events(1, 10).await.unwrap_err();
    assert!(matches!(err, FetchError::Shape(_)), "got {err:?}");
}

#[tokio::test]
async fn service_error_envelope_survives_failing_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "data": null,
            "error": { "code": "INTERNAL_SERVER_ERROR", "message": "Something went wrong" }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).await.fetch_events(1, 10).await.unwrap_err();
    match err {
        FetchError::Service { code, .. } => assert_eq!(code, "INTERNAL_SERVER_ERROR"),
        other => panic!("expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn bare_failing_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client_for(&server).await.fetch_events(1, 10).await.unwrap_err();
    match err {
        FetchError::Status { status, body } => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn configured_timeout_cuts_slow_service() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(vec![launch_event()]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = events_service(&server.uri());
    config.timeout_seconds = Some(1);
    let client = EventsClient::from_config(&config).unwrap();

    let err = client.fetch_events(1, 10).await.unwrap_err();
    match err {
        FetchError::Network(e) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {other:?}"),
    }
}
