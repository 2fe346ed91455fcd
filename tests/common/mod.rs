#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use event_board::config::{AppConfig, Config, EventsServiceConfig};
use event_board::models::Event;
use fake::faker::address::en::CityName;
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use serde_json::{json, Value};

pub fn events_service(base_url: &str) -> EventsServiceConfig {
    EventsServiceConfig {
        base_url: base_url.to_string(),
        default_page: 1,
        default_quantity: 10,
        timeout_seconds: None,
    }
}

pub fn config(base_url: &str) -> Config {
    Config {
        app: AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            rust_log: "event_board=debug".to_string(),
        },
        events_service: events_service(base_url),
    }
}

pub fn start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 9, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

pub fn fake_event(id: i64) -> Event {
    Event {
        id,
        title: Sentence(1..4).fake(),
        description: Some(Sentence(3..8).fake()),
        start_datetime: start(),
        end_datetime: start() + TimeDelta::hours((1..6).fake::<i64>()),
        created_by: (1..100).fake(),
        location: Some(CityName().fake()),
        max_attendees: Some((1..500).fake()),
    }
}

pub fn launch_event() -> Value {
    json!({
        "id": 7,
        "title": "Launch",
        "description": "Kickoff",
        "start_datetime": "2025-09-01T10:00:00",
        "end_datetime": "2025-09-01T12:00:00",
        "created_by": 1,
        "location": "HQ",
        "max_attendees": 20
    })
}

pub fn page_body(events: Vec<Value>) -> Value {
    json!({
        "success": true,
        "data": { "events": events },
        "error": null
    })
}
