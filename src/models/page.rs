//! Page request/response exchanged with the Events Service.
//!
//! The service wraps every answer in an envelope:
//! `{ "success": bool, "data": { "events": [...] }, "error": { "code", "message" } | null }`.
//! `decode_page` is the only way to obtain a `PageResponse`, so nothing downstream
//! ever touches an unchecked payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FetchError;
use crate::models::Event;

/// Query sent for one page of events. Values are forwarded as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub quantity: u32,
}

impl PageRequest {
    pub fn new(page: u32, quantity: u32) -> Self {
        Self { page, quantity }
    }
}

/// One validated page of events, in the order the service returned them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResponse {
    pub events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    code: String,
    message: String,
}

pub fn decode_page(body: &[u8]) -> Result<PageResponse, FetchError> {
    let value: Value = serde_json::from_slice(body)?;
    let Value::Object(mut root) = value else {
        return Err(FetchError::Shape("expected a JSON object".to_string()));
    };

    if root.get("success") == Some(&Value::Bool(false)) {
        return Err(service_error(&mut root));
    }

    let mut data = match root.remove("data") {
        Some(Value::Object(data)) => data,
        Some(Value::Null) | None => return Err(FetchError::Shape("missing `data`".to_string())),
        Some(_) => return Err(FetchError::Shape("`data` is not an object".to_string())),
    };

    let events = match data.remove("events") {
        Some(Value::Null) | None => {
            return Err(FetchError::Shape("missing `data.events`".to_string()))
        }
        Some(events) => events,
    };

    let events: Vec<Event> = serde_json::from_value(events)
        .map_err(|e| FetchError::Shape(format!("invalid `data.events`: {e}")))?;

    Ok(PageResponse { events })
}

fn service_error(root: &mut Map<String, Value>) -> FetchError {
    let body = root
        .remove("error")
        .and_then(|error| serde_json::from_value::<ServiceErrorBody>(error).ok());

    match body {
        Some(ServiceErrorBody { code, message }) => FetchError::Service { code, message },
        None => FetchError::Service {
            code: "UNKNOWN".to_string(),
            message: "service reported failure without details".to_string(),
        },
    }
}
