//! events_client.rs
//!
//! Client for the external Events Service.
//!
//! `EventsClient` issues exactly one `GET /events?page=..&quantity=..` per call and hands
//! back either a validated `PageResponse` or a `FetchError`. There is no retry and no
//! backoff; a timeout applies only when one is configured.

use reqwest::{RequestBuilder, StatusCode, Url};
use tracing::{debug, info};

use crate::config::EventsServiceConfig;
use crate::error::FetchError;
use crate::models::{decode_page, PageRequest, PageResponse};

/// Largest slice of an unexpected body kept in `FetchError::Status`.
const STATUS_BODY_LIMIT: usize = 512;

#[derive(Debug, Clone)]
pub struct EventsClient {
    /// Base URL of the service, without trailing slash.
    base_url: String,
    http_client: reqwest::Client,
}

impl EventsClient {
    pub fn from_config(config: &EventsServiceConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, request: PageRequest) -> RequestBuilder {
        self.http_client
            .get(format!("{}/events", self.base_url))
            .query(&request)
    }

    /// The exact URL a fetch for `request` would hit.
    pub fn events_url(&self, request: PageRequest) -> Result<Url, FetchError> {
        Ok(self.request(request).build()?.url().clone())
    }

    pub async fn fetch_events(&self, page: u32, quantity: u32) -> Result<PageResponse, FetchError> {
        self.fetch_page(PageRequest::new(page, quantity)).await
    }

    pub async fn fetch_page(&self, request: PageRequest) -> Result<PageResponse, FetchError> {
        info!(
            "Fetching events: page={}, quantity={}",
            request.page, request.quantity
        );

        let response = self.request(request).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(unsuccessful(status, &body));
        }

        let page = decode_page(&body)?;
        debug!(count = page.events.len(), payload = ?page, "Decoded events page");
        Ok(page)
    }
}

// A failing status keeps the service's own error envelope when it sent one.
fn unsuccessful(status: StatusCode, body: &[u8]) -> FetchError {
    match decode_page(body) {
        Err(err @ FetchError::Service { .. }) => err,
        _ => {
            let text = String::from_utf8_lossy(body);
            FetchError::Status {
                status,
                body: text.chars().take(STATUS_BODY_LIMIT).collect(),
            }
        }
    }
}
