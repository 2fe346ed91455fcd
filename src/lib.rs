pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod render;
pub mod services;

use std::sync::Arc;

pub use error::FetchError;

// Shared state for every request handler
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub events_client: services::EventsClient,
}

impl AppState {
    pub fn new(config: config::Config) -> Result<Arc<Self>, FetchError> {
        let events_client = services::EventsClient::from_config(&config.events_service)?;
        Ok(Arc::new(Self {
            config,
            events_client,
        }))
    }
}
