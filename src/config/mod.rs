use config::{ConfigError, Environment};
use serde::Deserialize;
use std::env;
use std::time::Duration;

// Top-level configuration, one section per concern
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub events_service: EventsServiceConfig,
}

// Settings of the hosting HTTP surface
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Settings of the upstream Events Service
#[derive(Debug, Clone, Deserialize)]
pub struct EventsServiceConfig {
    pub base_url: String,
    pub default_page: u32,
    pub default_quantity: u32,
    /// Whole-request timeout. Absent means the fetch waits as long as the service does.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl EventsServiceConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Config {
    /// Loads settings from the process environment.
    ///
    /// Nested keys use `__` as separator, e.g. `APP__PORT=8080` or
    /// `EVENTS_SERVICE__BASE_URL=http://events.local`. `RUST_LOG` overrides `app.rust_log`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::from_environment(Environment::default())?;
        if let Ok(rust_log) = env::var("RUST_LOG") {
            config.app.rust_log = rust_log;
        }
        Ok(config)
    }

    pub fn from_environment(source: Environment) -> Result<Self, ConfigError> {
        config::Config::builder()
            .set_default("app.host", "0.0.0.0")?
            .set_default("app.port", 3000)?
            .set_default("app.environment", "development")?
            .set_default("app.rust_log", "event_board=debug,tower_http=debug")?
            .set_default("events_service.base_url", "http://127.0.0.1:5000")?
            .set_default("events_service.default_page", 1)?
            .set_default("events_service.default_quantity", 10)?
            .add_source(source.separator("__").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
