//! Projection of a page of events into display units, and the HTML page built from them.

use std::sync::LazyLock;

use minijinja::{context, Environment};
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use tracing::error;

use crate::error::FetchError;
use crate::models::{Event, PageRequest, PageResponse};
use crate::services::EventsClient;

const EVENTS_TEMPLATE: &str = include_str!("events.html");

// `.html` name turns on HTML auto-escaping.
static TEMPLATES: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();
    env.add_template("events.html", EVENTS_TEMPLATE)
        .expect("events template must parse");
    env
});

/// One rendered event, keyed by the event id.
///
/// Holds the display values; the labelled lines are produced by the `*_line` accessors.
/// Nullable fields render as empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUnit {
    pub key: i64,
    title: String,
    description: String,
    location: String,
    capacity: Option<u32>,
}

impl DisplayUnit {
    pub fn title_line(&self) -> String {
        self.title.clone()
    }

    pub fn description_line(&self) -> String {
        format!("description: {}", self.description)
    }

    pub fn location_line(&self) -> String {
        format!("Located in: {}", self.location)
    }

    pub fn capacity_line(&self) -> String {
        let capacity = self.capacity.map(|n| n.to_string()).unwrap_or_default();
        format!("Only {capacity} allowed in the event")
    }

    pub fn lines(&self) -> [String; 4] {
        [
            self.title_line(),
            self.description_line(),
            self.location_line(),
            self.capacity_line(),
        ]
    }
}

// Serialised as the lines the viewer sees, for both the template and the JSON projection.
impl Serialize for DisplayUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut unit = serializer.serialize_struct("DisplayUnit", 5)?;
        unit.serialize_field("key", &self.key)?;
        unit.serialize_field("title", &self.title_line())?;
        unit.serialize_field("description", &self.description_line())?;
        unit.serialize_field("location", &self.location_line())?;
        unit.serialize_field("capacity", &self.capacity_line())?;
        unit.end()
    }
}

impl From<&Event> for DisplayUnit {
    fn from(event: &Event) -> Self {
        Self {
            key: event.id,
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            location: event.location.clone().unwrap_or_default(),
            capacity: event.max_attendees,
        }
    }
}

/// Lazily yields one unit per event, in response order.
pub fn render_events(page: &PageResponse) -> impl Iterator<Item = DisplayUnit> + '_ {
    page.events.iter().map(DisplayUnit::from)
}

/// Outcome of one render cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EventsView {
    Loaded { units: Vec<DisplayUnit> },
    Failed { kind: &'static str, message: String },
}

impl EventsView {
    pub fn loaded(page: &PageResponse) -> Self {
        EventsView::Loaded {
            units: render_events(page).collect(),
        }
    }

    pub fn failed(err: &FetchError) -> Self {
        EventsView::Failed {
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, EventsView::Loaded { .. })
    }
}

impl From<Result<PageResponse, FetchError>> for EventsView {
    fn from(result: Result<PageResponse, FetchError>) -> Self {
        match result {
            Ok(page) => EventsView::loaded(&page),
            Err(err) => EventsView::failed(&err),
        }
    }
}

/// Fetches one page and projects it. Nothing is kept between cycles.
pub async fn render_cycle(client: &EventsClient, request: PageRequest) -> EventsView {
    let result = client.fetch_page(request).await;
    if let Err(err) = &result {
        error!(kind = err.kind(), "Failed to load events: {}", err);
    }
    EventsView::from(result)
}

pub fn render_html(view: &EventsView) -> Result<String, minijinja::Error> {
    TEMPLATES
        .get_template("events.html")?
        .render(context! { view })
}
