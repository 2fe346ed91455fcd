use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One scheduled event as delivered by the Events Service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub start_datetime: NaiveDateTime,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub end_datetime: NaiveDateTime,
    pub created_by: i64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub max_attendees: Option<u32>,
}

pub(crate) mod timestamp {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer};

    const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    /// Accepts RFC 3339, naive ISO 8601 and RFC 2822. Offsets are folded into UTC.
    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .or_else(|| DateTime::parse_from_rfc2822(raw).ok().map(|dt| dt.naive_utc()))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("unrecognised timestamp `{raw}`")))
    }
}
