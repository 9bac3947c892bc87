pub mod models;
pub mod properties;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

pub use models::client::{map_client, map_client_at, ClientSubmission};
pub use models::therapist::{map_therapist, map_therapist_at, TherapistSubmission};
pub use properties::{Properties, PropertyValue};

/// Discriminator carried by every submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionType {
    Client,
    Therapist,
}

impl SubmissionType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "client" => Some(Self::Client),
            "therapist" => Some(Self::Therapist),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Therapist => "therapist",
        }
    }

    /// Run the mapper that belongs to this submission type.
    pub fn map(&self, data: &Value) -> Properties {
        self.map_at(data, Utc::now())
    }

    pub fn map_at(&self, data: &Value, submitted_at: DateTime<Utc>) -> Properties {
        match self {
            Self::Client => map_client_at(data, submitted_at),
            Self::Therapist => map_therapist_at(data, submitted_at),
        }
    }
}

impl fmt::Display for SubmissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats a timestamp the way the record store expects a date start.
pub fn format_date_start(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Form fields are free-form: anything that is not a non-empty string
/// counts as absent and falls back to the field default.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}

/// Decodes a submission body, treating anything that is not a JSON object as empty.
pub(crate) fn decode_or_default<T>(data: &Value) -> T
where
    T: for<'de> Deserialize<'de> + Default,
{
    if data.is_object() {
        serde_json::from_value(data.clone()).unwrap_or_default()
    } else {
        T::default()
    }
}
