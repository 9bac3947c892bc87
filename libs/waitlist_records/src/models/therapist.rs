use crate::properties::{Properties, PropertyValue};
use crate::{decode_or_default, format_date_start, lenient_string};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// Waitlist entry from a therapist interested in partnering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapistSubmission {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub license_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub states_licensed: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cultural_alignment: Option<String>,
}

impl TherapistSubmission {
    pub fn from_value(data: &Value) -> Self {
        decode_or_default(data)
    }

    pub fn into_properties(self, submitted_at: DateTime<Utc>) -> Properties {
        let mut properties = Properties::new();
        properties.insert(
            "Name".into(),
            PropertyValue::title(self.name.unwrap_or_default()),
        );
        properties.insert(
            "Email".into(),
            PropertyValue::email(self.email.unwrap_or_default()),
        );
        properties.insert(
            "License Type".into(),
            PropertyValue::select(self.license_type.unwrap_or_default()),
        );
        properties.insert(
            "States Licensed".into(),
            PropertyValue::rich_text(self.states_licensed.unwrap_or_default()),
        );
        properties.insert(
            "Cultural Alignment".into(),
            PropertyValue::rich_text(self.cultural_alignment.unwrap_or_default()),
        );
        properties.insert(
            "Submitted At".into(),
            PropertyValue::date(format_date_start(submitted_at)),
        );
        properties
    }
}

pub fn map_therapist(data: &Value) -> Properties {
    map_therapist_at(data, Utc::now())
}

pub fn map_therapist_at(data: &Value, submitted_at: DateTime<Utc>) -> Properties {
    TherapistSubmission::from_value(data).into_properties(submitted_at)
}
