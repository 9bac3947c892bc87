use crate::properties::{Properties, PropertyValue};
use crate::{decode_or_default, format_date_start, lenient_string};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_LANGUAGE: &str = "English";
pub const DEFAULT_SUPPORT_TYPE: &str = "Individual Therapy";

/// Waitlist entry from a prospective therapy client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSubmission {
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cultural_background: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub support_type: Option<String>,
}

impl ClientSubmission {
    pub fn from_value(data: &Value) -> Self {
        decode_or_default(data)
    }

    pub fn into_properties(self, submitted_at: DateTime<Utc>) -> Properties {
        let mut properties = Properties::new();
        properties.insert(
            "Name".into(),
            PropertyValue::title(self.first_name.unwrap_or_default()),
        );
        properties.insert(
            "Email".into(),
            PropertyValue::email(self.email.unwrap_or_default()),
        );
        properties.insert(
            "Language".into(),
            PropertyValue::select(
                self.language
                    .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            ),
        );
        properties.insert(
            "Cultural Background".into(),
            PropertyValue::rich_text(self.cultural_background.unwrap_or_default()),
        );
        properties.insert(
            "Support Type".into(),
            PropertyValue::select(
                self.support_type
                    .unwrap_or_else(|| DEFAULT_SUPPORT_TYPE.to_string()),
            ),
        );
        properties.insert(
            "Submitted At".into(),
            PropertyValue::date(format_date_start(submitted_at)),
        );
        properties
    }
}

pub fn map_client(data: &Value) -> Properties {
    map_client_at(data, Utc::now())
}

pub fn map_client_at(data: &Value, submitted_at: DateTime<Utc>) -> Properties {
    ClientSubmission::from_value(data).into_properties(submitted_at)
}
