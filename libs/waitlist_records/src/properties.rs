use serde::Serialize;
use std::collections::BTreeMap;

/// Record-store properties keyed by the column name in the target database.
pub type Properties = BTreeMap<String, PropertyValue>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyValue {
    Title(Vec<RichText>),
    RichText(Vec<RichText>),
    Email(String),
    Select(SelectOption),
    Date(DateValue),
}

impl PropertyValue {
    pub fn title(content: impl Into<String>) -> Self {
        Self::Title(vec![RichText::plain(content)])
    }

    pub fn rich_text(content: impl Into<String>) -> Self {
        Self::RichText(vec![RichText::plain(content)])
    }

    pub fn email(address: impl Into<String>) -> Self {
        Self::Email(address.into())
    }

    pub fn select(name: impl Into<String>) -> Self {
        Self::Select(SelectOption { name: name.into() })
    }

    pub fn date(start: impl Into<String>) -> Self {
        Self::Date(DateValue { start: start.into() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichText {
    pub text: TextContent,
}

impl RichText {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            text: TextContent {
                content: content.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextContent {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateValue {
    pub start: String,
}
