use http::StatusCode;
use notion_client::NotionError;
use serde_json::{json, Value};
use waitlist_records::SubmissionType;

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Server misconfigured: missing Notion API key")]
    MissingCredential,

    #[error("Invalid JSON")]
    InvalidJson,

    #[error("Payload too large")]
    PayloadTooLarge,

    #[error("Invalid type. Use \"client\" or \"therapist\".")]
    InvalidType,

    #[error("Missing database ID for {0}")]
    MissingCollection(SubmissionType),

    #[error("Failed to submit to Notion: {0}")]
    Downstream(#[from] NotionError),
}

impl SubmissionError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidJson | Self::InvalidType => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::MissingCredential | Self::MissingCollection(_) | Self::Downstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to hand back to the browser. Downstream detail stays in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::Downstream(_) => "Failed to submit to Notion".to_string(),
            other => other.to_string(),
        }
    }

    pub fn to_body(&self) -> Value {
        json!({ "error": self.public_message() })
    }
}

pub type SubmissionResult<T> = Result<T, SubmissionError>;
