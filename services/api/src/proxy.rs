use http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use notion_client::RecordStore;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info, warn, Instrument};
use uuid::Uuid;
use waitlist_records::SubmissionType;

use crate::config::ProxyConfig;
use crate::errors::{SubmissionError, SubmissionResult};

/// What a handled invocation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Preflight,
    Created(SubmissionType),
}

/// Hosting-neutral response. Adapters turn this into their own response type.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyReply {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl ProxyReply {
    pub fn headers(&self) -> HeaderMap {
        let mut headers = cors_headers();
        if self.body.is_some() {
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
        }
        headers
    }

    pub fn body_string(&self) -> String {
        self.body
            .as_ref()
            .map(Value::to_string)
            .unwrap_or_default()
    }
}

impl From<SubmissionResult<Outcome>> for ProxyReply {
    fn from(result: SubmissionResult<Outcome>) -> Self {
        match result {
            Ok(Outcome::Preflight) => Self {
                status: StatusCode::OK,
                body: None,
            },
            Ok(Outcome::Created(_)) => Self {
                status: StatusCode::OK,
                body: Some(json!({ "success": true })),
            },
            Err(err) => Self {
                status: err.status(),
                body: Some(err.to_body()),
            },
        }
    }
}

/// Open cross-origin policy for the public waitlist forms.
pub fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers
}

pub struct SubmissionProxy {
    config: ProxyConfig,
    store: Arc<dyn RecordStore>,
}

impl SubmissionProxy {
    pub fn new(config: ProxyConfig, store: Arc<dyn RecordStore>) -> Self {
        Self { config, store }
    }

    /// Handle one form submission end to end.
    pub async fn handle(&self, method: &Method, body: &[u8]) -> ProxyReply {
        let submission_id = Uuid::new_v4();
        let span = tracing::info_span!("submission", %submission_id, %method);
        self.process(method, body).instrument(span).await.into()
    }

    pub async fn process(&self, method: &Method, body: &[u8]) -> SubmissionResult<Outcome> {
        if *method == Method::OPTIONS {
            return Ok(Outcome::Preflight);
        }
        if *method != Method::POST {
            warn!("Rejected non-POST submission");
            return Err(SubmissionError::MethodNotAllowed);
        }

        let credential = self.config.credential().ok_or_else(|| {
            error!("NOTION_API_KEY is not configured");
            SubmissionError::MissingCredential
        })?;

        let envelope: Value = serde_json::from_slice(body).map_err(|e| {
            warn!(error = %e, "Submission body is not valid JSON");
            SubmissionError::InvalidJson
        })?;
        let envelope = envelope.as_object().ok_or_else(|| {
            warn!("Submission body is not a JSON object");
            SubmissionError::InvalidJson
        })?;

        let kind = envelope
            .get("type")
            .and_then(Value::as_str)
            .and_then(SubmissionType::parse)
            .ok_or_else(|| {
                warn!(submitted_type = ?envelope.get("type"), "Unknown submission type");
                SubmissionError::InvalidType
            })?;

        let collection_id = self.config.collection_id(kind).ok_or_else(|| {
            error!(%kind, "Destination database id is not configured");
            SubmissionError::MissingCollection(kind)
        })?;

        let data = envelope.get("data").unwrap_or(&Value::Null);
        let properties = kind.map(data);

        if let Err(err) = self
            .store
            .create_record(credential, collection_id, &properties)
            .await
        {
            error!(%kind, error = %err, "Notion API error");
            return Err(SubmissionError::Downstream(err));
        }

        info!(%kind, "{} waitlist entry created in Notion", kind);
        Ok(Outcome::Created(kind))
    }
}
