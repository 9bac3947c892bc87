use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{errors::SubmissionError, proxy::ProxyReply, AppState};

/// Form submission endpoint used by both waitlist forms.
///
/// Accepts every method so that preflight and method-not-allowed replies
/// come from the proxy with the same CORS headers as everything else.
pub async fn handler(
    State(state): State<AppState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    match body {
        Ok(body) => state.proxy.handle(&method, &body).await.into_response(),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Failed to read submission body");
            let err = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                SubmissionError::PayloadTooLarge
            } else {
                SubmissionError::InvalidJson
            };
            ProxyReply::from(Err(err)).into_response()
        }
    }
}

impl IntoResponse for ProxyReply {
    fn into_response(self) -> Response {
        let headers = self.headers();

        let mut resp = match self.body {
            Some(body) => (self.status, Json(body)).into_response(),
            None => self.status.into_response(),
        };

        let headers_mut = resp.headers_mut();
        for (key, value) in headers.iter() {
            headers_mut.insert(key, value.clone());
        }

        resp
    }
}
