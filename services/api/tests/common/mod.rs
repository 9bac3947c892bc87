#![allow(dead_code)]

use async_trait::async_trait;
use notion_client::{NotionError, RecordStore};
use reqwest::{Client, Method};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use waitlist_proxy_api::{app, config::ProxyConfig, AppState};
use waitlist_records::Properties;

pub const PROXY_PATH: &str = "/api/notion-proxy";

/// One create call as the record store saw it
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub credential: String,
    pub collection_id: String,
    pub properties: Value,
}

/// In-memory record store that remembers every call and can be told to fail
#[derive(Default)]
pub struct RecordingStore {
    calls: Mutex<Vec<RecordedCall>>,
    failure: Option<(u16, String)>,
}

impl RecordingStore {
    pub fn failing(status: u16, body: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some((status, body.to_string())),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordStore for RecordingStore {
    async fn create_record(
        &self,
        credential: &str,
        collection_id: &str,
        properties: &Properties,
    ) -> Result<(), NotionError> {
        self.calls.lock().unwrap().push(RecordedCall {
            credential: credential.to_string(),
            collection_id: collection_id.to_string(),
            properties: serde_json::to_value(properties).unwrap(),
        });

        match &self.failure {
            Some((status, body)) => Err(NotionError::Api {
                status: *status,
                body: body.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// The real router served on an ephemeral local port
pub struct TestApp {
    pub base_url: String,
}

impl TestApp {
    pub async fn spawn(config: ProxyConfig, store: Arc<dyn RecordStore>) -> Self {
        let state = AppState::with_store(config, store);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app(state)).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
        }
    }

    pub fn client(&self) -> TestClient {
        TestClient::new(&self.base_url)
    }
}

/// Test client wrapper with convenience methods
pub struct TestClient {
    client: Client,
    base_url: String,
}

impl TestClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Submit a form payload and return the raw response
    pub async fn submit(&self, kind: &str, data: Value) -> reqwest::Response {
        self.client
            .post(self.url(PROXY_PATH))
            .json(&json!({ "type": kind, "data": data }))
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn submit_raw(&self, body: &str) -> reqwest::Response {
        self.client
            .post(self.url(PROXY_PATH))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn request(&self, method: Method, path: &str) -> reqwest::Response {
        self.client
            .request(method, self.url(path))
            .send()
            .await
            .expect("Failed to send request")
    }
}

/// Test data generators
pub struct TestData;

impl TestData {
    pub fn full_config() -> ProxyConfig {
        ProxyConfig {
            notion_api_key: Some("secret_test_key".to_string()),
            client_database_id: Some("client-db-id".to_string()),
            therapist_database_id: Some("therapist-db-id".to_string()),
        }
    }

    pub fn client_submission() -> Value {
        json!({
            "firstName": "Jane",
            "email": "jane@x.com",
            "language": "Spanish",
            "supportType": "Coaching"
        })
    }

    pub fn therapist_submission() -> Value {
        json!({
            "name": "Dr. A",
            "email": "a@x.com",
            "licenseType": "LCSW",
            "statesLicensed": "CA"
        })
    }
}

pub fn assert_cors_headers(response: &reqwest::Response) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "POST, OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
}
