mod common;

use common::*;
use httpmock::prelude::*;
use notion_client::NotionClient;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;

/// Full path: router, proxy, mapper and the real HTTP client against a stubbed record store
#[tokio::test]
async fn test_submission_reaches_record_store() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/pages")
                .header("authorization", "Bearer secret_test_key")
                .header("notion-version", "2022-06-28")
                .json_body_partial(
                    r#"{
                        "parent": { "database_id": "client-db-id" },
                        "properties": {
                            "Language": { "select": { "name": "Spanish" } },
                            "Support Type": { "select": { "name": "Coaching" } }
                        }
                    }"#,
                );
            then.status(200).json_body(json!({ "object": "page", "id": "abc" }));
        })
        .await;

    let store = Arc::new(NotionClient::new(&server.base_url()).unwrap());
    let app = TestApp::spawn(TestData::full_config(), store).await;

    let response = app.client().submit("client", TestData::client_submission()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "success": true }));
    mock.assert_async().await;
}

/// A rejected create is reported once with a generic message
#[tokio::test]
async fn test_record_store_rejection_not_relayed() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/pages");
            then.status(404).json_body(json!({
                "object": "error",
                "code": "object_not_found",
                "message": "Could not find database with ID: therapist-db-id."
            }));
        })
        .await;

    let store = Arc::new(NotionClient::new(&server.base_url()).unwrap());
    let app = TestApp::spawn(TestData::full_config(), store).await;

    let response = app
        .client()
        .submit("therapist", TestData::therapist_submission())
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let text = response.text().await.unwrap();
    assert!(!text.contains("object_not_found"));
    assert_eq!(
        serde_json::from_str::<Value>(&text).unwrap(),
        json!({ "error": "Failed to submit to Notion" })
    );
    mock.assert_hits_async(1).await;
}

/// Invalid requests never touch the network
#[tokio::test]
async fn test_invalid_type_makes_no_outbound_call() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/pages");
            then.status(200);
        })
        .await;

    let store = Arc::new(NotionClient::new(&server.base_url()).unwrap());
    let app = TestApp::spawn(TestData::full_config(), store).await;

    let response = app.client().submit("invalid", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    mock.assert_hits_async(0).await;
}

/// An unreachable record store is a generic failure, not a transport error dump
#[tokio::test]
async fn test_unreachable_record_store_is_generic_failure() {
    // Nothing listens on port 9 locally
    let store = Arc::new(NotionClient::new("http://127.0.0.1:9").unwrap());
    let app = TestApp::spawn(TestData::full_config(), store).await;

    let response = app.client().submit("client", TestData::client_submission()).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors_headers(&response);
    let text = response.text().await.unwrap();
    assert!(!text.contains("127.0.0.1"));
    assert!(!text.to_lowercase().contains("connect"));
    assert_eq!(
        serde_json::from_str::<Value>(&text).unwrap(),
        json!({ "error": "Failed to submit to Notion" })
    );
}
