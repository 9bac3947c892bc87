use async_trait::async_trait;
use serde::Serialize;
use url::Url;
use waitlist_records::Properties;

pub const DEFAULT_API_URL: &str = "https://api.notion.com";
pub const NOTION_VERSION: &str = "2022-06-28";

#[derive(Debug, thiserror::Error)]
pub enum NotionError {
    #[error("Notion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Notion API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid Notion API url: {0}")]
    Url(#[from] url::ParseError),
}

/// Destination for mapped submissions. One call creates one record.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn create_record(
        &self,
        credential: &str,
        collection_id: &str,
        properties: &Properties,
    ) -> Result<(), NotionError>;
}

#[derive(Debug, Serialize)]
struct CreatePageRequest<'a> {
    parent: Parent<'a>,
    properties: &'a Properties,
}

#[derive(Debug, Serialize)]
struct Parent<'a> {
    database_id: &'a str,
}

#[derive(Debug, Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    pages_url: Url,
}

impl NotionClient {
    pub fn new(base_url: &str) -> Result<Self, NotionError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// `base_url` may carry a path prefix; the pages endpoint is resolved below it.
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, NotionError> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let pages_url = base.join("v1/pages")?;
        Ok(Self { http, pages_url })
    }

    pub fn pages_url(&self) -> &Url {
        &self.pages_url
    }
}

#[async_trait]
impl RecordStore for NotionClient {
    async fn create_record(
        &self,
        credential: &str,
        collection_id: &str,
        properties: &Properties,
    ) -> Result<(), NotionError> {
        let payload = CreatePageRequest {
            parent: Parent {
                database_id: collection_id,
            },
            properties,
        };

        let response = self
            .http
            .post(self.pages_url.clone())
            .bearer_auth(credential)
            .header("Notion-Version", NOTION_VERSION)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(database_id = collection_id, "Notion page created");
        Ok(())
    }
}
