use anyhow::Result;
use std::fmt;
use waitlist_records::SubmissionType;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub environment: String,
    pub notion_api_url: String,
    pub proxy: ProxyConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            notion_api_url: std::env::var("NOTION_API_URL")
                .unwrap_or_else(|_| notion_client::DEFAULT_API_URL.to_string()),
            proxy: ProxyConfig::from_env(),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

/// Credential and destination ids for the record store.
///
/// Every field is optional on purpose: a gap is reported to the caller of the
/// submission that needs it, not at startup.
#[derive(Clone, Default)]
pub struct ProxyConfig {
    pub notion_api_key: Option<String>,
    pub client_database_id: Option<String>,
    pub therapist_database_id: Option<String>,
}

impl ProxyConfig {
    pub fn from_env() -> Self {
        Self {
            notion_api_key: non_empty_var("NOTION_API_KEY"),
            client_database_id: non_empty_var("NOTION_CLIENT_DB_ID"),
            therapist_database_id: non_empty_var("NOTION_THERAPIST_DB_ID"),
        }
    }

    pub fn credential(&self) -> Option<&str> {
        self.notion_api_key.as_deref()
    }

    pub fn collection_id(&self, kind: SubmissionType) -> Option<&str> {
        match kind {
            SubmissionType::Client => self.client_database_id.as_deref(),
            SubmissionType::Therapist => self.therapist_database_id.as_deref(),
        }
    }

    /// Names of the environment variables that were not provided.
    pub fn missing_settings(&self) -> Vec<&'static str> {
        [
            ("NOTION_API_KEY", self.notion_api_key.is_none()),
            ("NOTION_CLIENT_DB_ID", self.client_database_id.is_none()),
            ("NOTION_THERAPIST_DB_ID", self.therapist_database_id.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }
}

impl fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyConfig")
            .field(
                "notion_api_key",
                &self.notion_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("client_database_id", &self.client_database_id)
            .field("therapist_database_id", &self.therapist_database_id)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
