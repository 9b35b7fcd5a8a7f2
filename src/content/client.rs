use super::records::Collection;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

const ENDPOINT_VAR: &str = "VITALSENSE_CMS_ENDPOINT";
const API_KEY_VAR: &str = "VITALSENSE_CMS_API_KEY";

// ============================================
// Error Types
// ============================================

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("CMS error {status}: {body}")]
    Endpoint { status: StatusCode, body: String },
}

pub type FetchResult<T> = Result<T, FetchError>;

// ============================================
// Page Window Contract
// ============================================

/// A fixed-size, offset-addressed slice of a collection. Windows are
/// requested in increasing contiguous offsets (0, limit, 2*limit, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub skip: usize,
    pub limit: usize,
}

/// One fetched window. `has_next` is the collaborator's own flag and is
/// trusted as reported, never inferred from `items.len()`.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<R> {
    pub items: Vec<R>,
    pub has_next: bool,
}

/// The CRUD collaborator: fetch one window of a collection.
#[async_trait]
pub trait RecordSource<R>: Send + Sync {
    async fn fetch_page(&self, window: PageWindow) -> FetchResult<Page<R>>;
}

/// One-shot fetch of the first `count` records of a collection, for
/// surfaces that show a fixed-size highlight strip without pagination.
pub async fn fetch_leading<R>(source: &dyn RecordSource<R>, count: usize) -> FetchResult<Vec<R>> {
    let page = source.fetch_page(PageWindow { skip: 0, limit: count }).await?;
    Ok(page.items)
}

// ============================================
// Hosted CMS Client
// ============================================

#[derive(Serialize)]
struct QueryRequest<'a> {
    filter: &'a [serde_json::Value],
    limit: usize,
    skip: usize,
}

#[derive(Deserialize)]
struct QueryResponse<R> {
    items: Vec<R>,
    #[serde(rename = "hasNext")]
    has_next: bool,
}

/// HTTP client for the hosted CMS query endpoint.
pub struct CmsClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl CmsClient {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key,
        }
    }

    /// Create a client from environment configuration.
    pub fn from_env() -> Result<Self> {
        let Ok(endpoint) = std::env::var(ENDPOINT_VAR) else {
            anyhow::bail!("No CMS configured. Set {ENDPOINT_VAR} to the hosted CMS base URL.");
        };
        let api_key = std::env::var(API_KEY_VAR).ok();
        Ok(Self::new(endpoint, api_key))
    }

    fn query_url(&self, collection: &str) -> String {
        format!("{}/collections/{}/query", self.endpoint.trim_end_matches('/'), collection)
    }
}

#[async_trait]
impl<R: Collection> RecordSource<R> for CmsClient {
    async fn fetch_page(&self, window: PageWindow) -> FetchResult<Page<R>> {
        let mut req = self.client.post(self.query_url(R::ID)).json(&QueryRequest {
            filter: &[],
            limit: window.limit,
            skip: window.skip,
        });
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }

        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            let parsed: QueryResponse<R> = serde_json::from_str(&body)?;
            Ok(Page {
                items: parsed.items,
                has_next: parsed.has_next,
            })
        } else {
            Err(FetchError::Endpoint { status, body })
        }
    }
}
