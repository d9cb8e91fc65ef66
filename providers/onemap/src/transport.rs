use async_trait::async_trait;
use reqwest::StatusCode;

/// Base endpoint of the public OneMap API
pub const DEFAULT_BASE_URL: &str = "https://developers.onemap.sg";

const SEARCH_PATH: &str = "commonapi/search";

/// What one exchange with the search endpoint produced
#[derive(Debug, Clone)]
pub enum SearchReply {
    /// 200 with the raw response body
    Body(String),
    /// The endpoint was unreachable or answered with a non-success status;
    /// the description feeds the verification message
    Failed(String),
}

/// Raw access to the OneMap search endpoint
///
/// Split from the verifier so response handling stays testable without a
/// live endpoint.
#[async_trait]
pub trait SearchTransport: Send + Sync {
    async fn search(&self, query: &str) -> SearchReply;
}

/// reqwest-backed transport against the real API
///
/// Holds one client per instance; clones share its connection pool.
#[derive(Clone)]
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SearchTransport for HttpTransport {
    async fn search(&self, query: &str) -> SearchReply {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), SEARCH_PATH);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("returnGeom", "Y"),
                ("getAddrDetails", "Y"),
                ("searchVal", query),
            ])
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => return SearchReply::Failed(e.to_string()),
        };

        let status = response.status();
        if status != StatusCode::OK {
            let description = match status.canonical_reason() {
                Some(reason) => reason.to_string(),
                None => status.to_string(),
            };
            return SearchReply::Failed(description);
        }

        match response.text().await {
            Ok(body) => SearchReply::Body(body),
            Err(e) => SearchReply::Failed(e.to_string()),
        }
    }
}
