//! PostgREST Source
//!
//! [`RecordSource`] over the hosted REST interface of the table store.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;

use crate::config::BackendConfig;
use crate::error::{FetchError, FetchResult};
use crate::query::ScopedQuery;
use crate::record::Record;
use crate::source::RecordSource;

/// Error body returned by the service
#[derive(Debug, Deserialize)]
struct RemoteErrorBody {
    message: Option<String>,
}

/// HTTP client for `GET /rest/v1/{table}` reads
#[derive(Debug, Clone)]
pub struct PostgrestSource {
    http: reqwest::Client,
    backend: Option<BackendConfig>,
}

impl PostgrestSource {
    pub fn new(backend: Option<BackendConfig>) -> Self {
        Self {
            http: reqwest::Client::new(),
            backend,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    /// The full request for a query, without sending it
    pub fn build_request(&self, query: &ScopedQuery) -> FetchResult<reqwest::Request> {
        let backend = self.backend.as_ref().ok_or(FetchError::NotConfigured)?;
        self.http
            .get(backend.table_url(query.collection().table()))
            .query(&query.params())
            .header("apikey", backend.anon_key.as_str())
            .header(AUTHORIZATION, format!("Bearer {}", backend.anon_key))
            .header(ACCEPT, "application/json")
            .build()
            .map_err(|e| FetchError::InvalidQuery(e.to_string()))
    }
}

#[async_trait(?Send)]
impl RecordSource for PostgrestSource {
    async fn fetch<R: Record>(&self, query: &ScopedQuery) -> FetchResult<Vec<R>> {
        let request = self.build_request(query)?;
        tracing::debug!(url = %request.url(), "fetching rows");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(FetchError::Remote {
                status: status.as_u16(),
                message: remote_message(&body, status.canonical_reason()),
            });
        }
        decode_rows(&body)
    }
}

/// The whole body must decode; one bad row fails the fetch.
pub fn decode_rows<R: Record>(body: &str) -> FetchResult<Vec<R>> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

fn remote_message(body: &str, reason: Option<&str>) -> String {
    if let Ok(RemoteErrorBody { message: Some(message) }) = serde_json::from_str::<RemoteErrorBody>(body) {
        return message;
    }
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    reason.unwrap_or("request failed").to_string()
}
