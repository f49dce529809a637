//! HTTP-backed result store speaking the `/api/test-results` contract.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;

use crate::models::{NewTestResult, TestResultRecord, TestResultsListResponse};

use super::{ResultStore, StoreError};

/// Error body shape returned by the API server.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[allow(dead_code)]
    error: String,
    message: String,
}

/// Result store backed by the CFU monitor API server.
#[derive(Debug, Clone)]
pub struct HttpResultStore {
    base_url: String,
    client: Client,
}

impl HttpResultStore {
    /// Create a store for a server base URL, e.g. `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    fn results_url(&self) -> String {
        format!("{}/api/test-results", self.base_url)
    }

    /// Turn a non-success response into `StoreError::Api`, preferring the
    /// server's structured message over the raw body.
    async fn check(response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|parsed| parsed.message)
            .unwrap_or(body);
        Err(StoreError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ResultStore for HttpResultStore {
    async fn list_results(&self) -> Result<Vec<TestResultRecord>, StoreError> {
        let response = self.client.get(self.results_url()).send().await?;
        let response = Self::check(response).await?;
        let body: TestResultsListResponse = response.json().await?;
        Ok(body.data)
    }

    async fn create_result(&self, new: &NewTestResult) -> Result<TestResultRecord, StoreError> {
        let response = self.client.post(self.results_url()).json(new).send().await?;
        let response = Self::check(response).await?;
        let record: TestResultRecord = response.json().await?;
        Ok(record)
    }
}
