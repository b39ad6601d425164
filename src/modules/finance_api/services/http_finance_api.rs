use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::finance_api_trait::FinanceApi;
use crate::core::{AppError, Result};
use crate::modules::quotes::models::{Quote, QuoteStatus, QuoteStatusUpdate};
use crate::modules::revenues::models::{CreateRevenueRequest, Revenue};

/// JSON-over-HTTP client for the finance API
///
/// No retries and no timeout policy: a failed call is reported once to the
/// caller.
pub struct HttpFinanceApi {
    client: Client,
    base_url: String,
}

impl HttpFinanceApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL extended by `segments`, each percent-encoded as a single
    /// path segment (`/`, `?` and `#` in an id cannot change the route)
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            AppError::Configuration(format!("Invalid finance API URL {}: {}", self.base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                AppError::Configuration(format!(
                    "Finance API URL {} cannot have a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn quote_url(&self, quote_id: &str, rest: &[&str]) -> Result<Url> {
        if quote_id.is_empty() || quote_id == "." || quote_id == ".." {
            return Err(AppError::validation(format!("Invalid quote id '{}'", quote_id)));
        }
        let mut segments = vec!["quotes", quote_id];
        segments.extend_from_slice(rest);
        self.url(&segments)
    }

    /// Decode a success body, or turn the status and body into an error
    async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::not_found(what.to_string()));
        }

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(AppError::upstream(format!(
                "Finance API error {} for {}: {}",
                status, what, error_body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::upstream(format!("Failed to parse {}: {}", what, e)))
    }
}

#[async_trait]
impl FinanceApi for HttpFinanceApi {
    async fn get_quote(&self, quote_id: &str) -> Result<Quote> {
        let url = self.quote_url(quote_id, &[])?;
        debug!(url = url.as_str(), "Fetching quote");

        let response = self.client.get(url).send().await?;
        Self::read_json(response, &format!("quote {}", quote_id)).await
    }

    async fn create_revenue(&self, request: CreateRevenueRequest) -> Result<Revenue> {
        let url = self.url(&["revenues"])?;
        debug!(
            quote_id = request.quote_id.as_str(),
            amount = %request.amount,
            date = request.date.as_str(),
            "Creating revenue"
        );

        let response = self.client.post(url).json(&request).send().await?;
        Self::read_json(response, "revenue").await
    }

    async fn update_quote_status(&self, quote_id: &str, status: QuoteStatus) -> Result<Quote> {
        let url = self.quote_url(quote_id, &["status"])?;
        debug!(quote_id = quote_id, status = %status, "Updating quote status");

        let response = self
            .client
            .patch(url)
            .json(&QuoteStatusUpdate { status })
            .send()
            .await?;
        Self::read_json(response, &format!("quote {}", quote_id)).await
    }

    fn name(&self) -> &str {
        "finance-api"
    }
}
