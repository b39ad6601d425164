use async_trait::async_trait;

use crate::core::Result;
use crate::modules::quotes::models::{Quote, QuoteStatus};
use crate::modules::revenues::models::{CreateRevenueRequest, Revenue};

/// Finance API that owns quotes and revenue records
#[async_trait]
pub trait FinanceApi: Send + Sync {
    /// Fetch a quote by ID
    async fn get_quote(&self, quote_id: &str) -> Result<Quote>;

    /// Create one revenue record
    async fn create_revenue(&self, request: CreateRevenueRequest) -> Result<Revenue>;

    /// Set the status of a quote and return the updated quote
    async fn update_quote_status(&self, quote_id: &str, status: QuoteStatus) -> Result<Quote>;

    /// Get API name for logging
    fn name(&self) -> &str;
}
