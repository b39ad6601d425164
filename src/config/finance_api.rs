use crate::core::{AppError, DisplayCurrency, Result};
use crate::modules::finance_api::HttpFinanceApi;
use serde::Deserialize;
use std::env;

/// Connection to the finance API that stores quotes and revenues
#[derive(Debug, Clone, Deserialize)]
pub struct FinanceApiConfig {
    pub base_url: String,
    /// Currency label stamped on created revenues unless a request overrides it
    pub display_currency: String,
}

impl FinanceApiConfig {
    pub fn from_env() -> Result<Self> {
        Ok(FinanceApiConfig {
            base_url: env::var("FINANCE_API_URL")
                .map_err(|_| AppError::Configuration("FINANCE_API_URL not set".to_string()))?,
            display_currency: env::var("DISPLAY_CURRENCY").unwrap_or_else(|_| "USD".to_string()),
        })
    }

    pub fn display_currency(&self) -> Result<DisplayCurrency> {
        DisplayCurrency::new(self.display_currency.clone())
            .map_err(|e| AppError::Configuration(format!("Invalid DISPLAY_CURRENCY: {}", e)))
    }

    /// Create the HTTP client for the finance API
    pub fn create_client(&self) -> Result<HttpFinanceApi> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(HttpFinanceApi::with_client(client, self.base_url.clone()))
    }
}
