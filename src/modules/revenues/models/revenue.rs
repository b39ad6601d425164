use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::DisplayCurrency;
use crate::modules::installments::models::Installment;
use crate::modules::quotes::models::Quote;

/// Category stamped on every revenue created from a quote
pub const SALES_CATEGORY: &str = "Sales";

/// Income entry persisted by the finance API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Revenue {
    pub id: String,
    pub client_id: String,
    pub amount: Decimal,
    /// `YYYY-MM-DD`
    pub date: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub account: Option<String>,
    pub currency: String,
    #[serde(default)]
    pub due_date: Option<String>,
    pub is_paid: bool,
    #[serde(default)]
    pub quote_id: Option<String>,
}

/// Body of the revenue creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRevenueRequest {
    pub client_id: String,
    pub amount: Decimal,
    pub date: String,
    pub description: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    pub currency: String,
    pub due_date: String,
    pub is_paid: bool,
    pub quote_id: String,
}

impl CreateRevenueRequest {
    /// Unpaid sales revenue for one installment of `quote`
    pub fn for_installment(
        quote: &Quote,
        installment: &Installment,
        currency: &DisplayCurrency,
    ) -> Self {
        let date = installment.due_date_string();
        Self {
            client_id: quote.client_id.clone(),
            amount: installment.amount,
            date: date.clone(),
            description: installment.description.clone(),
            category: SALES_CATEGORY.to_string(),
            account: None,
            currency: currency.as_str().to_string(),
            due_date: date,
            is_paid: false,
            quote_id: quote.id.clone(),
        }
    }
}
