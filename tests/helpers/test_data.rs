// Test data factory

use chrono::NaiveDate;
use quoteflow::core::DisplayCurrency;
use quoteflow::quotes::{Quote, QuoteStatus};
use rust_decimal::Decimal;

pub struct TestDataFactory;

impl TestDataFactory {
    pub fn quote(id: &str, total: Decimal, status: QuoteStatus) -> Quote {
        Quote {
            id: id.to_string(),
            client_id: "client-42".to_string(),
            job_title: "Website redesign".to_string(),
            total_amount: total,
            status,
        }
    }

    pub fn accepted_quote(total: Decimal) -> Quote {
        Self::quote("quote-1", total, QuoteStatus::Accepted)
    }

    pub fn currency() -> DisplayCurrency {
        DisplayCurrency::new("USD").unwrap()
    }

    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}
