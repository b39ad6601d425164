pub mod finance_api_trait;
pub mod http_finance_api;

pub use finance_api_trait::FinanceApi;
pub use http_finance_api::HttpFinanceApi;
