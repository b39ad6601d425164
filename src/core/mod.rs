pub mod error;
pub mod money;

pub use error::{AppError, ReconciliationMismatch, Result};
pub use money::{format_money, parse_amount, round_money, DisplayCurrency};
