pub mod services;

pub use services::{FinanceApi, HttpFinanceApi};
