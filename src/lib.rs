//! Quote-to-revenue installment service
//!
//! Splits accepted quotes into installment plans, reconciles them against the
//! quoted total and converts them into revenue records through the finance API.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::finance_api;
pub use modules::installments;
pub use modules::quotes;
pub use modules::revenues;
