// Test helpers shared by contract and integration tests
//
// Usage:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;

#![allow(dead_code)]

pub mod fake_finance_api;
pub mod test_data;

pub use fake_finance_api::*;
pub use test_data::*;
