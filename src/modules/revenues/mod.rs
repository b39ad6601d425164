pub mod models;

pub use models::{CreateRevenueRequest, Revenue};
