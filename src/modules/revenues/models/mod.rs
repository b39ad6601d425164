pub mod revenue;

pub use revenue::{CreateRevenueRequest, Revenue, SALES_CATEGORY};
