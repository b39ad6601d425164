pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::convert_quote;
pub use models::{ConversionReport, Quote, QuoteStatus};
pub use services::QuoteConversionService;
