pub mod conversion_controller;

pub use conversion_controller::convert_quote;
