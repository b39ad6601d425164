pub mod conversion_report;
pub mod quote;

pub use conversion_report::{ConversionReport, InstallmentOutcome, QuoteUpdateOutcome};
pub use quote::{Quote, QuoteStatus, QuoteStatusUpdate};
