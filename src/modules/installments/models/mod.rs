pub mod installment_plan;

pub use installment_plan::{Installment, InstallmentEdit, InstallmentPlan, DATE_FORMAT};
