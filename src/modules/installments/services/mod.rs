pub mod installment_planner;

pub use installment_planner::{InstallmentPlanner, MAX_INSTALLMENTS};
