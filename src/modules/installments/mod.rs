pub mod controllers;
pub mod models;
pub mod services;

pub use models::{Installment, InstallmentEdit, InstallmentPlan};
pub use services::{InstallmentPlanner, MAX_INSTALLMENTS};
