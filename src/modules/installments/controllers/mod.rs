pub mod installment_controller;

pub use installment_controller::{derive_plan, edit_installment, resize_plan, validate_plan};
