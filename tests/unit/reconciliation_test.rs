// Reconciliation of installment plans against the quote total

use chrono::NaiveDate;
use proptest::prelude::*;
use quoteflow::core::{round_money, AppError, ReconciliationMismatch};
use quoteflow::installments::{Installment, InstallmentEdit, InstallmentPlan, InstallmentPlanner};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn mismatch_of(plan: &InstallmentPlan) -> ReconciliationMismatch {
    match InstallmentPlanner::validate_reconciliation(plan) {
        Err(AppError::Reconciliation(mismatch)) => mismatch,
        other => panic!("expected reconciliation mismatch, got {:?}", other),
    }
}

/// 100.00 / 3 rounds to 33.33 each, which only adds up to 99.99
#[test]
fn test_three_way_split_of_100_does_not_reconcile() {
    let plan = InstallmentPlanner::derive_plan(dec!(100.00), 3, "Fence", start()).unwrap();
    assert!(plan.installments.iter().all(|i| i.amount.to_string() == "33.33"));

    let mismatch = mismatch_of(&plan);
    assert_eq!(mismatch.expected.to_string(), "100.00");
    assert_eq!(mismatch.actual.to_string(), "99.99");
    assert_eq!(mismatch.difference(), dec!(0.01));
}

/// Editing the last row by hand fixes the mismatch
#[test]
fn test_manual_edit_reconciles() {
    let plan = InstallmentPlanner::derive_plan(dec!(100.00), 3, "Fence", start()).unwrap();
    let edit = InstallmentEdit {
        amount: Some("33.34".to_string()),
        ..Default::default()
    };
    let plan = InstallmentPlanner::edit_installment(plan, 2, &edit).unwrap();

    assert!(InstallmentPlanner::validate_reconciliation(&plan).is_ok());
}

#[test]
fn test_validation_does_not_modify_plan() {
    let plan = InstallmentPlanner::derive_plan(dec!(200), 3, "Shed", start()).unwrap();
    let before = plan.clone();
    let _ = InstallmentPlanner::validate_reconciliation(&plan);
    assert_eq!(plan, before);
}

#[test]
fn test_totals_compared_at_two_decimals() {
    // 10.005 rounds half-up to 10.01 on both sides
    let mut plan = InstallmentPlanner::derive_plan(dec!(10.005), 1, "Tip", start()).unwrap();
    assert_eq!(plan.installments[0].amount.to_string(), "10.01");
    assert!(InstallmentPlanner::validate_reconciliation(&plan).is_ok());

    plan.installments[0].amount = dec!(10.004);
    assert!(InstallmentPlanner::validate_reconciliation(&plan).is_err());
}

#[test]
fn test_mismatch_message() {
    let plan = InstallmentPlanner::derive_plan(dec!(100), 3, "Fence", start()).unwrap();
    let error = InstallmentPlanner::validate_reconciliation(&plan).unwrap_err();

    assert!(matches!(error, AppError::Reconciliation(_)));
    assert_eq!(
        error.to_string(),
        "Installment total 99.99 does not match quote total 100.00"
    );
}

/// Client-supplied amounts large enough to overflow the sum are rejected, not a panic
#[test]
fn test_overflowing_amounts_are_rejected() {
    let plan = InstallmentPlan {
        source_total: dec!(100.00),
        job_title: "Fence".to_string(),
        start_date: start(),
        installments: vec![
            Installment::new(Decimal::MAX, start(), "Installment 1 for Fence".to_string()),
            Installment::new(Decimal::MAX, start(), "Installment 2 for Fence".to_string()),
        ],
    };

    let result = InstallmentPlanner::validate_reconciliation(&plan);
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn test_difference_saturates() {
    let mismatch = ReconciliationMismatch {
        expected: Decimal::MAX,
        actual: Decimal::MIN,
    };
    assert_eq!(mismatch.difference(), Decimal::MAX);
}

proptest! {
    /// A derived plan reconciles exactly when count * per-installment == total
    #[test]
    fn prop_reconciles_iff_split_is_exact(
        cents in 0u64..10_000_000u64,
        count in 1usize..24usize,
    ) {
        let total = Decimal::from(cents) / Decimal::from(100);
        let plan = InstallmentPlanner::derive_plan(total, count, "Job", start()).unwrap();

        let per_installment = round_money(total / Decimal::from(count));
        let exact = round_money(total) == per_installment * Decimal::from(count);

        prop_assert_eq!(
            InstallmentPlanner::validate_reconciliation(&plan).is_ok(),
            exact
        );
    }
}
