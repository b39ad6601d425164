use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::core::{format_money, round_money, AppError, ReconciliationMismatch, Result};
use crate::modules::installments::models::{Installment, InstallmentEdit, InstallmentPlan};

/// Derives, reshapes and reconciles installment plans for quote conversion
///
/// All operations are pure and synchronous. Amounts are split evenly and
/// rounded half-up to two decimals; the rounding remainder is NOT pushed onto
/// any installment, so a fresh plan can fail reconciliation (100.00 / 3).
pub struct InstallmentPlanner;

/// Largest installment count a plan may have (ten years of monthly payments)
pub const MAX_INSTALLMENTS: usize = 120;

impl InstallmentPlanner {
    /// Split `total` into `count` equal installments
    ///
    /// # Arguments
    /// * `total` - Quote total, zero allowed
    /// * `count` - Number of installments, 1 to `MAX_INSTALLMENTS`
    /// * `job_title` - Quote job title used in default descriptions
    /// * `start_date` - Due date of the first installment
    ///
    /// # Returns
    /// Plan whose installment `i` is due `start_date + i` months
    pub fn derive_plan(
        total: Decimal,
        count: usize,
        job_title: &str,
        start_date: NaiveDate,
    ) -> Result<InstallmentPlan> {
        Self::ensure_count(count)?;
        if total < Decimal::ZERO {
            return Err(AppError::validation("Quote total cannot be negative"));
        }

        let amount = Self::base_amount(total, count);
        let mut installments = Vec::with_capacity(count);
        for index in 0..count {
            installments.push(Installment::new(
                amount,
                Self::due_date(start_date, index)?,
                Self::default_description(index, count, job_title),
            ));
        }

        debug!(
            total = %total,
            installment_count = count,
            amount = %amount,
            "Derived installment plan"
        );

        Ok(InstallmentPlan {
            source_total: total,
            job_title: job_title.to_string(),
            start_date,
            installments,
        })
    }

    /// Grow the plan to `new_count` installments
    ///
    /// Existing rows are kept exactly as they are, including amounts that no
    /// longer match `total / new_count`. Only the appended rows get the amount
    /// for the new count.
    pub fn append_installments(mut plan: InstallmentPlan, new_count: usize) -> Result<InstallmentPlan> {
        Self::ensure_count(new_count)?;
        let current = plan.len();
        if new_count <= current {
            return Err(AppError::validation(format!(
                "Cannot append: plan already has {} installments, requested {}",
                current, new_count
            )));
        }

        let amount = Self::base_amount(plan.source_total, new_count);
        for index in current..new_count {
            let installment = Installment::new(
                amount,
                Self::due_date(plan.start_date, index)?,
                Self::default_description(index, new_count, &plan.job_title),
            );
            plan.installments.push(installment);
        }

        debug!(
            from = current,
            to = new_count,
            appended_amount = %amount,
            "Appended installments"
        );

        Ok(plan)
    }

    /// Shrink the plan to `new_count` installments
    ///
    /// Trailing rows are dropped and every surviving row gets the amount for
    /// the new count. Due dates and descriptions of survivors are kept.
    pub fn recompute_and_truncate(
        mut plan: InstallmentPlan,
        new_count: usize,
    ) -> Result<InstallmentPlan> {
        Self::ensure_count(new_count)?;
        let current = plan.len();
        if new_count > current {
            return Err(AppError::validation(format!(
                "Cannot truncate: plan has {} installments, requested {}",
                current, new_count
            )));
        }

        plan.installments.truncate(new_count);
        let amount = Self::base_amount(plan.source_total, new_count);
        for installment in plan.installments.iter_mut() {
            installment.amount = amount;
        }

        debug!(
            from = current,
            to = new_count,
            amount = %amount,
            "Truncated installments and recomputed amounts"
        );

        Ok(plan)
    }

    /// Change the installment count
    ///
    /// Growing appends (old amounts kept), shrinking truncates and recomputes
    /// every amount, an unchanged count returns the plan as is. Growing and
    /// then shrinking back is therefore not guaranteed to restore the
    /// original amounts.
    pub fn resize_plan(plan: InstallmentPlan, new_count: usize) -> Result<InstallmentPlan> {
        Self::ensure_count(new_count)?;

        match new_count.cmp(&plan.len()) {
            std::cmp::Ordering::Greater => Self::append_installments(plan, new_count),
            std::cmp::Ordering::Less => Self::recompute_and_truncate(plan, new_count),
            std::cmp::Ordering::Equal => Ok(plan),
        }
    }

    /// Apply a user edit to the installment at `index` (0-based)
    ///
    /// Does not reconcile; call `validate_reconciliation` before submitting.
    pub fn edit_installment(
        mut plan: InstallmentPlan,
        index: usize,
        edit: &InstallmentEdit,
    ) -> Result<InstallmentPlan> {
        let count = plan.len();
        let installment = plan.installments.get_mut(index).ok_or_else(|| {
            AppError::validation(format!(
                "Installment index {} out of range (plan has {})",
                index, count
            ))
        })?;

        if let Some(ref amount) = edit.amount {
            installment.set_amount_from_str(amount)?;
        }
        if let Some(due_date) = edit.due_date {
            installment.due_date = due_date;
        }
        if let Some(ref description) = edit.description {
            installment.description = description.clone();
        }

        Ok(plan)
    }

    /// Check that the installments add back up to the source total
    ///
    /// Both sides are rounded to two decimals and compared in their fixed
    /// text form. The plan is never modified. Fails with
    /// `AppError::Reconciliation` (carrying both totals) on a mismatch,
    /// and `AppError::Validation` when the amounts cannot be summed.
    pub fn validate_reconciliation(plan: &InstallmentPlan) -> Result<()> {
        let expected = round_money(plan.source_total);
        let actual = round_money(plan.installment_total()?);

        if format_money(actual) != format_money(expected) {
            warn!(
                expected = %expected,
                actual = %actual,
                installment_count = plan.len(),
                "Installment plan does not reconcile"
            );
            return Err(ReconciliationMismatch { expected, actual }.into());
        }

        Ok(())
    }

    /// Default description for installment `index` of a `count`-way split
    pub fn default_description(index: usize, count: usize, job_title: &str) -> String {
        if count == 1 {
            format!("Payment for {}", job_title)
        } else {
            format!("Installment {} for {}", index + 1, job_title)
        }
    }

    fn base_amount(total: Decimal, count: usize) -> Decimal {
        round_money(total / Decimal::from(count))
    }

    /// `start_date + index` months; overflowing days clamp to the month end
    /// (Jan 31 + 1 month = Feb 28/29)
    fn due_date(start_date: NaiveDate, index: usize) -> Result<NaiveDate> {
        u32::try_from(index)
            .ok()
            .and_then(|months| start_date.checked_add_months(Months::new(months)))
            .ok_or_else(|| AppError::validation("Failed to calculate due date"))
    }

    fn ensure_count(count: usize) -> Result<()> {
        if count == 0 {
            return Err(AppError::validation(
                "Installment count must be at least 1",
            ));
        }
        if count > MAX_INSTALLMENTS {
            return Err(AppError::validation(format!(
                "Installment count cannot exceed {}, requested {}",
                MAX_INSTALLMENTS, count
            )));
        }
        Ok(())
    }
}
