use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{parse_amount, AppError, Result};

/// Date format used on the wire and for revenue dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One scheduled partial payment of a quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    /// Exact decimal amount, serialized as text
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub description: String,
}

impl Installment {
    pub fn new(amount: Decimal, due_date: NaiveDate, description: String) -> Self {
        Self {
            amount,
            due_date,
            description,
        }
    }

    /// Replace the amount with a user-entered value
    ///
    /// The text must parse as a decimal greater than zero. On error the
    /// installment is left untouched.
    pub fn set_amount_from_str(&mut self, input: &str) -> Result<()> {
        let amount = parse_amount(input)?;
        if amount <= Decimal::ZERO {
            return Err(AppError::validation("Installment amount must be positive"));
        }
        self.amount = amount;
        Ok(())
    }

    /// Due date as `YYYY-MM-DD`
    pub fn due_date_string(&self) -> String {
        self.due_date.format(DATE_FORMAT).to_string()
    }
}

/// Transient split of a quote total into ordered installments
///
/// Order matters: index `i` drives the default due date (`start_date + i`
/// months) and default description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentPlan {
    /// Quote total, fixed when the plan is derived
    pub source_total: Decimal,
    pub job_title: String,
    pub start_date: NaiveDate,
    pub installments: Vec<Installment>,
}

impl InstallmentPlan {
    pub fn len(&self) -> usize {
        self.installments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installments.is_empty()
    }

    /// Unrounded sum of all installment amounts
    ///
    /// Amounts come from the client, so a sum beyond `Decimal::MAX` is a
    /// validation error rather than a panic.
    pub fn installment_total(&self) -> Result<Decimal> {
        self.installments
            .iter()
            .try_fold(Decimal::ZERO, |total, i| total.checked_add(i.amount))
            .ok_or_else(|| AppError::validation("Installment total is out of range"))
    }
}

/// User changes to a single installment row
///
/// Absent fields are left as they are.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentEdit {
    /// Amount as typed by the user
    pub amount: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub description: Option<String>,
}
