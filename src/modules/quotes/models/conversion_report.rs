use serde::Serialize;

use crate::modules::quotes::models::Quote;
use crate::modules::revenues::models::Revenue;

/// Result of creating the revenue for one installment
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum InstallmentOutcome {
    Created { index: usize, revenue: Revenue },
    Failed { index: usize, error: String },
}

impl InstallmentOutcome {
    /// Position of the installment in the submitted plan
    pub fn index(&self) -> usize {
        match self {
            Self::Created { index, .. } | Self::Failed { index, .. } => *index,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}

/// Result of flipping the quote to `Converted`
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum QuoteUpdateOutcome {
    Converted { quote: Quote },
    Failed { error: String },
}

/// Everything a conversion attempted, success or not
///
/// Nothing is rolled back: a report with failures describes a partially
/// converted quote.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReport {
    pub quote_id: String,
    /// One entry per installment, in plan order
    pub installments: Vec<InstallmentOutcome>,
    pub quote_update: QuoteUpdateOutcome,
}

impl ConversionReport {
    /// Revenues that were created
    pub fn persisted(&self) -> Vec<&Revenue> {
        self.installments
            .iter()
            .filter_map(|outcome| match outcome {
                InstallmentOutcome::Created { revenue, .. } => Some(revenue),
                InstallmentOutcome::Failed { .. } => None,
            })
            .collect()
    }

    /// `(index, error)` of every installment whose revenue was not created
    pub fn failures(&self) -> Vec<(usize, &str)> {
        self.installments
            .iter()
            .filter_map(|outcome| match outcome {
                InstallmentOutcome::Failed { index, error } => Some((*index, error.as_str())),
                InstallmentOutcome::Created { .. } => None,
            })
            .collect()
    }

    pub fn quote_converted(&self) -> bool {
        matches!(self.quote_update, QuoteUpdateOutcome::Converted { .. })
    }

    /// All revenues created and the quote marked converted
    pub fn is_complete(&self) -> bool {
        self.quote_converted() && self.installments.iter().all(InstallmentOutcome::is_created)
    }
}
