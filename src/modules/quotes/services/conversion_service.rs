// Quote-to-revenue conversion
//
// Submits a reconciled installment plan as revenue records, then marks the
// quote converted. The plan must have been derived from the quote's total.
// Revenue creation is a best-effort concurrent batch:
// - every installment gets exactly one attempt, no retries
// - failures are collected per installment, nothing is rolled back
// - the status update is issued even when some revenues failed

use futures_util::future::join_all;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::core::{format_money, round_money, AppError, DisplayCurrency, Result};
use crate::modules::finance_api::FinanceApi;
use crate::modules::installments::{InstallmentPlan, InstallmentPlanner};
use crate::modules::quotes::models::{
    ConversionReport, InstallmentOutcome, Quote, QuoteStatus, QuoteUpdateOutcome,
};
use crate::modules::revenues::models::CreateRevenueRequest;

/// Service converting quotes into scheduled revenue
#[derive(Clone)]
pub struct QuoteConversionService {
    api: Arc<dyn FinanceApi>,
}

impl QuoteConversionService {
    pub fn new(api: Arc<dyn FinanceApi>) -> Self {
        Self { api }
    }

    /// Load the quote a plan will be submitted against
    pub async fn load_quote(&self, quote_id: &str) -> Result<Quote> {
        self.api.get_quote(quote_id).await
    }

    /// Submit `plan` for `quote`
    ///
    /// # Arguments
    /// * `plan` - Installment plan derived from this quote's total, must
    ///   reconcile with it
    /// * `quote` - Quote the revenues are attached to
    /// * `currency` - Display currency stamped on each revenue
    ///
    /// # Returns
    /// * `Err(AppError::Validation)` when the plan was derived from a different
    ///   total than the quote's
    /// * `Err(AppError::Reconciliation)` when the plan does not add up
    ///
    /// No request is sent when either check fails.
    /// * `Ok(ConversionReport)` otherwise, describing each attempted call
    ///
    /// The quote status is not checked: Declined or already Converted quotes
    /// are converted again, with a warning.
    pub async fn submit_plan(
        &self,
        plan: &InstallmentPlan,
        quote: &Quote,
        currency: &DisplayCurrency,
    ) -> Result<ConversionReport> {
        let plan_total = round_money(plan.source_total);
        let quote_total = round_money(quote.total_amount);
        if plan_total != quote_total {
            warn!(
                quote_id = quote.id.as_str(),
                plan_total = %plan_total,
                quote_total = %quote_total,
                "Plan total does not match quote total"
            );
            return Err(AppError::validation(format!(
                "Plan total {} does not match quote total {}",
                format_money(plan_total),
                format_money(quote_total)
            )));
        }
        InstallmentPlanner::validate_reconciliation(plan)?;

        if !quote.status.is_convertible() {
            warn!(
                quote_id = quote.id.as_str(),
                status = %quote.status,
                "Converting quote that is not pending or accepted"
            );
        }

        info!(
            quote_id = quote.id.as_str(),
            installment_count = plan.len(),
            total = %plan.source_total,
            currency = currency.as_str(),
            api = self.api.name(),
            "Submitting installment plan"
        );

        let installments = self.create_revenues(plan, quote, currency).await;
        let failed = installments.iter().filter(|o| !o.is_created()).count();
        if failed > 0 {
            warn!(
                quote_id = quote.id.as_str(),
                failed,
                attempted = installments.len(),
                "Some revenues were not created; continuing with status update"
            );
        }

        let quote_update = match self
            .api
            .update_quote_status(&quote.id, QuoteStatus::Converted)
            .await
        {
            Ok(updated) => QuoteUpdateOutcome::Converted { quote: updated },
            Err(e) => {
                error!(
                    quote_id = quote.id.as_str(),
                    error = %e,
                    "Failed to mark quote as converted"
                );
                QuoteUpdateOutcome::Failed {
                    error: e.to_string(),
                }
            }
        };

        let report = ConversionReport {
            quote_id: quote.id.clone(),
            installments,
            quote_update,
        };

        info!(
            quote_id = quote.id.as_str(),
            created = report.persisted().len(),
            failed = report.failures().len(),
            quote_converted = report.quote_converted(),
            "Quote conversion finished"
        );

        Ok(report)
    }

    /// Issue every revenue creation at once and wait for all of them
    async fn create_revenues(
        &self,
        plan: &InstallmentPlan,
        quote: &Quote,
        currency: &DisplayCurrency,
    ) -> Vec<InstallmentOutcome> {
        let requests = plan.installments.iter().enumerate().map(|(index, installment)| {
            let request = CreateRevenueRequest::for_installment(quote, installment, currency);
            let api = Arc::clone(&self.api);
            async move {
                match api.create_revenue(request).await {
                    Ok(revenue) => InstallmentOutcome::Created { index, revenue },
                    Err(e) => {
                        error!(
                            quote_id = quote.id.as_str(),
                            installment = index + 1,
                            error = %e,
                            "Failed to create revenue for installment"
                        );
                        InstallmentOutcome::Failed {
                            index,
                            error: e.to_string(),
                        }
                    }
                }
            }
        });

        join_all(requests).await
    }
}
