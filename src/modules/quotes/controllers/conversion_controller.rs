// HTTP handler for converting a quote into revenue
//
// Endpoints:
// - POST /api/quotes/{id}/convert - Submit an installment plan for a quote

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::warn;

use crate::core::{DisplayCurrency, Result};
use crate::modules::installments::models::InstallmentPlan;
use crate::modules::quotes::services::QuoteConversionService;

/// Request for POST /api/quotes/{id}/convert
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertQuoteRequest {
    pub plan: InstallmentPlan,
    /// Overrides the configured display currency
    pub currency: Option<String>,
}

/// POST /api/quotes/{quote_id}/convert
///
/// # Returns
/// - 200: Conversion report, possibly with failed installments
/// - 400: Plan does not reconcile (nothing was sent)
/// - 404: Quote not found
pub async fn convert_quote(
    quote_id: web::Path<String>,
    request: web::Json<ConvertQuoteRequest>,
    service: web::Data<QuoteConversionService>,
    default_currency: web::Data<DisplayCurrency>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    let currency = match request.currency {
        Some(code) => DisplayCurrency::new(code)?,
        None => default_currency.get_ref().clone(),
    };

    let quote = service.load_quote(&quote_id).await?;
    let report = service.submit_plan(&request.plan, &quote, &currency).await?;

    if !report.is_complete() {
        warn!(
            quote_id = quote_id.as_str(),
            failures = report.failures().len(),
            quote_converted = report.quote_converted(),
            "Quote conversion incomplete"
        );
    }

    Ok(HttpResponse::Ok().json(report))
}
