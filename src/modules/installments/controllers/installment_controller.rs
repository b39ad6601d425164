// HTTP handlers for installment planning
//
// The plan lives on the client between calls: every endpoint receives the
// current plan and answers with the new one.
//
// Endpoints:
// - POST /api/installment-plans          - Derive a plan from a total
// - POST /api/installment-plans/resize   - Change the installment count
// - POST /api/installment-plans/edit     - Edit one installment row
// - POST /api/installment-plans/validate - Reconcile a plan with its total

use actix_web::{web, HttpResponse};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{format_money, round_money, Result};
use crate::modules::installments::{
    models::{InstallmentEdit, InstallmentPlan},
    services::InstallmentPlanner,
};

/// Request for POST /api/installment-plans
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivePlanRequest {
    pub total: Decimal,
    pub count: usize,
    pub job_title: String,
    /// Defaults to today (UTC)
    pub start_date: Option<NaiveDate>,
}

/// Request for POST /api/installment-plans/resize
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizePlanRequest {
    pub plan: InstallmentPlan,
    pub count: usize,
}

/// Request for POST /api/installment-plans/edit
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditInstallmentRequest {
    pub plan: InstallmentPlan,
    pub index: usize,
    #[serde(flatten)]
    pub edit: InstallmentEdit,
}

/// Response for POST /api/installment-plans/validate
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatePlanResponse {
    pub reconciled: bool,
    pub expected: String,
    pub actual: String,
}

/// POST /api/installment-plans
///
/// # Returns
/// - 200: Derived plan
/// - 400: Count outside 1..=MAX_INSTALLMENTS or negative total
pub async fn derive_plan(request: web::Json<DerivePlanRequest>) -> Result<HttpResponse> {
    let request = request.into_inner();
    let start_date = request
        .start_date
        .unwrap_or_else(|| Utc::now().date_naive());

    let plan = InstallmentPlanner::derive_plan(
        request.total,
        request.count,
        &request.job_title,
        start_date,
    )?;

    Ok(HttpResponse::Ok().json(plan))
}

/// POST /api/installment-plans/resize
///
/// Growing keeps existing amounts, shrinking recomputes all of them.
pub async fn resize_plan(request: web::Json<ResizePlanRequest>) -> Result<HttpResponse> {
    let request = request.into_inner();
    let plan = InstallmentPlanner::resize_plan(request.plan, request.count)?;

    Ok(HttpResponse::Ok().json(plan))
}

/// POST /api/installment-plans/edit
///
/// # Request Body
/// ```json
/// {
///   "plan": { "...": "..." },
///   "index": 2,
///   "amount": "33.34",
///   "description": "Final payment"
/// }
/// ```
pub async fn edit_installment(request: web::Json<EditInstallmentRequest>) -> Result<HttpResponse> {
    let request = request.into_inner();
    let plan = InstallmentPlanner::edit_installment(request.plan, request.index, &request.edit)?;

    Ok(HttpResponse::Ok().json(plan))
}

/// POST /api/installment-plans/validate
///
/// # Returns
/// - 200: Plan reconciles with its source total
/// - 400: Mismatch, body carries expected and actual totals
pub async fn validate_plan(plan: web::Json<InstallmentPlan>) -> Result<HttpResponse> {
    InstallmentPlanner::validate_reconciliation(&plan)?;

    Ok(HttpResponse::Ok().json(ValidatePlanResponse {
        reconciled: true,
        expected: format_money(round_money(plan.source_total)),
        actual: format_money(round_money(plan.installment_total()?)),
    }))
}
