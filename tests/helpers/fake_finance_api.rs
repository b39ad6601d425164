// In-memory finance API
//
// Records every request so tests can assert what the conversion workflow
// sent, and fails on demand for chosen installments or the status update.
// An optional barrier holds every revenue call until N of them are in flight.

use async_trait::async_trait;
use quoteflow::core::{AppError, Result};
use quoteflow::finance_api::FinanceApi;
use quoteflow::quotes::{Quote, QuoteStatus};
use quoteflow::revenues::{CreateRevenueRequest, Revenue};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;

#[derive(Default)]
pub struct FakeFinanceApi {
    quotes: Mutex<HashMap<String, Quote>>,
    revenue_requests: Mutex<Vec<CreateRevenueRequest>>,
    status_updates: Mutex<Vec<(String, QuoteStatus)>>,
    /// Revenue descriptions whose creation fails
    failing_descriptions: HashSet<String>,
    fail_status_update: bool,
    next_id: AtomicUsize,
    revenue_barrier: Option<Arc<Barrier>>,
}

impl FakeFinanceApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quote(self, quote: Quote) -> Self {
        self.quotes
            .lock()
            .unwrap()
            .insert(quote.id.clone(), quote);
        self
    }

    pub fn failing_revenue(mut self, description: &str) -> Self {
        self.failing_descriptions.insert(description.to_string());
        self
    }

    /// Block each revenue creation until `in_flight` calls are waiting together
    pub fn with_revenue_barrier(mut self, in_flight: usize) -> Self {
        self.revenue_barrier = Some(Arc::new(Barrier::new(in_flight)));
        self
    }

    pub fn failing_status_update(mut self) -> Self {
        self.fail_status_update = true;
        self
    }

    pub fn revenue_requests(&self) -> Vec<CreateRevenueRequest> {
        self.revenue_requests.lock().unwrap().clone()
    }

    pub fn status_updates(&self) -> Vec<(String, QuoteStatus)> {
        self.status_updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl FinanceApi for FakeFinanceApi {
    async fn get_quote(&self, quote_id: &str) -> Result<Quote> {
        self.quotes
            .lock()
            .unwrap()
            .get(quote_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("quote {}", quote_id)))
    }

    async fn create_revenue(&self, request: CreateRevenueRequest) -> Result<Revenue> {
        self.revenue_requests.lock().unwrap().push(request.clone());

        if let Some(barrier) = &self.revenue_barrier {
            barrier.wait().await;
        }

        if self.failing_descriptions.contains(&request.description) {
            return Err(AppError::upstream("Finance API error 500: revenue rejected"));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(Revenue {
            id: format!("rev-{}", id),
            client_id: request.client_id,
            amount: request.amount,
            date: request.date,
            description: request.description,
            category: request.category,
            account: request.account,
            currency: request.currency,
            due_date: Some(request.due_date),
            is_paid: request.is_paid,
            quote_id: Some(request.quote_id),
        })
    }

    async fn update_quote_status(&self, quote_id: &str, status: QuoteStatus) -> Result<Quote> {
        self.status_updates
            .lock()
            .unwrap()
            .push((quote_id.to_string(), status));

        if self.fail_status_update {
            return Err(AppError::upstream("Finance API error 503: try later"));
        }

        let mut quotes = self.quotes.lock().unwrap();
        let quote = quotes
            .get_mut(quote_id)
            .ok_or_else(|| AppError::not_found(format!("quote {}", quote_id)))?;
        quote.status = status;
        Ok(quote.clone())
    }

    fn name(&self) -> &str {
        "fake-finance-api"
    }
}
