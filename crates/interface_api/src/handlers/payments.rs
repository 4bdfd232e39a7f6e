//! Payment and batch handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};

use core_kernel::{Lifecycle, PaymentId, Repository};
use domain_billing::{
    filter_payments, start_batch_processing, Payment, PaymentBatch, PaymentStatus, PaymentSummary,
    PaymentTab,
};

use crate::dto::billing::{BatchProcessResponse, PaymentStatusRequest};
use crate::dto::{ActionsResponse, ListQuery, ListResponse, SummarizedList};
use crate::error::ApiError;
use crate::handlers::today;
use crate::AppState;

/// Lists payments with the totals of the payments shown
pub async fn list_payments(
    State(state): State<AppState>,
    Query(query): Query<ListQuery<PaymentTab>>,
) -> Result<Json<SummarizedList<Payment, PaymentSummary>>, ApiError> {
    let payments = state.store.payments.list().await?;
    let shown = filter_payments(&payments, &query.search, query.tab);
    let summary = PaymentSummary::from_payments(shown.iter().copied(), today())?;
    let items: Vec<Payment> = shown.into_iter().cloned().collect();

    Ok(Json(SummarizedList {
        total: items.len(),
        items,
        summary,
    }))
}

pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<PaymentId>,
) -> Result<Json<Payment>, ApiError> {
    Ok(Json(state.store.payments.get(&id).await?))
}

pub async fn payment_actions(
    State(state): State<AppState>,
    Path(id): Path<PaymentId>,
) -> Result<Json<ActionsResponse<PaymentStatus>>, ApiError> {
    let payment = state.store.payments.get(&id).await?;
    Ok(Json(ActionsResponse {
        status: payment.status,
        label: payment.status.label(),
        actions: payment.available_actions(),
    }))
}

/// Moves a payment along its workflow
pub async fn update_payment_status(
    State(state): State<AppState>,
    Path(id): Path<PaymentId>,
    Json(request): Json<PaymentStatusRequest>,
) -> Result<Json<Payment>, ApiError> {
    let target = PaymentStatus::parse(&request.status)?;
    let today = today();

    let updated = state
        .store
        .payments
        .modify(&id, |payment| {
            let result = match target {
                PaymentStatus::Completed => payment.mark_completed(request.transaction_id, today),
                PaymentStatus::Processing if payment.status == PaymentStatus::Failed => payment.retry(),
                PaymentStatus::Processing => payment.process(),
                PaymentStatus::Failed => payment.mark_failed(),
                _ => payment.update_status(target, today),
            };
            result.map_err(ApiError::from)
        })
        .await?;

    Ok(Json(updated))
}

/// Sends a failed payment again
pub async fn retry_payment(
    State(state): State<AppState>,
    Path(id): Path<PaymentId>,
) -> Result<Json<Payment>, ApiError> {
    let updated = state
        .store
        .payments
        .modify(&id, |payment| payment.retry().map_err(ApiError::from))
        .await?;
    Ok(Json(updated))
}

pub async fn list_batches(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<PaymentBatch>>, ApiError> {
    Ok(Json(ListResponse::new(state.store.batches.list().await?)))
}

/// Starts every pending batch
pub async fn process_batches(State(state): State<AppState>) -> Json<BatchProcessResponse> {
    let started = state.store.batches.modify_all(start_batch_processing).await;
    Json(BatchProcessResponse { started })
}
