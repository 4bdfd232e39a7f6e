//! Agent dashboard

use axum::{extract::State, Json};
use serde::Serialize;

use core_kernel::{Currency, Money, Repository};
use domain_billing::{Payment, PaymentStatus};
use domain_claims::ClaimStatus;
use domain_party::VetStatus;
use domain_policy::Application;

use crate::error::ApiError;
use crate::AppState;

const RECENT_APPLICATIONS: usize = 5;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_applications: usize,
    pub pending_claims: usize,
    /// Sum of completed payments
    pub total_paid: Money,
    pub active_vets: usize,
    pub recent_applications: Vec<Application>,
}

/// Live counts over the current records
pub async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardResponse>, ApiError> {
    let store = &state.store;

    let applications = store.applications.list().await?;
    let completed = store
        .payments
        .find(&|p: &Payment| p.status == PaymentStatus::Completed)
        .await?;
    let total_paid = Money::sum(completed.iter().map(|p| &p.amount), Currency::USD)?;

    Ok(Json(DashboardResponse {
        total_applications: applications.len(),
        pending_claims: store
            .claims
            .count_where(|c| c.status == ClaimStatus::Pending)
            .await,
        total_paid,
        active_vets: store
            .veterinarians
            .count_where(|v| v.status == VetStatus::Active)
            .await,
        recent_applications: applications.into_iter().take(RECENT_APPLICATIONS).collect(),
    }))
}
