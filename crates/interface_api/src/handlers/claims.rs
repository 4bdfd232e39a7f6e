//! Claims handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use core_kernel::{ClaimId, Lifecycle, Money, Repository};
use domain_claims::{filter_claims, Claim, ClaimStatus, ClaimSummary, ClaimTab, NewClaim};

use crate::dto::claims::{ClaimStatusRequest, CreateClaimRequest};
use crate::dto::{ActionsResponse, ListQuery, NotesRequest, SummarizedList};
use crate::error::ApiError;
use crate::handlers::today;
use crate::AppState;

/// Lists claims with the totals of the claims shown
pub async fn list_claims(
    State(state): State<AppState>,
    Query(query): Query<ListQuery<ClaimTab>>,
) -> Result<Json<SummarizedList<Claim, ClaimSummary>>, ApiError> {
    let claims = state.store.claims.list().await?;
    let shown = filter_claims(&claims, &query.search, query.tab);
    let summary = ClaimSummary::from_claims(shown.iter().copied())?;
    let items: Vec<Claim> = shown.into_iter().cloned().collect();

    Ok(Json(SummarizedList {
        total: items.len(),
        items,
        summary,
    }))
}

/// Files a new claim
pub async fn create_claim(
    State(state): State<AppState>,
    Json(request): Json<CreateClaimRequest>,
) -> Result<(StatusCode, Json<Claim>), ApiError> {
    request.validate()?;
    let form = NewClaim::from(request);
    form.validate()?;

    let id = state.store.claims.next_id().await;
    let claim = Claim::file(id, form, today())?;
    let created = state.store.claims.insert(claim).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
) -> Result<Json<Claim>, ApiError> {
    Ok(Json(state.store.claims.get(&id).await?))
}

pub async fn claim_actions(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
) -> Result<Json<ActionsResponse<ClaimStatus>>, ApiError> {
    let claim = state.store.claims.get(&id).await?;
    Ok(Json(ActionsResponse {
        status: claim.status,
        label: claim.status.label(),
        actions: claim.available_actions(),
    }))
}

/// Moves a claim along its workflow
pub async fn update_claim_status(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
    Json(request): Json<ClaimStatusRequest>,
) -> Result<Json<Claim>, ApiError> {
    let target = ClaimStatus::parse(&request.status)?;
    let approved_amount = request.approved_amount.map(Money::usd);

    let updated = state
        .store
        .claims
        .modify(&id, |claim| {
            let result = match target {
                ClaimStatus::Approved => claim.approve(approved_amount),
                ClaimStatus::Processing => claim.process(approved_amount),
                ClaimStatus::PaymentPending => claim.submit_to_client(approved_amount),
                _ => claim.update_status(target),
            };
            result.map_err(ApiError::from)
        })
        .await?;

    Ok(Json(updated))
}

pub async fn update_claim_notes(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
    Json(request): Json<NotesRequest>,
) -> Result<Json<Claim>, ApiError> {
    let updated = state
        .store
        .claims
        .modify(&id, |claim| {
            claim.set_review_notes(request.notes);
            Ok::<(), ApiError>(())
        })
        .await?;
    Ok(Json(updated))
}
