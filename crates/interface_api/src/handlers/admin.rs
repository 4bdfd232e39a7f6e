//! Administration handlers: headline stats, users and veterinarians

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use core_kernel::{Lifecycle, Repository, UserId, VetId};
use domain_billing::PaymentStatus;
use domain_claims::ClaimStatus;
use domain_party::{
    filter_users, filter_veterinarians, NewUser, NewVeterinarian, User, UserStatus, VetStatus,
    Veterinarian,
};
use domain_policy::ApplicationStatus;

use crate::dto::party::{AdminStats, CreateUserRequest, CreateVeterinarianRequest};
use crate::dto::{ListResponse, SearchQuery, StatusRequest};
use crate::error::ApiError;
use crate::handlers::today;
use crate::AppState;

pub async fn stats(State(state): State<AppState>) -> Result<Json<AdminStats>, ApiError> {
    let store = &state.store;
    Ok(Json(AdminStats {
        total_users: store.users.count().await?,
        active_users: store.users.count_where(|u| u.status == UserStatus::Active).await,
        total_vets: store.veterinarians.count().await?,
        active_vets: store
            .veterinarians
            .count_where(|v| v.status == VetStatus::Active)
            .await,
        total_applications: store.applications.count().await?,
        pending_applications: store
            .applications
            .count_where(|a| a.status == ApplicationStatus::Pending)
            .await,
        total_claims: store.claims.count().await?,
        pending_claims: store.claims.count_where(|c| c.status == ClaimStatus::Pending).await,
        total_payments: store.payments.count().await?,
        pending_payments: store
            .payments
            .count_where(|p| p.status == PaymentStatus::Pending)
            .await,
    }))
}

pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ListResponse<User>>, ApiError> {
    let users = state.store.users.list().await?;
    let items = filter_users(&users, &query.search).into_iter().cloned().collect();
    Ok(Json(ListResponse::new(items)))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    request.validate()?;
    let form = NewUser::from(request);
    form.validate()?;

    let id = state.store.users.next_id().await;
    let user = User::create(id, form, today())?;
    let created = state.store.users.insert(user).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_user_status(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(request): Json<StatusRequest>,
) -> Result<Json<User>, ApiError> {
    let target = UserStatus::parse(&request.status)?;
    let updated = state
        .store
        .users
        .modify(&id, |user| user.update_status(target).map_err(ApiError::from))
        .await?;
    Ok(Json(updated))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<StatusCode, ApiError> {
    state.store.users.remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_veterinarians(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ListResponse<Veterinarian>>, ApiError> {
    let vets = state.store.veterinarians.list().await?;
    let items = filter_veterinarians(&vets, &query.search)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(ListResponse::new(items)))
}

pub async fn delete_veterinarian(
    State(state): State<AppState>,
    Path(id): Path<VetId>,
) -> Result<StatusCode, ApiError> {
    state.store.veterinarians.remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Registers a veterinarian pending approval
pub async fn create_veterinarian(
    State(state): State<AppState>,
    Json(request): Json<CreateVeterinarianRequest>,
) -> Result<(StatusCode, Json<Veterinarian>), ApiError> {
    request.validate()?;
    let form = NewVeterinarian::from(request);
    form.validate()?;

    let id = state.store.veterinarians.next_id().await;
    let vet = Veterinarian::register(id, form, today())?;
    let created = state.store.veterinarians.insert(vet).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_veterinarian_status(
    State(state): State<AppState>,
    Path(id): Path<VetId>,
    Json(request): Json<StatusRequest>,
) -> Result<Json<Veterinarian>, ApiError> {
    let target = VetStatus::parse(&request.status)?;
    let updated = state
        .store
        .veterinarians
        .modify(&id, |vet| {
            let result = match (vet.status, target) {
                (VetStatus::Pending, VetStatus::Active) => vet.approve(),
                (VetStatus::Inactive, VetStatus::Active) => vet.reactivate(),
                _ => vet.update_status(target),
            };
            result.map_err(ApiError::from)
        })
        .await?;
    Ok(Json(updated))
}
