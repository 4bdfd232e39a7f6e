//! Application handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use core_kernel::{ApplicationId, Lifecycle, Money, Repository};
use domain_policy::{filter_applications, Application, ApplicationStatus, ApplicationTab, NewApplication};

use crate::dto::policy::{ApplicationStatusRequest, CreateApplicationRequest};
use crate::dto::{ActionsResponse, ListQuery, ListResponse, NotesRequest};
use crate::error::ApiError;
use crate::handlers::today;
use crate::AppState;

/// Lists applications matching the search box and tab
pub async fn list_applications(
    State(state): State<AppState>,
    Query(query): Query<ListQuery<ApplicationTab>>,
) -> Result<Json<ListResponse<Application>>, ApiError> {
    let applications = state.store.applications.list().await?;
    let items = filter_applications(&applications, &query.search, query.tab)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(ListResponse::new(items)))
}

/// Submits a new application
pub async fn create_application(
    State(state): State<AppState>,
    Json(request): Json<CreateApplicationRequest>,
) -> Result<(StatusCode, Json<Application>), ApiError> {
    request.validate()?;
    let form = NewApplication::from(request);
    form.validate()?;

    let id = state.store.applications.next_id().await;
    let application = Application::submit(id, form, today())?;
    let created = state.store.applications.insert(application).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<ApplicationId>,
) -> Result<Json<Application>, ApiError> {
    Ok(Json(state.store.applications.get(&id).await?))
}

pub async fn application_actions(
    State(state): State<AppState>,
    Path(id): Path<ApplicationId>,
) -> Result<Json<ActionsResponse<ApplicationStatus>>, ApiError> {
    let application = state.store.applications.get(&id).await?;
    Ok(Json(ActionsResponse {
        status: application.status,
        label: application.status.label(),
        actions: application.available_actions(),
    }))
}

/// Moves an application along its workflow
///
/// A quote amount records the underwriter's quote. Approving a received
/// quote submits it to the client.
pub async fn update_application_status(
    State(state): State<AppState>,
    Path(id): Path<ApplicationId>,
    Json(request): Json<ApplicationStatusRequest>,
) -> Result<Json<Application>, ApiError> {
    let target = ApplicationStatus::parse(&request.status)?;

    let updated = state
        .store
        .applications
        .modify(&id, |application| {
            let result = match (target, request.quote_amount) {
                (ApplicationStatus::QuoteReceived, Some(amount)) => {
                    application.record_quote(Money::usd(amount))
                }
                (ApplicationStatus::QuoteRequested, _) => application.request_quote(),
                (ApplicationStatus::Approved, _)
                    if application.status == ApplicationStatus::QuoteReceived =>
                {
                    application.submit_to_client()
                }
                _ => application.update_status(target),
            };
            result.map_err(ApiError::from)
        })
        .await?;

    Ok(Json(updated))
}

pub async fn update_application_notes(
    State(state): State<AppState>,
    Path(id): Path<ApplicationId>,
    Json(request): Json<NotesRequest>,
) -> Result<Json<Application>, ApiError> {
    let updated = state
        .store
        .applications
        .modify(&id, |application| {
            application.set_review_notes(request.notes);
            Ok::<(), ApiError>(())
        })
        .await?;
    Ok(Json(updated))
}
