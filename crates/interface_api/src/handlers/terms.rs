//! Terms and privacy document handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use validator::Validate;

use core_kernel::{Lifecycle, Repository};
use domain_policy::{DocumentStatus, TermsDocument};

use crate::auth::Claims;
use crate::dto::policy::{CreateDocumentRequest, DocumentSummary, ReviseDocumentRequest};
use crate::dto::{ListResponse, StatusRequest};
use crate::error::ApiError;
use crate::handlers::today;
use crate::AppState;

pub async fn list_documents(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<DocumentSummary>>, ApiError> {
    let documents = state.store.terms.list().await?;
    let items = documents
        .into_iter()
        .map(|d| DocumentSummary {
            version: d.version.to_string(),
            status: d.status.as_str().to_string(),
            id: d.id,
            title: d.title,
            last_updated: d.last_updated,
            updated_by: d.updated_by,
        })
        .collect();
    Ok(Json(ListResponse::new(items)))
}

pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TermsDocument>, ApiError> {
    Ok(Json(state.store.terms.get(&id).await?))
}

/// Starts a new draft at version 1.0
pub async fn create_document(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<CreateDocumentRequest>,
) -> Result<(StatusCode, Json<TermsDocument>), ApiError> {
    request.validate()?;
    let document = TermsDocument::draft(
        state.store.next_document_id(),
        request.title,
        request.content,
        claims.sub,
        today(),
    )?;
    let created = state.store.terms.insert(document).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replaces the content and bumps the version
pub async fn revise_document(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(request): Json<ReviseDocumentRequest>,
) -> Result<Json<TermsDocument>, ApiError> {
    request.validate()?;
    let updated = state
        .store
        .terms
        .modify(&id, |document| {
            document
                .revise(request.content, claims.sub, today())
                .map_err(ApiError::from)
        })
        .await?;
    Ok(Json(updated))
}

pub async fn update_document_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<StatusRequest>,
) -> Result<Json<TermsDocument>, ApiError> {
    let target = DocumentStatus::parse(&request.status)?;
    let updated = state
        .store
        .terms
        .modify(&id, |document| document.update_status(target).map_err(ApiError::from))
        .await?;
    Ok(Json(updated))
}
