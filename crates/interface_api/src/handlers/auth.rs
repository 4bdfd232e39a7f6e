//! Sign-in, registration and session handlers

use axum::{extract::State, http::StatusCode, Extension, Json};
use chrono::DateTime;
use tracing::info;

use core_kernel::Repository;
use domain_party::{LoginRequest, Registration, SessionUser, User};

use crate::auth::{create_token, Claims};
use crate::dto::auth::{LogoutResponse, SessionResponse, TokenResponse};
use crate::error::ApiError;
use crate::handlers::today;
use crate::AppState;

fn issue_token(state: &AppState, session: SessionUser) -> Result<TokenResponse, ApiError> {
    let token = create_token(&session, &state.config.jwt_secret, state.config.jwt_expiration_secs)?;
    Ok(TokenResponse {
        token,
        token_type: "Bearer",
        expires_in: state.config.jwt_expiration_secs,
        session: SessionResponse {
            is_admin: session.is_admin(),
            email: session.email,
            role: session.role,
            expires_at: None,
        },
    })
}

/// Signs in with any non-blank email and password
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let session = request.authenticate()?;

    let email = session.email.clone();
    let known = state
        .store
        .users
        .find(&|u: &User| u.email.eq_ignore_ascii_case(&email))
        .await?;
    for user in known {
        state
            .store
            .users
            .modify(&user.id, |u| {
                u.record_login(today());
                Ok::<(), ApiError>(())
            })
            .await?;
    }

    Ok(Json(issue_token(&state, session)?))
}

/// Creates an account and signs it in
pub async fn register(
    State(state): State<AppState>,
    Json(registration): Json<Registration>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    let session = registration.register()?;
    info!(name = %registration.full_name(), "Registration accepted");
    Ok((StatusCode::CREATED, Json(issue_token(&state, session)?)))
}

/// Who is signed in
pub async fn current_session(Extension(claims): Extension<Claims>) -> Json<SessionResponse> {
    Json(SessionResponse {
        is_admin: claims.is_admin(),
        expires_at: DateTime::from_timestamp(claims.exp, 0),
        email: claims.sub,
        role: claims.role,
    })
}

/// Revokes the presented token
pub async fn logout(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Json<LogoutResponse> {
    state.revoked.revoke(&claims.jti, claims.exp).await;
    info!(user = %claims.sub, "Signed out");
    Json(LogoutResponse { logged_out: true })
}
