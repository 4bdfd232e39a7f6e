//! API middleware

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::{info, warn};

use crate::auth::{validate_token, AuthError, Claims};
use crate::error::ApiError;
use crate::AppState;

/// Authentication middleware
///
/// Validates the bearer token, rejects revoked ones and stores the
/// [`Claims`] in the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| {
            warn!("Missing or invalid Authorization header");
            ApiError::Unauthorized("Missing bearer token".to_string())
        })?;

    let claims = validate_token(token, &state.config.jwt_secret).map_err(|e| {
        warn!(error = %e, "Token validation failed");
        ApiError::from(e)
    })?;

    if state.revoked.is_revoked(&claims.jti).await {
        warn!(user = %claims.sub, "Revoked token presented");
        return Err(AuthError::TokenRevoked.into());
    }

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Admin guard
///
/// Must run inside [`auth_middleware`].
pub async fn admin_middleware(request: Request<Body>, next: Next) -> Result<Response, ApiError> {
    match request.extensions().get::<Claims>() {
        Some(claims) if claims.is_admin() => Ok(next.run(request).await),
        Some(claims) => {
            warn!(user = %claims.sub, uri = %request.uri(), "Admin route refused");
            Err(ApiError::Forbidden("Administrator access required".to_string()))
        }
        None => Err(ApiError::Unauthorized("Missing session".to_string())),
    }
}

/// Audit logging middleware
///
/// Logs every API request with the acting user
pub async fn audit_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let user = request
        .extensions()
        .get::<Claims>()
        .map(|c| c.sub.clone())
        .unwrap_or_else(|| "anonymous".to_string());

    let start = Utc::now();

    let response = next.run(request).await;

    let duration = Utc::now() - start;
    let status = response.status();

    info!(
        method = %method,
        uri = %uri,
        user = %user,
        status = %status.as_u16(),
        duration_ms = duration.num_milliseconds(),
        "API request"
    );

    response
}
