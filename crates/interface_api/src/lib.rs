//! HTTP API Layer
//!
//! REST API for the veterinary insurance back office, built on Axum.
//!
//! # Architecture
//!
//! - **Handlers**: one module per back-office screen
//! - **Middleware**: bearer-token sessions, the admin guard and audit logging
//! - **DTOs**: request and response bodies
//! - **Error Handling**: consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(Store::seeded()?, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod auth;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use infra_store::Store;

use crate::auth::RevokedTokens;
use crate::config::ApiConfig;
use crate::handlers::{admin, applications, auth as session, claims, dashboard, health, payments, terms};
use crate::middleware::{admin_middleware, audit_middleware, auth_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: ApiConfig,
    pub revoked: RevokedTokens,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `store` - Back-office records
/// * `config` - API configuration
pub fn create_router(store: Store, config: ApiConfig) -> Router {
    let state = AppState {
        store,
        config,
        revoked: RevokedTokens::new(),
    };

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/auth/login", post(session::login))
        .route("/auth/register", post(session::register));

    let session_routes = Router::new()
        .route("/", get(session::current_session))
        .route("/logout", post(session::logout));

    let application_routes = Router::new()
        .route("/", get(applications::list_applications).post(applications::create_application))
        .route("/:id", get(applications::get_application))
        .route("/:id/actions", get(applications::application_actions))
        .route("/:id/status", put(applications::update_application_status))
        .route("/:id/notes", put(applications::update_application_notes));

    let claims_routes = Router::new()
        .route("/", get(claims::list_claims).post(claims::create_claim))
        .route("/:id", get(claims::get_claim))
        .route("/:id/actions", get(claims::claim_actions))
        .route("/:id/status", put(claims::update_claim_status))
        .route("/:id/notes", put(claims::update_claim_notes));

    let payment_routes = Router::new()
        .route("/", get(payments::list_payments))
        .route("/batches", get(payments::list_batches))
        .route("/batches/process", post(payments::process_batches))
        .route("/:id", get(payments::get_payment))
        .route("/:id/actions", get(payments::payment_actions))
        .route("/:id/status", put(payments::update_payment_status))
        .route("/:id/retry", post(payments::retry_payment));

    let admin_routes = Router::new()
        .route("/stats", get(admin::stats))
        .route("/users", get(admin::list_users).post(admin::create_user))
        .route("/users/:id", delete(admin::delete_user))
        .route("/users/:id/status", put(admin::update_user_status))
        .route("/vets", get(admin::list_veterinarians).post(admin::create_veterinarian))
        .route("/vets/:id", delete(admin::delete_veterinarian))
        .route("/vets/:id/status", put(admin::update_veterinarian_status))
        .route("/terms", get(terms::list_documents).post(terms::create_document))
        .route("/terms/:id", get(terms::get_document).put(terms::revise_document))
        .route("/terms/:id/status", put(terms::update_document_status))
        .layer(axum_middleware::from_fn(admin_middleware));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/session", session_routes)
        .nest("/applications", application_routes)
        .nest("/claims", claims_routes)
        .nest("/payments", payment_routes)
        .route("/dashboard", get(dashboard::dashboard))
        .nest("/admin", admin_routes)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
