//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the REST endpoints the designer client talks to under
//! a single Axum router. CORS is wide open: the editor is served from a
//! different origin during development.

pub mod applications;
pub mod screens;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/applications", get(applications::list).post(applications::create))
        .route(
            "/api/applications/{id}",
            get(applications::fetch)
                .put(applications::rename)
                .delete(applications::remove),
        )
        .route("/api/screens", post(screens::create))
        .route(
            "/api/screens/application/{application_id}",
            get(screens::list_for_application),
        )
        .route(
            "/api/screens/{id}",
            get(screens::fetch).put(screens::update).delete(screens::remove),
        )
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
