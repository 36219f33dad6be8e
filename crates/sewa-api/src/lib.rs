//! sewa-api
//!
//! HTTP surface of the triage and no-show service. The binary in
//! `main.rs` only wires configuration, logging and the listener; the
//! router lives here so integration tests can drive it in-process.

pub mod config;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/", get(routes::health::health_check))
        .route("/health", get(routes::health::health_check))
        // Triage
        .route("/triage", post(routes::triage::keyword))
        .route("/ml-triage", post(routes::triage::ml_triage))
        .route("/enhanced-ml-triage", post(routes::triage::ml_triage))
        .route("/nlp-triage", post(routes::triage::nlp_triage))
        .route("/enhanced-nlp-triage", post(routes::triage::nlp_triage))
        // No-show
        .route("/noshow-ml", post(routes::noshow::predict))
        .route("/enhanced-noshow-ml", post(routes::noshow::predict))
        .route("/noshow", post(routes::noshow::predict))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
