use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::routes::ENDPOINTS;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ModelsLoaded {
    pub triage: bool,
    pub noshow: bool,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub started_at: jiff::Timestamp,
    pub models_loaded: ModelsLoaded,
    pub endpoints: &'static [&'static str],
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        started_at: state.started_at,
        models_loaded: ModelsLoaded {
            triage: state.models.triage.is_loaded(),
            noshow: state.models.noshow.is_loaded(),
        },
        endpoints: ENDPOINTS,
    })
}
