use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use sewa_core::models::noshow::{AppointmentType, NoShowContext, RiskFactors, RiskProbability};
use sewa_core::models::prediction::ModelUsed;
use sewa_inference::Unavailable;
use sewa_noshow::{estimate, risk_factors};

use crate::extract::{LenientJson, lenient};
use crate::state::AppState;

/// Confidence reported when no no-show model is loaded.
pub const FALLBACK_CONFIDENCE: f64 = 0.6;

/// Confidence reported when the loaded model failed on this request.
pub const FAILED_INFERENCE_CONFIDENCE: f64 = 0.3;

/// `POST /noshow-ml` body.
///
/// Defaults: `age` 30, `distance` 5 km, `history_missed` 0,
/// `weather_bad` false, `day_of_week` 1 (Tuesday), `time_of_day` 1
/// (afternoon), `appointment_type` "routine".
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NoShowRequest {
    #[serde(deserialize_with = "lenient::count")]
    pub age: Option<u32>,
    #[serde(deserialize_with = "lenient::real")]
    pub distance: Option<f64>,
    #[serde(deserialize_with = "lenient::count")]
    pub history_missed: Option<u32>,
    #[serde(deserialize_with = "lenient::flag")]
    pub weather_bad: bool,
    #[serde(deserialize_with = "lenient::count")]
    pub day_of_week: Option<u8>,
    #[serde(deserialize_with = "lenient::count")]
    pub time_of_day: Option<u8>,
    #[serde(deserialize_with = "lenient::text")]
    pub appointment_type: String,
}

impl NoShowRequest {
    /// Fills every absent or unusable field from [`NoShowContext::default`].
    pub fn into_context(self) -> NoShowContext {
        let defaults = NoShowContext::default();
        NoShowContext {
            age: self.age.unwrap_or(defaults.age),
            distance_km: self.distance.unwrap_or(defaults.distance_km),
            history_missed: self.history_missed.unwrap_or(defaults.history_missed),
            weather_bad: self.weather_bad,
            day_of_week: self.day_of_week.unwrap_or(defaults.day_of_week),
            time_of_day: self.time_of_day.unwrap_or(defaults.time_of_day),
            appointment_type: AppointmentType::from_label(&self.appointment_type),
        }
    }
}

#[derive(Serialize)]
pub struct NoShowResponse {
    pub no_show_risk: RiskProbability,
    pub confidence: f64,
    pub risk_factors: RiskFactors,
    pub model_used: ModelUsed,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// No-show probability from the trained model or the heuristic.
pub async fn predict(
    State(state): State<AppState>,
    LenientJson(req): LenientJson<NoShowRequest>,
) -> Json<NoShowResponse> {
    let ctx = req.into_context();
    let factors = risk_factors(&ctx);

    let (no_show_risk, confidence, model_used, error) =
        match state.models.noshow.predict(&ctx.model_input()) {
            Ok(prediction) => (
                prediction.risk,
                prediction.confidence,
                ModelUsed::Enhanced,
                None,
            ),
            Err(Unavailable::NotLoaded) => {
                (estimate(&ctx), FALLBACK_CONFIDENCE, ModelUsed::Fallback, None)
            }
            Err(Unavailable::Failed(e)) => {
                tracing::warn!(error = %e, "no-show inference failed, using heuristic");
                (
                    estimate(&ctx),
                    FAILED_INFERENCE_CONFIDENCE,
                    ModelUsed::Fallback,
                    Some(e.to_string()),
                )
            }
        };

    Json(NoShowResponse {
        no_show_risk,
        confidence,
        risk_factors: factors,
        model_used,
        error,
    })
}
