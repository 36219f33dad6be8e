use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use sewa_core::models::language::Language;
use sewa_core::models::prediction::{ModelUsed, round_to};
use sewa_core::models::symptom::{FeatureVector, PatternTally, SymptomReport};
use sewa_core::models::urgency::UrgencyLabel;
use sewa_inference::Unavailable;
use sewa_inference::registry::Models;
use sewa_triage::rules::{decide_from, flag_triage, keyword_triage};

use crate::extract::{LenientJson, lenient};
use crate::state::AppState;

pub const DEFAULT_AGE: u32 = 30;

/// Confidence reported when no triage model is loaded.
pub const FALLBACK_CONFIDENCE: f64 = 0.6;

/// Confidence reported when the loaded model failed on this request.
pub const FAILED_INFERENCE_CONFIDENCE: f64 = 0.5;

/// `POST /triage` body. `symptoms` defaults to empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct KeywordTriageRequest {
    #[serde(deserialize_with = "lenient::text")]
    pub symptoms: String,
}

#[derive(Serialize)]
pub struct KeywordTriageResponse {
    pub urgency: UrgencyLabel,
}

/// `POST /ml-triage` body.
///
/// Defaults: `age` 30, `symptoms` empty, `fever` and `chestpain` false.
/// The flags are OR-ed into whatever the text analysis finds.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MlTriageRequest {
    #[serde(deserialize_with = "lenient::count")]
    pub age: Option<u32>,
    #[serde(deserialize_with = "lenient::text")]
    pub symptoms: String,
    #[serde(deserialize_with = "lenient::flag")]
    pub fever: bool,
    #[serde(alias = "chest_pain", deserialize_with = "lenient::flag")]
    pub chestpain: bool,
}

/// `POST /nlp-triage` body. Defaults: `symptoms` empty, `age` 30.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NlpTriageRequest {
    #[serde(deserialize_with = "lenient::text")]
    pub symptoms: String,
    #[serde(deserialize_with = "lenient::count")]
    pub age: Option<u32>,
}

fn symptom_report(symptoms: String, age: Option<u32>) -> SymptomReport {
    SymptomReport {
        raw_text: symptoms,
        age: age.unwrap_or(DEFAULT_AGE),
    }
}

/// Outcome of the model-or-fallback decision, shared by both triage
/// responses.
#[derive(Debug, Serialize)]
pub struct Classification {
    pub urgency: UrgencyLabel,
    pub confidence: f64,
    pub model_used: ModelUsed,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct MlTriageResponse {
    #[serde(flatten)]
    pub classification: Classification,
    pub extracted_symptoms: FeatureVector,
    pub analysis: PatternTally,
}

#[derive(Serialize)]
pub struct NlpFeatures {
    pub age: u32,
    pub fever: bool,
    pub chest_pain: bool,
}

#[derive(Serialize)]
pub struct NlpTriageResponse {
    pub original: String,
    pub translated: String,
    pub detected_language: Language,
    #[serde(flatten)]
    pub classification: Classification,
    pub features: NlpFeatures,
    pub extracted_symptoms: FeatureVector,
    pub analysis: PatternTally,
}

/// English keyword triage with no model involvement.
pub async fn keyword(
    LenientJson(req): LenientJson<KeywordTriageRequest>,
) -> Json<KeywordTriageResponse> {
    Json(KeywordTriageResponse {
        urgency: keyword_triage(&req.symptoms),
    })
}

/// Triage from symptom text and/or boolean flags.
pub async fn ml_triage(
    State(state): State<AppState>,
    LenientJson(req): LenientJson<MlTriageRequest>,
) -> Json<MlTriageResponse> {
    let report = symptom_report(req.symptoms, req.age);
    let (mut features, analysis) = sewa_triage::extract(&report.raw_text);
    features.fever |= req.fever;
    features.chest_pain |= req.chestpain;

    let has_text = !report.raw_text.trim().is_empty();
    let classification = classify(&state.models, &features, report.age, || {
        if has_text {
            decide_from(&features, &analysis, report.age)
        } else {
            flag_triage(features.fever, features.chest_pain)
        }
    });

    Json(MlTriageResponse {
        classification,
        extracted_symptoms: features,
        analysis,
    })
}

/// Multilingual triage: detect, translate Nepali, then classify.
pub async fn nlp_triage(
    State(state): State<AppState>,
    LenientJson(req): LenientJson<NlpTriageRequest>,
) -> Json<NlpTriageResponse> {
    let report = symptom_report(req.symptoms, req.age);
    let detected_language = sewa_triage::detect(&report.raw_text);
    let translated = match detected_language {
        Language::Ne => sewa_triage::translate(&report.raw_text),
        Language::En => report.raw_text.clone(),
    };
    tracing::debug!(language = %detected_language, "symptom language detected");

    let (features, analysis) = sewa_triage::extract(&translated);
    let classification = classify(&state.models, &features, report.age, || {
        decide_from(&features, &analysis, report.age)
    });

    Json(NlpTriageResponse {
        original: report.raw_text,
        translated,
        detected_language,
        classification,
        features: NlpFeatures {
            age: report.age,
            fever: features.fever,
            chest_pain: features.chest_pain,
        },
        extracted_symptoms: features,
        analysis,
    })
}

/// Ask the triage model, or run `fallback` when it is absent or fails.
fn classify(
    models: &Models,
    features: &FeatureVector,
    age: u32,
    fallback: impl FnOnce() -> UrgencyLabel,
) -> Classification {
    match models.triage.predict(&features.model_input(age)) {
        Ok(prediction) => Classification {
            urgency: prediction.urgency,
            confidence: round_to(prediction.confidence, 3),
            model_used: ModelUsed::Enhanced,
            error: None,
        },
        Err(Unavailable::NotLoaded) => Classification {
            urgency: fallback(),
            confidence: FALLBACK_CONFIDENCE,
            model_used: ModelUsed::Fallback,
            error: None,
        },
        Err(Unavailable::Failed(e)) => {
            tracing::warn!(error = %e, "triage inference failed, using fallback rules");
            Classification {
                urgency: fallback(),
                confidence: FAILED_INFERENCE_CONFIDENCE,
                model_used: ModelUsed::Fallback,
                error: Some(e.to_string()),
            }
        }
    }
}
