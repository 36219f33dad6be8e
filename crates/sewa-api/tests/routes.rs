use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use sewa_api::router;
use sewa_api::state::AppState;
use sewa_inference::artifact::LinearArtifact;
use sewa_inference::noshow::NoShowModel;
use sewa_inference::triage::TriageModel;
use sewa_inference::{ModelSlot, Models};

fn fallback_app() -> Router {
    router(AppState::new(Models::default()))
}

fn app_with(models: Models) -> Router {
    router(AppState::new(models))
}

async fn send(app: Router, request: Request<Body>) -> Value {
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_raw(app: Router, uri: &str, body: &str) -> Value {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn post(app: Router, uri: &str, body: Value) -> Value {
    post_raw(app, uri, &body.to_string()).await
}

fn linear(classes: &[&str], coefficients: Vec<Vec<f64>>) -> LinearArtifact {
    let intercepts = vec![0.0; coefficients.len()];
    LinearArtifact {
        feature_names: Vec::new(),
        classes: classes.iter().map(|c| c.to_string()).collect(),
        scaler: None,
        coefficients,
        intercepts,
    }
}

/// Six-feature triage model that only looks at chest pain.
fn triage_model() -> TriageModel {
    TriageModel::from_artifact(linear(
        &["moderate", "routine", "urgent"],
        vec![
            vec![0.0; 6],
            vec![0.0, 0.0, -3.0, 0.0, 0.0, 0.0],
            vec![0.0, 0.0, 6.0, 0.0, 0.0, 0.0],
        ],
    ))
    .unwrap()
}

#[tokio::test]
async fn health_reports_fallback_mode() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let body = send(fallback_app(), request).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["models_loaded"]["triage"], false);
    assert_eq!(body["models_loaded"]["noshow"], false);
    assert!(
        body["endpoints"]
            .as_array()
            .unwrap()
            .contains(&json!("POST /nlp-triage"))
    );
}

#[tokio::test]
async fn keyword_triage() {
    let body = post(fallback_app(), "/triage", json!({"symptoms": "Chest pain since noon"})).await;
    assert_eq!(body, json!({"urgency": "urgent"}));

    let body = post(fallback_app(), "/triage", json!({"symptoms": "fever"})).await;
    assert_eq!(body["urgency"], "moderate");
}

#[tokio::test]
async fn enhanced_ml_triage_falls_back_without_model() {
    let body = post(
        fallback_app(),
        "/enhanced-ml-triage",
        json!({"age": 65, "symptoms": "severe chest pain and difficulty breathing"}),
    )
    .await;
    assert_eq!(body["urgency"], "urgent");
    assert_eq!(body["confidence"], 0.6);
    assert_eq!(body["model_used"], "fallback");
    assert_eq!(body["analysis"]["urgent_count"], 3);
    assert_eq!(body["extracted_symptoms"]["chest_pain"], true);
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn ml_triage_accepts_legacy_flags() {
    let body = post(
        fallback_app(),
        "/ml-triage",
        json!({"age": 30, "fever": 1, "chestpain": 0}),
    )
    .await;
    assert_eq!(body["urgency"], "moderate");
    assert_eq!(body["extracted_symptoms"]["fever"], true);

    let body = post(fallback_app(), "/ml-triage", json!({"chestpain": true})).await;
    assert_eq!(body["urgency"], "urgent");

    let body = post(fallback_app(), "/ml-triage", json!({})).await;
    assert_eq!(body["urgency"], "routine");
}

#[tokio::test]
async fn nlp_triage_translates_nepali() {
    let body = post(
        fallback_app(),
        "/nlp-triage",
        json!({"symptoms": "मलाई छाती दुख्छ", "age": 40}),
    )
    .await;
    assert_eq!(body["original"], "मलाई छाती दुख्छ");
    assert_eq!(body["translated"], "मलाई chest pain");
    assert_eq!(body["detected_language"], "ne");
    assert_eq!(body["urgency"], "urgent");
    assert_eq!(body["features"], json!({"age": 40, "fever": false, "chest_pain": true}));
    assert_eq!(body["model_used"], "fallback");
}

#[tokio::test]
async fn nlp_triage_leaves_english_alone() {
    let body = post(
        fallback_app(),
        "/enhanced-nlp-triage",
        json!({"symptoms": "mild cough"}),
    )
    .await;
    assert_eq!(body["detected_language"], "en");
    assert_eq!(body["translated"], "mild cough");
    assert_eq!(body["features"]["age"], 30);
    assert_eq!(body["urgency"], "moderate");
}

#[tokio::test]
async fn enhanced_noshow_falls_back_without_model() {
    let body = post(
        fallback_app(),
        "/enhanced-noshow-ml",
        json!({
            "age": 35,
            "distance": 5,
            "history_missed": 0,
            "weather_bad": 0,
            "day_of_week": 2,
            "time_of_day": 1,
            "appointment_type": "routine"
        }),
    )
    .await;
    assert_eq!(body["no_show_risk"], 0.1);
    assert_eq!(body["confidence"], 0.6);
    assert_eq!(body["model_used"], "fallback");
    assert_eq!(body["risk_factors"]["distance_risk"], "low");
    assert_eq!(body["risk_factors"]["reliability_score"], 1.0);
}

#[tokio::test]
async fn noshow_alias_uses_the_heuristic() {
    let request = json!({"distance": 30, "history_missed": 5, "weather_bad": true});
    let canonical = post(fallback_app(), "/noshow-ml", request.clone()).await;
    let legacy = post(fallback_app(), "/noshow", request).await;
    assert_eq!(canonical, legacy);
    assert_eq!(canonical["no_show_risk"], 0.55);
    assert_eq!(canonical["risk_factors"]["history_risk"], "high");
    assert_eq!(canonical["risk_factors"]["weather_risk"], "high");
}

#[tokio::test]
async fn malformed_bodies_resolve_to_defaults() {
    let body = post_raw(fallback_app(), "/noshow-ml", "not json at all").await;
    assert_eq!(body["no_show_risk"], 0.1);

    let body = post_raw(fallback_app(), "/nlp-triage", "").await;
    assert_eq!(body["urgency"], "routine");
    assert_eq!(body["detected_language"], "en");
}

#[tokio::test]
async fn non_object_bodies_resolve_to_defaults() {
    let body = post_raw(fallback_app(), "/ml-triage", r#"["severe chest pain", 80]"#).await;
    assert_eq!(body["urgency"], "routine");
    assert_eq!(body["analysis"]["urgent_count"], 0);
}

#[tokio::test]
async fn null_age_keeps_the_symptoms() {
    let body = post(
        fallback_app(),
        "/ml-triage",
        json!({"symptoms": "severe chest pain", "age": null}),
    )
    .await;
    assert_eq!(body["urgency"], "urgent");
    assert_eq!(body["extracted_symptoms"]["chest_pain"], true);
    assert_eq!(body["analysis"]["urgent_count"], 2);
}

#[tokio::test]
async fn negative_age_falls_back_to_default_age() {
    let body = post(
        fallback_app(),
        "/nlp-triage",
        json!({"symptoms": "chest pain", "age": -1}),
    )
    .await;
    assert_eq!(body["original"], "chest pain");
    assert_eq!(body["urgency"], "urgent");
    assert_eq!(body["features"]["age"], 30);
}

#[tokio::test]
async fn out_of_range_fields_only_reset_themselves() {
    let body = post(
        fallback_app(),
        "/noshow-ml",
        json!({"distance": 40, "history_missed": 5, "weather_bad": 1, "day_of_week": 300}),
    )
    .await;
    assert_eq!(body["no_show_risk"], 0.55);
    assert_eq!(body["risk_factors"]["distance_risk"], "high");
    assert_eq!(body["risk_factors"]["history_risk"], "high");
    assert_eq!(body["risk_factors"]["weather_risk"], "high");
}

#[tokio::test]
async fn trained_triage_model_is_used() {
    let models = Models {
        triage: ModelSlot::loaded(triage_model()),
        ..Models::default()
    };
    let body = post(
        app_with(models),
        "/ml-triage",
        json!({"age": 50, "symptoms": "chest pain"}),
    )
    .await;
    assert_eq!(body["model_used"], "enhanced");
    assert_eq!(body["urgency"], "urgent");
    assert!(body["confidence"].as_f64().unwrap() > 0.9);
}

#[tokio::test]
async fn failed_triage_inference_falls_back_with_error() {
    // a three-feature artifact cannot score the six-feature row
    let legacy = TriageModel::from_artifact(linear(
        &["routine", "urgent"],
        vec![vec![0.0, 1.0, 1.0]],
    ))
    .unwrap();
    let models = Models {
        triage: ModelSlot::loaded(legacy),
        ..Models::default()
    };
    let body = post(
        app_with(models),
        "/ml-triage",
        json!({"age": 65, "symptoms": "severe chest pain"}),
    )
    .await;
    assert_eq!(body["model_used"], "fallback");
    assert_eq!(body["urgency"], "urgent");
    assert_eq!(body["confidence"], 0.5);
    assert!(body["error"].as_str().unwrap().contains("shape mismatch"));
}

#[tokio::test]
async fn trained_noshow_model_is_used() {
    let model = NoShowModel::from_artifact(linear(&["0", "1"], vec![vec![0.0; 7]])).unwrap();
    let models = Models {
        noshow: ModelSlot::loaded(model),
        ..Models::default()
    };
    let body = post(app_with(models), "/noshow-ml", json!({"distance": 40})).await;
    assert_eq!(body["model_used"], "enhanced");
    assert_eq!(body["no_show_risk"], 0.5);
    assert_eq!(body["confidence"], 0.85);
    assert_eq!(body["risk_factors"]["distance_risk"], "high");
}

#[tokio::test]
async fn failed_noshow_inference_falls_back_with_error() {
    let model = NoShowModel::from_artifact(linear(&["0", "1"], vec![vec![0.0; 4]])).unwrap();
    let models = Models {
        noshow: ModelSlot::loaded(model),
        ..Models::default()
    };
    let body = post(app_with(models), "/noshow-ml", json!({})).await;
    assert_eq!(body["model_used"], "fallback");
    assert_eq!(body["confidence"], 0.3);
    assert_eq!(body["no_show_risk"], 0.1);
    assert!(body["error"].is_string());
}
