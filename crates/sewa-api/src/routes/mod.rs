pub mod health;
pub mod noshow;
pub mod triage;

/// Routes advertised by the health check.
pub const ENDPOINTS: &[&str] = &[
    "GET /",
    "POST /triage",
    "POST /ml-triage",
    "POST /nlp-triage",
    "POST /noshow-ml",
    "POST /enhanced-ml-triage",
    "POST /enhanced-nlp-triage",
    "POST /enhanced-noshow-ml",
    "POST /noshow",
];
