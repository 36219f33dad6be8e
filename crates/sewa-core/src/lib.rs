//! sewa-core
//!
//! Pure domain types shared by the triage and no-show crates and the HTTP
//! service. No model or HTTP dependency — this is the shared vocabulary of
//! the Sewa system.

pub mod error;
pub mod models;
