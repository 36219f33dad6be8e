use std::env;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:6000";
pub const DEFAULT_TRIAGE_MODEL: &str = "models/triage_model.json";
pub const DEFAULT_NOSHOW_MODEL: &str = "models/noshow_model.json";

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// `SEWA_BIND_ADDR`
    pub bind_addr: String,
    /// `SEWA_TRIAGE_MODEL`
    pub triage_model_path: PathBuf,
    /// `SEWA_NOSHOW_MODEL`
    pub noshow_model_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unset or blank keys use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            bind_addr: get("SEWA_BIND_ADDR", DEFAULT_BIND_ADDR),
            triage_model_path: PathBuf::from(get("SEWA_TRIAGE_MODEL", DEFAULT_TRIAGE_MODEL)),
            noshow_model_path: PathBuf::from(get("SEWA_NOSHOW_MODEL", DEFAULT_NOSHOW_MODEL)),
        }
    }
}
