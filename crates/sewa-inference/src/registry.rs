use std::path::Path;

use crate::noshow::NoShowModel;
use crate::slot::ModelSlot;
use crate::triage::TriageModel;

/// Every model the service can use, loaded once at startup.
#[derive(Default)]
pub struct Models {
    pub triage: ModelSlot<TriageModel>,
    pub noshow: ModelSlot<NoShowModel>,
}

impl Models {
    pub fn load(triage_path: &Path, noshow_path: &Path) -> Self {
        let models = Self {
            triage: ModelSlot::load(triage_path),
            noshow: ModelSlot::load(noshow_path),
        };
        if !models.triage.is_loaded() && !models.noshow.is_loaded() {
            tracing::warn!("no trained models loaded, serving rule-based fallbacks only");
        }
        models
    }
}
