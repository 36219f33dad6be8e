use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Urgency tier assigned to a symptom report.
///
/// Variants are declared in ascending severity so the derived `Ord` gives
/// `Urgent > Moderate > Routine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum UrgencyLabel {
    Routine,
    Moderate,
    Urgent,
}

impl UrgencyLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLabel::Routine => "routine",
            UrgencyLabel::Moderate => "moderate",
            UrgencyLabel::Urgent => "urgent",
        }
    }
}

impl fmt::Display for UrgencyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrgencyLabel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "routine" => Ok(UrgencyLabel::Routine),
            "moderate" => Ok(UrgencyLabel::Moderate),
            "urgent" => Ok(UrgencyLabel::Urgent),
            other => Err(CoreError::UnknownUrgency(other.to_string())),
        }
    }
}
