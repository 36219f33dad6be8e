use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown urgency label: {0}")]
    UnknownUrgency(String),
}
