use eld_core::EldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HosError {
    #[error("rule set {name:?} is invalid: {reason}")]
    InvalidRuleSet { name: String, reason: String },

    #[error("rule set parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] EldError),
}

pub type HosResult<T> = Result<T, HosError>;
