use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid value for slot '{slot}': {reason}")]
    InvalidSlot { slot: String, reason: String },
}
