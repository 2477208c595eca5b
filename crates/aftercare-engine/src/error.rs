use thiserror::Error;

use aftercare_core::error::CoreError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid session state: {0}")]
    Session(#[from] CoreError),
}
