use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhrasingError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("model returned an empty reply")]
    EmptyResponse,

    #[error("phrasing timed out after {0:?}")]
    Timeout(Duration),
}
