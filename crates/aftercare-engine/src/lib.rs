//! aftercare-engine
//!
//! The conversation state machine. Each call takes the stored session
//! snapshot plus the latest answer and returns at most one utterance, the
//! replacement snapshot, and the slots that changed.

pub mod engine;
pub mod error;
pub mod turn;
