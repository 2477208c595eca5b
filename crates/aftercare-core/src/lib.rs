//! aftercare-core
//!
//! Pure domain types for the guided assessment conversation: phases,
//! subscales, prompt keys, score accumulators, and the session snapshot a
//! dialogue runtime stores between turns. No I/O, no model dependency.

pub mod error;
pub mod models;
pub mod slots;
