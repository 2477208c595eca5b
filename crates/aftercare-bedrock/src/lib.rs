//! aftercare-bedrock
//!
//! Phrasing of reflect-and-ask utterances. Defines the [`Phraser`] seam the
//! conversation engine calls, a Bedrock-backed implementation, and an offline
//! canned one.
//!
//! [`Phraser`]: phrasing::Phraser

pub mod converse;
pub mod error;
pub mod phrasing;
pub mod prompt;
pub mod tone;
