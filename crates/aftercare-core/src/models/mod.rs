pub mod phase;
pub mod prompt_key;
pub mod scores;
pub mod session;
pub mod subscale;
