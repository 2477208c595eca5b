use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::phase::Phase;
use super::subscale::Subscale;

/// Identifies which question was asked last, as `phase:subscale:index`.
///
/// The empty key means nothing has been asked yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PromptKey(String);

impl PromptKey {
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Key for question `index` of the given bank. Context questions, and
    /// banks without a recognized subscale, use `none` as the middle segment.
    pub fn for_question(phase: Phase, subscale: Option<Subscale>, index: usize) -> Self {
        let sub = subscale.map(|s| s.as_str()).unwrap_or("none");
        Self(format!("{}:{sub}:{index}", phase.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PromptKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for PromptKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
