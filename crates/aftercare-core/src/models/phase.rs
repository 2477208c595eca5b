use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Top-level stage of the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Phase {
    /// Open-ended context questions about what happened.
    #[default]
    Context,
    /// IES-R subscale questions; answers are scored.
    #[serde(rename = "iesr")]
    SubscaleAssessment,
    /// All subscales exhausted and the summary has been requested.
    Done,
}

impl Phase {
    /// Slot spelling of this phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Context => "context",
            Phase::SubscaleAssessment => "iesr",
            Phase::Done => "done",
        }
    }

    /// Parse a slot value, case-insensitively. Accepts both the short
    /// `iesr` spelling and `subscale_assessment`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "context" => Some(Phase::Context),
            "iesr" | "subscale_assessment" => Some(Phase::SubscaleAssessment),
            "done" => Some(Phase::Done),
            _ => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
