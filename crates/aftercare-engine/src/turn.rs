use aftercare_core::models::phase::Phase;
use aftercare_core::models::session::SessionSnapshot;
use aftercare_core::models::subscale::Subscale;
use aftercare_core::slots::SlotUpdate;
use serde::Serialize;

/// What the engine decided for one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Turn {
    /// The next question within the current bank.
    NextQuestion { utterance: String },
    /// The first question of a new phase or subscale.
    Transition {
        phase: Phase,
        subscale: Subscale,
        utterance: String,
    },
    /// The computed next question was the one asked last; nothing is sent.
    AlreadyAsked,
    /// Every subscale is exhausted. The host should produce the summary.
    Complete,
    /// The session already completed; the turn is ignored.
    Ended,
}

impl Turn {
    /// The utterance to send, if any. At most one per turn.
    pub fn utterance(&self) -> Option<&str> {
        match self {
            Turn::NextQuestion { utterance } | Turn::Transition { utterance, .. } => {
                Some(utterance.as_str())
            }
            Turn::AlreadyAsked | Turn::Complete | Turn::Ended => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Turn::Complete)
    }
}

/// Result of a turn: the decision, the replacement snapshot, and the slots
/// the host must write back.
#[derive(Debug, Clone, Serialize)]
pub struct TurnOutcome {
    pub turn: Turn,
    pub snapshot: SessionSnapshot,
    pub updates: Vec<SlotUpdate>,
}
