use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::phase::Phase;
use super::prompt_key::PromptKey;
use super::scores::ScoreAccumulators;
use super::subscale::Subscale;

/// Everything needed to resume a conversation after any turn.
///
/// The dialogue runtime owns storage of this record; the engine receives it
/// by value each turn and hands back the replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionSnapshot {
    pub phase: Phase,
    /// Active subscale. Pre-selected as intrusion during the context phase.
    /// `None` when the stored subscale name was not recognized; such a
    /// subscale has no questions.
    pub subscale: Option<Subscale>,
    /// Index of the question last asked within the active bank.
    pub index: usize,
    pub last_prompt_key: PromptKey,
    pub scores: ScoreAccumulators,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::initial()
    }
}

impl SessionSnapshot {
    /// Phase-start values: context phase, intrusion pre-selected, cursor and
    /// sums at zero, nothing asked.
    pub fn initial() -> Self {
        Self {
            phase: Phase::Context,
            subscale: Some(Subscale::Intrusion),
            index: 0,
            last_prompt_key: PromptKey::empty(),
            scores: ScoreAccumulators::default(),
        }
    }

    pub fn cursor(&self) -> Cursor {
        let subscale = match self.phase {
            Phase::Context => None,
            Phase::SubscaleAssessment | Phase::Done => self.subscale,
        };
        Cursor {
            phase: self.phase,
            subscale,
            index: self.index,
        }
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }
}

/// A pointer into the active question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub phase: Phase,
    pub subscale: Option<Subscale>,
    pub index: usize,
}

impl Cursor {
    pub fn prompt_key(&self) -> PromptKey {
        PromptKey::for_question(self.phase, self.subscale, self.index)
    }

    /// The same bank, one question further.
    pub fn successor(&self) -> Cursor {
        Cursor {
            index: self.index + 1,
            ..*self
        }
    }
}
