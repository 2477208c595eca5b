//! Turn-by-turn progression through the assessment.
//!
//! The engine owns no session state. The host passes the stored snapshot in
//! on every call and persists the snapshot (or slot updates) it gets back.
//! The only suspension point is the phrasing call, which always resolves:
//! on error or timeout the engine falls back to canned phrasing.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use aftercare_bedrock::error::PhrasingError;
use aftercare_bedrock::phrasing::Phraser;
use aftercare_bedrock::tone;
use aftercare_core::models::phase::Phase;
use aftercare_core::models::prompt_key::PromptKey;
use aftercare_core::models::session::SessionSnapshot;
use aftercare_core::models::subscale::Subscale;
use aftercare_core::slots::{SlotMap, SlotUpdate};
use aftercare_instruments::banks;
use aftercare_instruments::severity::estimate_severity;

use crate::error::EngineError;
use crate::turn::{Turn, TurnOutcome};

pub const DEFAULT_PHRASING_TIMEOUT: Duration = Duration::from_secs(8);

/// Reflected when the session opens without any user text.
pub const OPENING_REFLECTION: &str = "Thanks for saying hi.";

pub struct AssessmentEngine {
    phraser: Arc<dyn Phraser>,
    phrasing_timeout: Duration,
}

impl AssessmentEngine {
    pub fn new(phraser: Arc<dyn Phraser>) -> Self {
        Self {
            phraser,
            phrasing_timeout: DEFAULT_PHRASING_TIMEOUT,
        }
    }

    pub fn with_phrasing_timeout(mut self, timeout: Duration) -> Self {
        self.phrasing_timeout = timeout;
        self
    }

    /// Reset the session and ask the first context question.
    ///
    /// Every slot is returned as an update, since a restart overwrites
    /// whatever the host had stored.
    pub async fn start(&self, opening_text: Option<&str>) -> TurnOutcome {
        let user_text = opening_text
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(OPENING_REFLECTION);

        let mut snapshot = SessionSnapshot::initial();
        let cursor = snapshot.cursor();
        let question = banks::context_questions()[cursor.index];
        let utterance = self.phrase(user_text, question).await;
        snapshot.last_prompt_key = cursor.prompt_key();

        info!(key = %snapshot.last_prompt_key, "assessment started");

        let updates = snapshot
            .to_slots()
            .into_iter()
            .map(|(slot, value)| SlotUpdate { slot, value })
            .collect();

        TurnOutcome {
            turn: Turn::NextQuestion { utterance },
            snapshot,
            updates,
        }
    }

    /// Process one user answer and decide what comes next.
    ///
    /// Answers given during subscale assessment are scored against the
    /// subscale named by `intent`; answers without a symptom intent are not
    /// scored. Outside subscale assessment nothing is scored.
    pub async fn advance(
        &self,
        snapshot: SessionSnapshot,
        user_text: &str,
        intent: Option<&str>,
    ) -> TurnOutcome {
        let before = snapshot.clone();
        let mut next = snapshot;

        match next.phase {
            Phase::Done => {
                debug!("turn received after completion; ignoring");
                return finish(&before, next, Turn::Ended);
            }
            Phase::SubscaleAssessment => score_answer(&mut next, user_text, intent),
            Phase::Context => {}
        }

        let cursor = next.cursor();
        let successor = cursor.successor();
        if let Some(question) = banks::bank(cursor.phase, cursor.subscale).get(successor.index) {
            let key = successor.prompt_key();
            if key == next.last_prompt_key {
                warn!(key = %key, "question already asked, not repeating it");
                return finish(&before, next, Turn::AlreadyAsked);
            }

            let utterance = self.phrase(user_text, question).await;
            next.index = successor.index;
            next.last_prompt_key = key;
            debug!(key = %next.last_prompt_key, "next question");
            return finish(&before, next, Turn::NextQuestion { utterance });
        }

        let (upcoming, preamble) = match next.phase {
            Phase::Context => (Some(Subscale::Intrusion), banks::ASSESSMENT_PREAMBLE),
            _ => (
                banks::next_subscale(next.subscale),
                banks::NEXT_SUBSCALE_PREAMBLE,
            ),
        };

        match upcoming {
            Some(subscale) => {
                self.enter_subscale(&before, next, subscale, user_text, preamble)
                    .await
            }
            None => {
                next.phase = Phase::Done;
                info!(
                    intrusion = next.scores.intrusion,
                    avoidance = next.scores.avoidance,
                    hyperarousal = next.scores.hyperarousal,
                    "assessment complete"
                );
                finish(&before, next, Turn::Complete)
            }
        }
    }

    /// [`advance`](Self::advance) over raw runtime slots, validating them at
    /// the boundary.
    pub async fn advance_slots(
        &self,
        slots: &SlotMap,
        user_text: &str,
        intent: Option<&str>,
    ) -> Result<TurnOutcome, EngineError> {
        let snapshot = SessionSnapshot::from_slots(slots)?;
        Ok(self.advance(snapshot, user_text, intent).await)
    }

    async fn enter_subscale(
        &self,
        before: &SessionSnapshot,
        mut next: SessionSnapshot,
        subscale: Subscale,
        user_text: &str,
        preamble: &str,
    ) -> TurnOutcome {
        let Some(first) = banks::subscale_questions(Some(subscale)).first() else {
            next.phase = Phase::Done;
            warn!(subscale = %subscale, "subscale has no questions, ending assessment");
            return finish(before, next, Turn::Complete);
        };

        let utterance = self
            .phrase(user_text, &format!("{preamble} {first}"))
            .await;

        next.phase = Phase::SubscaleAssessment;
        next.subscale = Some(subscale);
        next.index = 0;
        next.last_prompt_key = PromptKey::for_question(next.phase, Some(subscale), 0);

        info!(subscale = %subscale, "entering subscale");

        finish(
            before,
            next,
            Turn::Transition {
                phase: Phase::SubscaleAssessment,
                subscale,
                utterance,
            },
        )
    }

    /// Ask the phraser, falling back to canned phrasing on error or timeout.
    async fn phrase(&self, user_text: &str, question: &str) -> String {
        let call = self.phraser.reflect_and_ask(user_text, question);
        let error = match tokio::time::timeout(self.phrasing_timeout, call).await {
            Ok(Ok(utterance)) => return utterance,
            Ok(Err(e)) => e,
            Err(_) => PhrasingError::Timeout(self.phrasing_timeout),
        };

        warn!(error = %error, "phrasing unavailable, using canned phrasing");
        tone::fallback_phrasing(question)
    }
}

fn score_answer(snapshot: &mut SessionSnapshot, user_text: &str, intent: Option<&str>) {
    let Some(subscale) = intent.and_then(Subscale::from_intent) else {
        return;
    };
    let severity = estimate_severity(Some(user_text));
    snapshot.scores.add(subscale, severity.points());
    debug!(subscale = %subscale, severity = severity.value(), "answer scored");
}

fn finish(before: &SessionSnapshot, after: SessionSnapshot, turn: Turn) -> TurnOutcome {
    let updates = SessionSnapshot::diff(before, &after);
    TurnOutcome {
        turn,
        snapshot: after,
        updates,
    }
}
