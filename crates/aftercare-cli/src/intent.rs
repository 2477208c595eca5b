//! Stand-in intent labelling for the console host.
//!
//! A full dialogue runtime classifies each answer. The console has no
//! classifier, so any non-empty answer given during subscale assessment is
//! labelled as expressing symptoms of the active subscale.

use aftercare_core::models::phase::Phase;
use aftercare_core::models::session::SessionSnapshot;

pub fn label_answer(snapshot: &SessionSnapshot, answer: &str) -> Option<&'static str> {
    if answer.trim().is_empty() || snapshot.phase != Phase::SubscaleAssessment {
        return None;
    }
    snapshot.subscale.map(|s| s.expression_intent())
}
