//! Question banks.
//!
//! Static, ordered question lists for the context phase and each IES-R
//! subscale. Order matters: questions are asked strictly in sequence.

use aftercare_core::models::phase::Phase;
use aftercare_core::models::subscale::Subscale;

pub const CONTEXT_QUESTIONS: [&str; 6] = [
    "Could you share a bit about your role or experience?",
    "When you're ready, could you walk me through what happened in your own words?",
    "How did you first realize the situation had occurred, or who brought it to your attention?",
    "What happened to the patient as a result, or what were you most concerned might happen?",
    "How did the team's reactions or attitudes feel to you during and after the situation?",
    "How has this affected you, emotionally, physically, or at work, since it happened?",
];

pub const INTRUSION_QUESTIONS: [&str; 8] = [
    "Do memories about what happened pop up on their own sometimes?",
    "Have thoughts about it made it hard to fall or stay asleep?",
    "Do things during the day bring it back to mind?",
    "Do you ever feel like you're right back in the moment?",
    "Do images about it pop into your mind unexpectedly?",
    "Do reminders bring up strong feelings for you?",
    "Do waves of strong emotion come up about it?",
    "Have you had dreams about it recently?",
];

pub const AVOIDANCE_QUESTIONS: [&str; 8] = [
    "Do you try not to let yourself get upset when it comes up?",
    "Does any part of it feel unreal or distant?",
    "Do you avoid people, places, or things that remind you of it?",
    "Do you try not to think about it?",
    "Do you still have feelings about it but tend to avoid dealing with them?",
    "Do your feelings feel numb or muted when you think about it?",
    "Do you try to push the memory away?",
    "Do you prefer not to talk about it?",
];

pub const HYPERAROUSAL_QUESTIONS: [&str; 6] = [
    "Have you felt more irritable or easily angered lately?",
    "Do you feel jumpy or startle more easily than usual?",
    "Is it hard to fall asleep when you try to rest?",
    "Has it been tough to concentrate?",
    "When reminded of it, do you feel body reactions like a pounding heart or nausea?",
    "Do you feel on-guard or watchful much of the time?",
];

/// Lead-in for the first intrusion question, after the context phase.
pub const ASSESSMENT_PREAMBLE: &str =
    "Thanks for sharing that. I'd like to check how this has been affecting you day to day.";

/// Lead-in for the first question of the avoidance and hyperarousal subscales.
pub const NEXT_SUBSCALE_PREAMBLE: &str =
    "Thank you. A few more quick checks so I understand the whole picture.";

pub fn context_questions() -> &'static [&'static str] {
    &CONTEXT_QUESTIONS
}

/// Questions for a subscale; empty when the subscale is unknown.
pub fn subscale_questions(subscale: Option<Subscale>) -> &'static [&'static str] {
    match subscale {
        Some(Subscale::Intrusion) => &INTRUSION_QUESTIONS,
        Some(Subscale::Avoidance) => &AVOIDANCE_QUESTIONS,
        Some(Subscale::Hyperarousal) => &HYPERAROUSAL_QUESTIONS,
        None => &[],
    }
}

/// Questions for a subscale given by its slot name; empty for unknown names.
pub fn questions_for_name(name: &str) -> &'static [&'static str] {
    subscale_questions(Subscale::parse(name))
}

/// The bank the cursor walks in a given phase. Nothing is asked once done.
pub fn bank(phase: Phase, subscale: Option<Subscale>) -> &'static [&'static str] {
    match phase {
        Phase::Context => context_questions(),
        Phase::SubscaleAssessment => subscale_questions(subscale),
        Phase::Done => &[],
    }
}

/// The subscale administered after `subscale`; `None` means done. An unknown
/// subscale has no successor.
pub fn next_subscale(subscale: Option<Subscale>) -> Option<Subscale> {
    subscale.and_then(|s| s.next())
}
