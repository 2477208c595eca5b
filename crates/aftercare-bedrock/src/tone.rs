//! Empathy phrase banks.
//!
//! A tone phrase is one thanking, one validating and one gentle sentence.
//! It is woven into the model prompt as a hint, and is the lead-in of the
//! canned phrasing used whenever the model is unavailable.

use rand::seq::SliceRandom;

pub const THANKS: [&str; 3] = [
    "Thanks for sharing that.",
    "I appreciate you opening up.",
    "I'm here with you.",
];

pub const VALIDATING: [&str; 3] = [
    "That makes sense.",
    "That sounds really tough.",
    "You're not alone in this.",
];

pub const GENTLE: [&str; 3] = [
    "We can go at your pace.",
    "I'm listening.",
    "Thank you for putting that into words.",
];

fn pick(bank: &[&'static str]) -> &'static str {
    bank.choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or_default()
}

/// A randomly assembled tone phrase.
pub fn pick_tone() -> String {
    format!("{} {} {}", pick(&THANKS), pick(&VALIDATING), pick(&GENTLE))
}

/// Local reflect-and-ask text: a tone phrase followed by the literal
/// question.
pub fn fallback_phrasing(next_question: &str) -> String {
    format!("{} {next_question}", pick_tone())
}
