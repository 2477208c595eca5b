//! Silent per-answer severity heuristic.
//!
//! Keyword bucketing over the raw answer text, not language understanding.
//! Tiers are checked from most to least intense and the first tier with a
//! matching phrase wins.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Severity of a single answer, always in `1..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Severity(u8);

impl Severity {
    pub const MINIMAL: Severity = Severity(1);
    pub const MODERATE: Severity = Severity(2);
    pub const FREQUENT: Severity = Severity(3);
    pub const INTENSE: Severity = Severity(4);

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn points(&self) -> u32 {
        u32::from(self.0)
    }
}

const TIERS: [(Severity, &[&str]); 4] = [
    (
        Severity::INTENSE,
        &[
            "extremely",
            "every night",
            "all the time",
            "overwhelmed",
            "panic",
            "keeps happening",
        ],
    ),
    (
        Severity::FREQUENT,
        &["often", "frequently", "quite a bit", "most days", "really bad"],
    ),
    (
        Severity::MODERATE,
        &["sometimes", "some days", "comes and goes", "moderate"],
    ),
    (
        Severity::MINIMAL,
        &["a little", "rarely", "not much", "once in a while"],
    ),
];

/// Estimate the severity of an answer. Empty, absent, or unmatched text
/// scores the minimum.
pub fn estimate_severity(text: Option<&str>) -> Severity {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return Severity::MINIMAL;
    };
    let lowered = text.to_lowercase();

    TIERS
        .iter()
        .find(|(_, markers)| markers.iter().any(|m| lowered.contains(m)))
        .map(|(severity, _)| *severity)
        .unwrap_or(Severity::MINIMAL)
}
