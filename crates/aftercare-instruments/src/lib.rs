//! aftercare-instruments
//!
//! The IES-R instrument as used by the guided conversation. Pure data and
//! pure functions: question banks, the per-answer severity heuristic, and the
//! closing summary derived from subscale sums.

pub mod banks;
pub mod instruments;
pub mod scoring;
pub mod severity;
pub mod summary;

use scoring::{Domain, ScoreEntry, ValidationError};

/// Trait implemented by each assessment instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "iesr").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "IES-R").
    fn name(&self) -> &str;

    /// The domains and subscales this instrument measures.
    fn domains(&self) -> &[Domain];

    /// Validate a set of score entries against this instrument's rules.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let all_subscales: Vec<_> = self
            .domains()
            .iter()
            .flat_map(|d| &d.subscales)
            .collect();

        let mut errors = Vec::new();
        for entry in scores {
            if let Some(spec) = all_subscales.iter().find(|s| s.subscale == entry.subscale)
                && !spec.range.contains(entry.value)
            {
                errors.push(ValidationError {
                    subscale: entry.subscale,
                    value: entry.value,
                    expected_range: spec.range,
                    score_type: spec.score_type,
                    message: format!(
                        "{}: {} score {} is outside range [{}, {}]",
                        self.name(),
                        spec.name,
                        entry.value,
                        spec.range.min,
                        spec.range.max,
                    ),
                });
            }
        }
        errors
    }
}
