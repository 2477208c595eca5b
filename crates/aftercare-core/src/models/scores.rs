use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::subscale::Subscale;

/// Running raw-score sums, one per subscale.
///
/// Sums only ever grow during a session; a new session starts from zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreAccumulators {
    pub intrusion: u32,
    pub avoidance: u32,
    pub hyperarousal: u32,
}

impl ScoreAccumulators {
    pub fn get(&self, subscale: Subscale) -> u32 {
        match subscale {
            Subscale::Intrusion => self.intrusion,
            Subscale::Avoidance => self.avoidance,
            Subscale::Hyperarousal => self.hyperarousal,
        }
    }

    /// Add `points` to the sum for `subscale`. Saturates rather than wrapping.
    pub fn add(&mut self, subscale: Subscale, points: u32) {
        let sum = match subscale {
            Subscale::Intrusion => &mut self.intrusion,
            Subscale::Avoidance => &mut self.avoidance,
            Subscale::Hyperarousal => &mut self.hyperarousal,
        };
        *sum = sum.saturating_add(points);
    }

    pub fn total(&self) -> u32 {
        self.intrusion
            .saturating_add(self.avoidance)
            .saturating_add(self.hyperarousal)
    }
}
