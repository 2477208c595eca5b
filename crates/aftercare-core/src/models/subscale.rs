use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One of the three IES-R symptom subscales, in administration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Subscale {
    Intrusion,
    Avoidance,
    Hyperarousal,
}

impl Subscale {
    /// All subscales in the order they are administered.
    pub const ALL: [Subscale; 3] = [
        Subscale::Intrusion,
        Subscale::Avoidance,
        Subscale::Hyperarousal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subscale::Intrusion => "intrusion",
            Subscale::Avoidance => "avoidance",
            Subscale::Hyperarousal => "hyperarousal",
        }
    }

    /// Parse a slot value, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "intrusion" => Some(Subscale::Intrusion),
            "avoidance" => Some(Subscale::Avoidance),
            "hyperarousal" => Some(Subscale::Hyperarousal),
            _ => None,
        }
    }

    /// The subscale administered after this one, or `None` after the last.
    pub fn next(&self) -> Option<Self> {
        match self {
            Subscale::Intrusion => Some(Subscale::Avoidance),
            Subscale::Avoidance => Some(Subscale::Hyperarousal),
            Subscale::Hyperarousal => None,
        }
    }

    /// Intent label the dialogue runtime assigns to an answer describing
    /// symptoms of this subscale.
    pub fn expression_intent(&self) -> &'static str {
        match self {
            Subscale::Intrusion => "express_intrusion_symptoms",
            Subscale::Avoidance => "express_avoidance_symptoms",
            Subscale::Hyperarousal => "express_hyperarousal_symptoms",
        }
    }

    /// Map a runtime intent label back to the subscale it scores, if any.
    pub fn from_intent(intent: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.expression_intent() == intent)
    }
}

impl std::fmt::Display for Subscale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
