use aftercare_core::models::subscale::Subscale;

use crate::banks;
use crate::scoring::{Domain, ScoreRange, ScoreType, SubscaleSpec};
use crate::Instrument;

/// Single-answer severity, as assigned by the keyword heuristic.
pub const ITEM_RANGE: ScoreRange = ScoreRange {
    min: 1.0,
    max: 4.0,
    step: Some(1.0),
};

/// IES-R: Impact of Event Scale, Revised.
/// Intrusion, Avoidance, Hyperarousal subscales, administered
/// conversationally. Raw sums; higher = more distress.
pub struct Iesr;

impl Instrument for Iesr {
    fn id(&self) -> &str {
        "iesr"
    }

    fn name(&self) -> &str {
        "IES-R"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            vec![Domain {
                id: "symptom_subscales".to_string(),
                name: "Symptom Subscales".to_string(),
                subscales: vec![
                    subscale(Subscale::Intrusion, "Intrusion"),
                    subscale(Subscale::Avoidance, "Avoidance"),
                    subscale(Subscale::Hyperarousal, "Hyperarousal"),
                ],
                description: Some(
                    "Sums of per-answer severities; unscored answers add nothing".to_string(),
                ),
            }]
        });
        &DOMAINS
    }
}

fn subscale(subscale: Subscale, name: &str) -> SubscaleSpec {
    let item_count = banks::subscale_questions(Some(subscale)).len();
    SubscaleSpec {
        subscale,
        name: name.to_string(),
        score_type: ScoreType::Raw,
        // Zero is reachable when answers carried no symptom intent.
        range: ScoreRange {
            min: 0.0,
            max: ITEM_RANGE.max * item_count as f64,
            step: Some(1.0),
        },
        item_count,
        item_range: ITEM_RANGE,
        description: None,
    }
}
