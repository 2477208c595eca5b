use aftercare_core::models::phase::Phase;
use aftercare_core::models::prompt_key::PromptKey;
use aftercare_core::models::scores::ScoreAccumulators;
use aftercare_core::models::session::SessionSnapshot;
use aftercare_core::models::subscale::Subscale;

#[test]
fn prompt_keys_are_deterministic() {
    assert_eq!(
        PromptKey::for_question(Phase::Context, None, 0).as_str(),
        "context:none:0"
    );
    assert_eq!(
        PromptKey::for_question(Phase::SubscaleAssessment, Some(Subscale::Avoidance), 4).as_str(),
        "iesr:avoidance:4"
    );
    assert!(PromptKey::empty().is_empty());
}

#[test]
fn context_cursor_ignores_preselected_subscale() {
    let snapshot = SessionSnapshot::initial();
    assert_eq!(snapshot.subscale, Some(Subscale::Intrusion));
    assert_eq!(snapshot.cursor().prompt_key().as_str(), "context:none:0");
    assert_eq!(snapshot.cursor().successor().prompt_key().as_str(), "context:none:1");
}

#[test]
fn subscales_follow_fixed_order() {
    assert_eq!(Subscale::Intrusion.next(), Some(Subscale::Avoidance));
    assert_eq!(Subscale::Avoidance.next(), Some(Subscale::Hyperarousal));
    assert_eq!(Subscale::Hyperarousal.next(), None);
}

#[test]
fn intents_map_to_subscales() {
    assert_eq!(
        Subscale::from_intent("express_hyperarousal_symptoms"),
        Some(Subscale::Hyperarousal)
    );
    assert_eq!(Subscale::from_intent("greet"), None);
    assert_eq!(Subscale::from_intent(""), None);
}

#[test]
fn phase_parse_accepts_both_spellings() {
    assert_eq!(Phase::parse("IESR"), Some(Phase::SubscaleAssessment));
    assert_eq!(Phase::parse("subscale_assessment"), Some(Phase::SubscaleAssessment));
    assert_eq!(Phase::parse("done"), Some(Phase::Done));
    assert_eq!(Phase::parse("later"), None);
}

#[test]
fn accumulators_add_per_subscale() {
    let mut scores = ScoreAccumulators::default();
    scores.add(Subscale::Intrusion, 4);
    scores.add(Subscale::Intrusion, 3);
    scores.add(Subscale::Hyperarousal, 1);
    assert_eq!(scores.get(Subscale::Intrusion), 7);
    assert_eq!(scores.get(Subscale::Avoidance), 0);
    assert_eq!(scores.total(), 8);

    scores.add(Subscale::Avoidance, u32::MAX);
    scores.add(Subscale::Avoidance, 1);
    assert_eq!(scores.avoidance, u32::MAX);
}

#[test]
fn snapshot_serializes_with_slot_spellings() {
    let json = serde_json::to_value(SessionSnapshot::initial()).unwrap();
    assert_eq!(json["phase"], "context");
    assert_eq!(json["subscale"], "intrusion");
    assert_eq!(json["last_prompt_key"], "");
}
