use aftercare_core::models::phase::Phase;
use aftercare_core::models::prompt_key::PromptKey;
use aftercare_core::models::session::SessionSnapshot;
use aftercare_core::models::subscale::Subscale;
use aftercare_core::slots::{self, SlotMap};
use serde_json::json;

fn slot_map(value: serde_json::Value) -> SlotMap {
    serde_json::from_value(value).expect("test slots should be an object")
}

#[test]
fn empty_slots_default_to_phase_start() {
    let snapshot = SessionSnapshot::from_slots(&SlotMap::new()).unwrap();
    assert_eq!(snapshot, SessionSnapshot::initial());
}

#[test]
fn float_slots_from_runtime_are_accepted() {
    let slots = slot_map(json!({
        "current_phase": "iesr",
        "current_subscale": "avoidance",
        "context_index": 5.0,
        "question_index": 3.0,
        "intrusion_sum": 17.0,
        "avoidance_sum": "6",
        "hyper_sum": null,
        "last_prompt_key": "iesr:avoidance:3",
    }));

    let snapshot = SessionSnapshot::from_slots(&slots).unwrap();
    assert_eq!(snapshot.phase, Phase::SubscaleAssessment);
    assert_eq!(snapshot.subscale, Some(Subscale::Avoidance));
    assert_eq!(snapshot.index, 3);
    assert_eq!(snapshot.scores.intrusion, 17);
    assert_eq!(snapshot.scores.avoidance, 6);
    assert_eq!(snapshot.scores.hyperarousal, 0);
    assert_eq!(snapshot.last_prompt_key.as_str(), "iesr:avoidance:3");
}

#[test]
fn context_phase_reads_context_index() {
    let slots = slot_map(json!({
        "current_phase": "Context",
        "context_index": 4,
        "question_index": 7,
    }));

    let snapshot = SessionSnapshot::from_slots(&slots).unwrap();
    assert_eq!(snapshot.phase, Phase::Context);
    assert_eq!(snapshot.index, 4);
}

#[test]
fn negative_and_fractional_counts_are_clamped() {
    let slots = slot_map(json!({
        "current_phase": "iesr",
        "question_index": -2.0,
        "intrusion_sum": 7.9,
    }));

    let snapshot = SessionSnapshot::from_slots(&slots).unwrap();
    assert_eq!(snapshot.index, 0);
    assert_eq!(snapshot.scores.intrusion, 7);
}

#[test]
fn unknown_subscale_is_kept_as_none() {
    let slots = slot_map(json!({
        "current_phase": "iesr",
        "current_subscale": "dissociation",
    }));

    let snapshot = SessionSnapshot::from_slots(&slots).unwrap();
    assert_eq!(snapshot.subscale, None);

    let round_trip = SessionSnapshot::from_slots(&snapshot.to_slots()).unwrap();
    assert_eq!(round_trip.subscale, None);
}

#[test]
fn unknown_phase_is_treated_as_subscale_assessment() {
    let slots = slot_map(json!({ "current_phase": "wrap_up" }));
    let snapshot = SessionSnapshot::from_slots(&slots).unwrap();
    assert_eq!(snapshot.phase, Phase::SubscaleAssessment);
}

#[test]
fn wrong_slot_type_is_rejected() {
    let slots = slot_map(json!({ "intrusion_sum": { "value": 3 } }));
    let err = SessionSnapshot::from_slots(&slots).unwrap_err();
    assert!(err.to_string().contains("intrusion_sum"), "got: {err}");

    let slots = slot_map(json!({ "current_phase": 2 }));
    assert!(SessionSnapshot::from_slots(&slots).is_err());

    let slots = slot_map(json!({ "question_index": "three" }));
    assert!(SessionSnapshot::from_slots(&slots).is_err());
}

#[test]
fn to_slots_round_trips() {
    let mut snapshot = SessionSnapshot::initial();
    snapshot.phase = Phase::SubscaleAssessment;
    snapshot.subscale = Some(Subscale::Hyperarousal);
    snapshot.index = 2;
    snapshot.last_prompt_key =
        PromptKey::for_question(Phase::SubscaleAssessment, Some(Subscale::Hyperarousal), 2);
    snapshot.scores.intrusion = 20;
    snapshot.scores.avoidance = 11;
    snapshot.scores.hyperarousal = 5;

    let restored = SessionSnapshot::from_slots(&snapshot.to_slots()).unwrap();
    assert_eq!(restored, snapshot);
}

#[test]
fn diff_lists_only_changed_slots_in_name_order() {
    let before = SessionSnapshot::initial();
    let mut after = before.clone();
    after.index = 1;
    after.last_prompt_key = PromptKey::for_question(Phase::Context, None, 1);

    let updates = SessionSnapshot::diff(&before, &after);
    let names: Vec<_> = updates.iter().map(|u| u.slot.as_str()).collect();
    assert_eq!(names, vec![slots::CONTEXT_INDEX, slots::LAST_PROMPT_KEY]);
    assert_eq!(updates[0].value, json!(1));
    assert_eq!(updates[1].value, json!("context:none:1"));
}

#[test]
fn diff_of_identical_snapshots_is_empty() {
    let snapshot = SessionSnapshot::initial();
    assert!(SessionSnapshot::diff(&snapshot, &snapshot).is_empty());
}
