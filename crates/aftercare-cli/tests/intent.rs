use aftercare_cli::intent::label_answer;
use aftercare_core::models::phase::Phase;
use aftercare_core::models::session::SessionSnapshot;
use aftercare_core::models::subscale::Subscale;

fn assessing(subscale: Subscale) -> SessionSnapshot {
    SessionSnapshot {
        phase: Phase::SubscaleAssessment,
        subscale: Some(subscale),
        ..SessionSnapshot::initial()
    }
}

#[test]
fn answers_are_labelled_with_the_active_subscale() {
    assert_eq!(
        label_answer(&assessing(Subscale::Avoidance), "I stay away from the ward"),
        Some("express_avoidance_symptoms")
    );
    assert_eq!(
        label_answer(&assessing(Subscale::Hyperarousal), "jumpy"),
        Some("express_hyperarousal_symptoms")
    );
}

#[test]
fn context_answers_are_not_labelled() {
    assert_eq!(label_answer(&SessionSnapshot::initial(), "I'm a nurse"), None);
}

#[test]
fn blank_answers_are_not_labelled() {
    assert_eq!(label_answer(&assessing(Subscale::Intrusion), "   "), None);
}

#[test]
fn unknown_subscale_is_not_labelled() {
    let snapshot = SessionSnapshot {
        subscale: None,
        ..assessing(Subscale::Intrusion)
    };
    assert_eq!(label_answer(&snapshot, "all the time"), None);
}
