use aftercare_instruments::severity::{estimate_severity, Severity};

#[test]
fn empty_and_absent_text_score_the_floor() {
    assert_eq!(estimate_severity(None), Severity::MINIMAL);
    assert_eq!(estimate_severity(Some("")), Severity::MINIMAL);
    assert_eq!(estimate_severity(Some("   ")), Severity::MINIMAL);
}

#[test]
fn each_tier_is_recognized() {
    assert_eq!(estimate_severity(Some("It keeps happening")).value(), 4);
    assert_eq!(estimate_severity(Some("I think about it most days")).value(), 3);
    assert_eq!(estimate_severity(Some("it comes and goes")).value(), 2);
    assert_eq!(estimate_severity(Some("only once in a while")).value(), 1);
    assert_eq!(estimate_severity(Some("no idea")).value(), 1);
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(estimate_severity(Some("PANIC attacks")), Severity::INTENSE);
    assert_eq!(estimate_severity(Some("Frequently, yes")), Severity::FREQUENT);
}

#[test]
fn more_intense_tier_wins() {
    assert_eq!(
        estimate_severity(Some("overwhelmed and it happens often")),
        Severity::INTENSE
    );
    assert_eq!(
        estimate_severity(Some("sometimes, but often at night")),
        Severity::FREQUENT
    );
    assert_eq!(
        estimate_severity(Some("a little, some days")),
        Severity::MODERATE
    );
}

#[test]
fn every_input_stays_in_range() {
    let samples = [
        "",
        "extremely",
        "rarely",
        "\u{1F600} emoji only",
        "ÉVERY NIGHT",
        "all the time all the time all the time",
        "moderately often",
    ];
    for sample in samples {
        let severity = estimate_severity(Some(sample)).value();
        assert!((1..=4).contains(&severity), "{sample:?} scored {severity}");
    }
}
