use aftercare_bedrock::phrasing::{BedrockPhraser, CannedPhraser, Phraser};
use aftercare_bedrock::tone::{fallback_phrasing, pick_tone, GENTLE, THANKS, VALIDATING};

#[test]
fn tone_has_one_phrase_from_each_bank() {
    for _ in 0..20 {
        let tone = pick_tone();
        assert!(THANKS.iter().any(|p| tone.starts_with(p)), "got: {tone}");
        assert!(VALIDATING.iter().any(|p| tone.contains(p)), "got: {tone}");
        assert!(GENTLE.iter().any(|p| tone.ends_with(p)), "got: {tone}");
    }
}

#[test]
fn fallback_ends_with_the_literal_question() {
    let question = "Do you try to push the memory away?";
    let text = fallback_phrasing(question);
    assert!(text.ends_with(&format!(" {question}")));
    assert!(text.len() > question.len());
}

#[tokio::test]
async fn canned_phraser_never_fails() {
    let text = CannedPhraser
        .reflect_and_ask("", "Has it been tough to concentrate?")
        .await
        .expect("canned phrasing is infallible");
    assert!(text.ends_with("Has it been tough to concentrate?"));
}

/// Live call against Bedrock. Requires AWS credentials and
/// `AFTERCARE_MODEL_ID` in the environment.
///
/// Run with: `cargo test -p aftercare-bedrock --test phrasing -- --ignored`
#[tokio::test]
#[ignore]
async fn bedrock_phraser_returns_two_sentences() {
    let model_id = std::env::var("AFTERCARE_MODEL_ID").expect("AFTERCARE_MODEL_ID must be set");
    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new("us-east-1"))
        .load()
        .await;
    let phraser = BedrockPhraser::new(&config, model_id);

    let text = phraser
        .reflect_and_ask(
            "I can't stop thinking about the medication error.",
            "Have thoughts about it made it hard to fall or stay asleep?",
        )
        .await
        .expect("bedrock phrasing should succeed");

    println!("{text}");
    assert!(text.contains('?'), "expected a question, got: {text}");
    assert!(!text.contains('"'), "expected no quotation marks, got: {text}");
}
