//! Prompt builder for reflect-and-ask phrasing.
//!
//! The model is asked for exactly two sentences: a reflection of what the
//! user said, then one paraphrase of the next question. It must not invent
//! new questions or drop the paraphrase.

/// Upper bound on the reply length, across both sentences.
pub const MAX_WORDS: usize = 45;

/// Build the single user-turn prompt sent to the model.
pub fn build_phrasing_prompt(user_text: &str, next_question: &str, tone_hint: &str) -> String {
    let mut prompt = String::from(
        "You are a trauma-informed conversational coach. Write exactly 2 sentences:\n\n",
    );

    prompt.push_str(
        "1) Reflect back what the user just expressed in a natural, empathetic way. \
         No advice. No judgment. No \"I understand that...\". \
         Keep it concise and human, as if you're mirroring their feelings and meaning.\n\n",
    );
    prompt.push_str(
        "2) Ask ONE gentle follow-up question that paraphrases this exact question \
         while keeping its meaning:\n",
    );
    prompt.push_str(&format!("<question>{next_question}</question>\n\n"));

    prompt.push_str("Constraints:\n");
    prompt.push_str("- Do NOT include quotation marks.\n");
    prompt.push_str("- Do NOT repeat earlier prompts or greetings.\n");
    prompt.push_str("- Do NOT ask any question other than the paraphrase.\n");
    prompt.push_str("- Stay warm, concise, and human.\n");
    prompt.push_str(&format!("- Max {MAX_WORDS} words across both sentences.\n\n"));

    prompt.push_str(&format!("<user_said>{}</user_said>\n", user_text.trim()));
    prompt.push_str(&format!("<tone_hint>{tone_hint}</tone_hint>"));
    prompt
}

/// Tidy a raw model reply: trim whitespace and any wrapping quotation marks.
/// Returns `None` when nothing usable remains.
pub fn clean_reply(raw: &str) -> Option<String> {
    let cleaned = raw
        .trim()
        .trim_matches(|c| c == '"' || c == '\u{201C}' || c == '\u{201D}')
        .trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}
