//! Closing summary.
//!
//! Each subscale sum is normalized by the number of questions in that
//! subscale, banded, and the three bands collapse into one overall profile.
//! Each profile has exactly one fixed closing message.

use aftercare_core::models::scores::ScoreAccumulators;
use aftercare_core::models::subscale::Subscale;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use ts_rs::TS;

use crate::banks;
use crate::instruments::iesr::Iesr;
use crate::scoring::ScoreEntry;
use crate::Instrument;

/// Qualitative band for a normalized subscale score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Band {
    Low,
    Mild,
    Moderate,
    High,
}

impl Band {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < 1.0 {
            Band::Low
        } else if ratio < 2.0 {
            Band::Mild
        } else if ratio < 3.0 {
            Band::Moderate
        } else {
            Band::High
        }
    }

    pub fn is_moderate_or_higher(&self) -> bool {
        *self >= Band::Moderate
    }

    /// Wording used when a band is shown to a person.
    pub fn label(&self) -> &'static str {
        match self {
            Band::Low => "minimal",
            Band::Mild => "mild to moderate",
            Band::Moderate => "moderate to marked",
            Band::High => "high",
        }
    }
}

/// Overall closing-message category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Profile {
    Heavier,
    Avoidant,
    Mild,
    Light,
}

impl Profile {
    /// Priority: intrusion or hyperarousal at moderate or above, then
    /// avoidance at moderate or above, then any mild band.
    pub fn from_bands(intrusion: Band, avoidance: Band, hyperarousal: Band) -> Self {
        if intrusion.is_moderate_or_higher() || hyperarousal.is_moderate_or_higher() {
            Profile::Heavier
        } else if avoidance.is_moderate_or_higher() {
            Profile::Avoidant
        } else if [intrusion, avoidance, hyperarousal].contains(&Band::Mild) {
            Profile::Mild
        } else {
            Profile::Light
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Profile::Heavier => HEAVIER_MESSAGE,
            Profile::Avoidant => AVOIDANT_MESSAGE,
            Profile::Mild => MILD_MESSAGE,
            Profile::Light => LIGHT_MESSAGE,
        }
    }
}

pub const HEAVIER_MESSAGE: &str = "Thank you for walking through all of this with me. \
It sounds like memories of what happened and the way your body has been reacting \
are weighing on you quite a bit right now. That is a very human response to a hard \
experience, and you don't have to carry it alone. Two minutes of slow breathing or a \
grounding check-in can take the edge off in the moment, and because these reactions \
seem to be getting in the way, a conversation with a counselor or a peer-support \
colleague could really help. If you'd like, we can try a coping practice now, or I \
can share resources.";

pub const AVOIDANT_MESSAGE: &str = "Thank you for walking through all of this with me. \
It sounds like you've been keeping some distance from what happened, pushing it away \
or steering around reminders. That's a common way to cope, and it can make sense for \
a while. When you feel ready, gently making room to talk it through with someone you \
trust, or with a counselor, can keep it from quietly building up. If you'd like, we \
can try a short grounding practice now, or I can share resources.";

pub const MILD_MESSAGE: &str = "Thank you for walking through all of this with me. \
It sounds like some reactions show up now and then, but they don't seem to be taking \
over. A small routine to support sleep, a brief daily walk, or a two-minute breathing \
break can help keep things steady. If these reactions start getting in the way, a \
quick chat with a counselor can really help. If you'd like, I can share a few \
resources.";

pub const LIGHT_MESSAGE: &str = "Thank you for walking through all of this with me. \
From what you've shared, it sounds like you're coping fairly well right now. It's \
still worth checking in with yourself over the next few weeks, since reactions can \
show up later. Support is here if anything changes, and I can share resources \
whenever they'd be useful.";

/// Normalized score for one subscale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubscaleResult {
    pub subscale: Subscale,
    pub raw: u32,
    pub ratio: f64,
    pub band: Band,
}

/// The outcome of a completed assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SummaryReport {
    pub intrusion: SubscaleResult,
    pub avoidance: SubscaleResult,
    pub hyperarousal: SubscaleResult,
    pub profile: Profile,
    pub message: String,
}

impl SummaryReport {
    pub fn results(&self) -> [&SubscaleResult; 3] {
        [&self.intrusion, &self.avoidance, &self.hyperarousal]
    }

    /// One `caption: band` line per subscale, in administration order.
    pub fn band_lines(&self) -> Vec<String> {
        self.results()
            .into_iter()
            .map(|r| format!("{}: {}", caption(r.subscale), r.band.label()))
            .collect()
    }
}

/// How a subscale is named when its band is shown to a person.
pub fn caption(subscale: Subscale) -> &'static str {
    match subscale {
        Subscale::Intrusion => "Thoughts & memories",
        Subscale::Avoidance => "Pulling away/avoiding",
        Subscale::Hyperarousal => "Body responses (sleep, startle, focus)",
    }
}

/// Raw sum divided by the number of questions in the subscale.
pub fn normalize(subscale: Subscale, raw: u32) -> f64 {
    let items = banks::subscale_questions(Some(subscale)).len();
    f64::from(raw) / items as f64
}

fn result(scores: &ScoreAccumulators, subscale: Subscale) -> SubscaleResult {
    let raw = scores.get(subscale);
    let ratio = normalize(subscale, raw);
    SubscaleResult {
        subscale,
        raw,
        ratio,
        band: Band::from_ratio(ratio),
    }
}

/// Build the closing summary from the final accumulators.
///
/// Sums outside the instrument's valid range are logged but still
/// summarized; the conversation always ends with a message.
pub fn summarize(scores: &ScoreAccumulators) -> SummaryReport {
    let entries: Vec<ScoreEntry> = Subscale::ALL
        .into_iter()
        .map(|subscale| ScoreEntry {
            subscale,
            value: f64::from(scores.get(subscale)),
        })
        .collect();
    for error in Iesr.validate_scores(&entries) {
        warn!(subscale = %error.subscale, value = error.value, "{error}");
    }

    let intrusion = result(scores, Subscale::Intrusion);
    let avoidance = result(scores, Subscale::Avoidance);
    let hyperarousal = result(scores, Subscale::Hyperarousal);
    let profile = Profile::from_bands(intrusion.band, avoidance.band, hyperarousal.band);

    info!(
        intrusion = ?intrusion.band,
        avoidance = ?avoidance.band,
        hyperarousal = ?hyperarousal.band,
        profile = ?profile,
        "assessment summarized"
    );

    SummaryReport {
        intrusion,
        avoidance,
        hyperarousal,
        profile,
        message: profile.message().to_string(),
    }
}
