//! Slot-bag conventions.
//!
//! Dialogue runtimes persist conversation state as a loose key/value bag.
//! These functions define the canonical slot names and convert between that
//! bag and a typed [`SessionSnapshot`], applying the defaulting rules at the
//! boundary so the engine only ever sees valid state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::phase::Phase;
use crate::models::prompt_key::PromptKey;
use crate::models::scores::ScoreAccumulators;
use crate::models::session::SessionSnapshot;
use crate::models::subscale::Subscale;

pub const CURRENT_PHASE: &str = "current_phase";
pub const CURRENT_SUBSCALE: &str = "current_subscale";
pub const CONTEXT_INDEX: &str = "context_index";
pub const QUESTION_INDEX: &str = "question_index";
pub const INTRUSION_SUM: &str = "intrusion_sum";
pub const AVOIDANCE_SUM: &str = "avoidance_sum";
pub const HYPER_SUM: &str = "hyper_sum";
pub const LAST_PROMPT_KEY: &str = "last_prompt_key";

/// Written to [`CURRENT_SUBSCALE`] when the stored subscale was not
/// recognized, so the unknown state survives a round trip.
pub const UNKNOWN_SUBSCALE: &str = "unknown";

/// Raw slot storage as the runtime holds it.
pub type SlotMap = BTreeMap<String, Value>;

/// One changed slot, in the shape of a runtime "slot set" event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SlotUpdate {
    pub slot: String,
    pub value: Value,
}

impl SessionSnapshot {
    /// Read a snapshot from runtime slots.
    ///
    /// Missing or null slots take their phase-start values. Counters accept
    /// integers, floats and numeric strings; negative or non-finite values
    /// clamp to zero. Values of the wrong JSON type are rejected.
    pub fn from_slots(slots: &SlotMap) -> Result<Self, CoreError> {
        let phase = match read_str(slots, CURRENT_PHASE)? {
            None => Phase::Context,
            Some(raw) if raw.trim().is_empty() => Phase::Context,
            Some(raw) => Phase::parse(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "unrecognized phase, treating as subscale assessment");
                Phase::SubscaleAssessment
            }),
        };

        let subscale = match read_str(slots, CURRENT_SUBSCALE)? {
            None => Some(Subscale::Intrusion),
            Some(raw) if raw.trim().is_empty() => Some(Subscale::Intrusion),
            Some(raw) => {
                let parsed = Subscale::parse(&raw);
                if parsed.is_none() {
                    warn!(value = %raw, "unrecognized subscale, treating as empty bank");
                }
                parsed
            }
        };

        let index_slot = match phase {
            Phase::Context => CONTEXT_INDEX,
            Phase::SubscaleAssessment | Phase::Done => QUESTION_INDEX,
        };
        let index = read_count(slots, index_slot)? as usize;

        let last_prompt_key = read_str(slots, LAST_PROMPT_KEY)?
            .map(PromptKey::from)
            .unwrap_or_default();

        let scores = ScoreAccumulators {
            intrusion: read_count(slots, INTRUSION_SUM)?,
            avoidance: read_count(slots, AVOIDANCE_SUM)?,
            hyperarousal: read_count(slots, HYPER_SUM)?,
        };

        Ok(Self {
            phase,
            subscale,
            index,
            last_prompt_key,
            scores,
        })
    }

    /// Write this snapshot as runtime slots. The cursor index goes to the
    /// slot of the active phase; the other index slot is zero.
    pub fn to_slots(&self) -> SlotMap {
        let (context_index, question_index) = match self.phase {
            Phase::Context => (self.index, 0),
            Phase::SubscaleAssessment | Phase::Done => (0, self.index),
        };
        let subscale = self
            .subscale
            .map(|s| s.as_str())
            .unwrap_or(UNKNOWN_SUBSCALE);

        let mut slots = SlotMap::new();
        slots.insert(CURRENT_PHASE.to_string(), Value::from(self.phase.as_str()));
        slots.insert(CURRENT_SUBSCALE.to_string(), Value::from(subscale));
        slots.insert(CONTEXT_INDEX.to_string(), Value::from(context_index));
        slots.insert(QUESTION_INDEX.to_string(), Value::from(question_index));
        slots.insert(INTRUSION_SUM.to_string(), Value::from(self.scores.intrusion));
        slots.insert(AVOIDANCE_SUM.to_string(), Value::from(self.scores.avoidance));
        slots.insert(HYPER_SUM.to_string(), Value::from(self.scores.hyperarousal));
        slots.insert(
            LAST_PROMPT_KEY.to_string(),
            Value::from(self.last_prompt_key.as_str()),
        );
        slots
    }

    /// Slots whose values differ between `before` and `after`, in slot-name
    /// order.
    pub fn diff(before: &SessionSnapshot, after: &SessionSnapshot) -> Vec<SlotUpdate> {
        let old = before.to_slots();
        after
            .to_slots()
            .into_iter()
            .filter(|(slot, value)| old.get(slot) != Some(value))
            .map(|(slot, value)| SlotUpdate { slot, value })
            .collect()
    }
}

fn read_str(slots: &SlotMap, slot: &str) -> Result<Option<String>, CoreError> {
    match slots.get(slot) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(CoreError::InvalidSlot {
            slot: slot.to_string(),
            reason: format!("expected a string, got {other}"),
        }),
    }
}

fn read_count(slots: &SlotMap, slot: &str) -> Result<u32, CoreError> {
    let raw = match slots.get(slot) {
        None | Some(Value::Null) => return Ok(0),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(0),
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|e| CoreError::InvalidSlot {
            slot: slot.to_string(),
            reason: format!("'{s}' is not a number: {e}"),
        })?,
        Some(other) => {
            return Err(CoreError::InvalidSlot {
                slot: slot.to_string(),
                reason: format!("expected a number, got {other}"),
            });
        }
    };

    if !raw.is_finite() || raw < 0.0 {
        return Ok(0);
    }
    // Saturating float-to-int cast; fractional parts truncate.
    Ok(raw as u32)
}
