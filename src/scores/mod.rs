// scores/mod.rs - Score input types and validation

pub mod parser;

pub use parser::{parse_score_text, payload_from_text};

use crate::error::PipelineError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Request keys for the single and dual payload shapes
pub const SINGLE_KEY: &str = "discScores";
pub const NATURAL_KEY: &str = "naturalScores";
pub const ADAPTED_KEY: &str = "adaptadoScores";

const FACTORS: [&str; 4] = ["d", "i", "s", "c"];

/// Scores above this are accepted but outside the scale the ruleset assumes
pub const SCORE_SCALE_MAX: u32 = 100;

/// The four DISC dimensions of one profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub d: u32,
    pub i: u32,
    pub s: u32,
    pub c: u32,
}

/// Which report the caller asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportVariant {
    SingleProfile,
    DualProfile,
}

impl fmt::Display for ReportVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportVariant::SingleProfile => write!(f, "single-profile"),
            ReportVariant::DualProfile => write!(f, "dual-profile"),
        }
    }
}

/// Validated scores, ready for the prompt compiler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorePayload {
    Single(ScoreSet),
    Dual {
        natural: ScoreSet,
        adaptado: ScoreSet,
    },
}

impl ScorePayload {
    pub fn variant(&self) -> ReportVariant {
        match self {
            ScorePayload::Single(_) => ReportVariant::SingleProfile,
            ScorePayload::Dual { .. } => ReportVariant::DualProfile,
        }
    }
}

/// Validate an inbound request body.
///
/// A body carrying either dual key is a dual-profile request; anything else is
/// read as a single profile under `discScores`. Presence is checked by type, so
/// a score of `0` is a legitimate value.
pub fn validate_payload(body: &Value) -> Result<ScorePayload, PipelineError> {
    let is_dual = body.get(NATURAL_KEY).is_some() || body.get(ADAPTED_KEY).is_some();

    if is_dual {
        let variant = ReportVariant::DualProfile;
        let natural = validate_score_set(body.get(NATURAL_KEY), NATURAL_KEY, variant)?;
        let adaptado = validate_score_set(body.get(ADAPTED_KEY), ADAPTED_KEY, variant)?;
        Ok(ScorePayload::Dual { natural, adaptado })
    } else {
        let set = validate_score_set(
            body.get(SINGLE_KEY),
            SINGLE_KEY,
            ReportVariant::SingleProfile,
        )?;
        Ok(ScorePayload::Single(set))
    }
}

/// Validate one `{d, i, s, c}` block found under `prefix`
pub fn validate_score_set(
    value: Option<&Value>,
    prefix: &str,
    variant: ReportVariant,
) -> Result<ScoreSet, PipelineError> {
    let object = value
        .and_then(Value::as_object)
        .ok_or_else(|| PipelineError::IncompleteInput {
            variant,
            field: prefix.to_string(),
        })?;

    let mut values = [0u32; 4];
    for (slot, factor) in values.iter_mut().zip(FACTORS) {
        let field = format!("{}.{}", prefix, factor);
        *slot = object
            .get(factor)
            .and_then(as_whole_score)
            .ok_or(PipelineError::IncompleteInput { variant, field })?;
    }

    let [d, i, s, c] = values;
    let set = ScoreSet { d, i, s, c };
    warn_if_off_scale(&set, prefix);
    Ok(set)
}

fn as_whole_score(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok();
    }
    // Accept `90.0` but not `90.5` or negatives
    let f = value.as_f64()?;
    if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= f64::from(u32::MAX) {
        Some(f as u32)
    } else {
        None
    }
}

fn warn_if_off_scale(set: &ScoreSet, prefix: &str) {
    let max = set.d.max(set.i).max(set.s).max(set.c);
    if max > SCORE_SCALE_MAX {
        tracing::warn!(
            "Scores in '{}' exceed {} (max={}); interpretation assumes a 0-100 scale",
            prefix,
            SCORE_SCALE_MAX,
            max
        );
    }
}
