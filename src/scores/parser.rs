// scores/parser.rs - Score file parsing: "D:85, I:70, S:40, C:30" text or a JSON object

use super::{
    validate_payload, validate_score_set, ReportVariant, ScorePayload, ScoreSet, ADAPTED_KEY,
    NATURAL_KEY, SINGLE_KEY,
};
use crate::error::PipelineError;
use regex::Regex;
use std::sync::OnceLock;

fn factor_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b([DISC])\s*:\s*(\d+)").expect("factor pattern is valid")
    })
}

/// Parse a single-profile score set from the contents of an assessment file
pub fn parse_score_text(content: &str) -> Result<ScoreSet, PipelineError> {
    let trimmed = content.trim();
    let variant = ReportVariant::SingleProfile;

    if trimmed.starts_with('{') {
        let value: serde_json::Value =
            serde_json::from_str(trimmed).map_err(|_| PipelineError::IncompleteInput {
                variant,
                field: SINGLE_KEY.to_string(),
            })?;
        return validate_score_set(Some(&value), SINGLE_KEY, variant);
    }

    let mut found: [Option<u32>; 4] = [None; 4];
    for caps in factor_pattern().captures_iter(trimmed) {
        let slot = match caps[1].to_ascii_lowercase().as_str() {
            "d" => 0,
            "i" => 1,
            "s" => 2,
            _ => 3,
        };
        // An overflowing value never displaces an earlier valid one
        if let Ok(score) = caps[2].parse::<u32>() {
            found[slot] = Some(score);
        }
    }

    let missing = |factor: &str| PipelineError::IncompleteInput {
        variant,
        field: format!("{}.{}", SINGLE_KEY, factor),
    };

    let set = ScoreSet {
        d: found[0].ok_or_else(|| missing("d"))?,
        i: found[1].ok_or_else(|| missing("i"))?,
        s: found[2].ok_or_else(|| missing("s"))?,
        c: found[3].ok_or_else(|| missing("c"))?,
    };

    tracing::info!(
        "Parsed score file: D={} I={} S={} C={}",
        set.d,
        set.i,
        set.s,
        set.c
    );
    Ok(set)
}

/// Read a payload from file contents: a full request body (single or dual)
/// or, failing that, a single-profile score text
pub fn payload_from_text(content: &str) -> Result<ScorePayload, PipelineError> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(content) {
        let is_request_body = [SINGLE_KEY, NATURAL_KEY, ADAPTED_KEY]
            .iter()
            .any(|key| value.get(key).is_some());
        if is_request_body {
            return validate_payload(&value);
        }
    }
    parse_score_text(content).map(ScorePayload::Single)
}
