// prompt_engine/types.rs - Core types for the Prompt Compiler

use crate::scores::ReportVariant;
use serde::{Deserialize, Serialize};

/// Fixed sections of one report variant's prompt
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    pub id: &'static str,
    pub context: &'static str,
    pub rules: &'static str,
    /// JSON template with `{{factor}}` placeholders for the caller's scores
    pub output_schema: &'static str,
}

/// A fully rendered prompt, ready to send to the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPrompt {
    pub text: String,
    pub variant: ReportVariant,
}

/// Provider request envelope: `{ "contents": [{ "parts": [{ "text": ... }] }] }`
#[derive(Debug, Serialize)]
pub struct GenerationRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

impl GenerationRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

/// Provider response envelope. Only the first candidate's first text part is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGenerationResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl RawGenerationResponse {
    /// `candidates[0].content.parts[0].text`, if present and non-blank
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.first())
            .and_then(|p| p.text.as_deref())
            .filter(|text| !text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_envelope_shape() {
        let request = GenerationRequest::from_prompt("hello");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "contents": [{ "parts": [{ "text": "hello" }] }] })
        );
    }

    #[test]
    fn test_first_text_reads_first_candidate() {
        let raw: RawGenerationResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                { "content": { "parts": [{ "text": "first" }, { "text": "second" }] } },
                { "content": { "parts": [{ "text": "other" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(raw.first_text(), Some("first"));
    }

    #[test]
    fn test_first_text_absent_cases() {
        let cases = [
            serde_json::json!({}),
            serde_json::json!({ "candidates": [] }),
            serde_json::json!({ "candidates": [{}] }),
            serde_json::json!({ "candidates": [{ "content": { "parts": [] } }] }),
            serde_json::json!({ "candidates": [{ "content": { "parts": [{ "text": "  " }] } }] }),
        ];
        for case in cases {
            let raw: RawGenerationResponse = serde_json::from_value(case).unwrap();
            assert_eq!(raw.first_text(), None);
        }
    }
}
