// prompt_engine/mod.rs - Prompt Compiler

mod templates;
mod types;
pub mod llm;

pub use types::{
    CompiledPrompt, GenerationRequest, PromptTemplate, RawGenerationResponse,
};

use crate::scores::{ScorePayload, ScoreSet};

/// Prompt Compiler - renders validated scores into a provider prompt.
///
/// Output is a pure function of the payload: no clock, no randomness, so the
/// same scores always yield byte-identical text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptCompiler;

impl PromptCompiler {
    pub fn new() -> Self {
        Self
    }

    /// Compile the prompt for the payload's report variant
    pub fn compile(&self, payload: &ScorePayload) -> CompiledPrompt {
        let (template, schema) = match payload {
            ScorePayload::Single(scores) => {
                let template = templates::SINGLE_PROFILE;
                let schema = substitute_scores(template.output_schema, "", scores);
                (template, schema)
            }
            ScorePayload::Dual { natural, adaptado } => {
                let template = templates::DUAL_PROFILE;
                let schema = substitute_scores(template.output_schema, "natural.", natural);
                let schema = substitute_scores(&schema, "adaptado.", adaptado);
                (template, schema)
            }
        };

        let text = apply_template(&template, &schema);

        tracing::debug!(
            "Compiled '{}' prompt ({} chars)",
            template.id,
            text.len()
        );

        CompiledPrompt {
            text,
            variant: payload.variant(),
        }
    }

    /// The fixed sections of a template, exposed for inspection
    pub fn template_for(payload: &ScorePayload) -> PromptTemplate {
        match payload {
            ScorePayload::Single(_) => templates::SINGLE_PROFILE,
            ScorePayload::Dual { .. } => templates::DUAL_PROFILE,
        }
    }
}

// --- Private helpers ---

fn apply_template(template: &PromptTemplate, schema: &str) -> String {
    format!(
        "### 1. PERSONA\n{}\n\n\
        ### 2. CONTEXTO E OBJETIVO\n{}\n\n\
        ### 3. REGRAS E CONHECIMENTO ESPECÍFICO (O CÉREBRO DA PSICÓLOGA)\n{}\n\n\
        ### 4. ESTRUTURA DE SAÍDA\n{}\n\n{}\n",
        templates::PERSONA,
        template.context,
        template.rules,
        templates::OUTPUT_INSTRUCTIONS,
        schema,
    )
}

fn substitute_scores(schema: &str, prefix: &str, scores: &ScoreSet) -> String {
    schema
        .replace(&format!("{{{{{}d}}}}", prefix), &scores.d.to_string())
        .replace(&format!("{{{{{}i}}}}", prefix), &scores.i.to_string())
        .replace(&format!("{{{{{}s}}}}", prefix), &scores.s.to_string())
        .replace(&format!("{{{{{}c}}}}", prefix), &scores.c.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(d: u32, i: u32, s: u32, c: u32) -> ScorePayload {
        ScorePayload::Single(ScoreSet { d, i, s, c })
    }

    #[test]
    fn test_single_prompt_embeds_scores() {
        let prompt = PromptCompiler::new().compile(&single(90, 40, 20, 70));
        assert!(prompt.text.contains("\"d\": 90"));
        assert!(prompt.text.contains("\"i\": 40"));
        assert!(prompt.text.contains("\"s\": 20"));
        assert!(prompt.text.contains("\"c\": 70"));
        assert!(!prompt.text.contains("{{"));
    }

    #[test]
    fn test_prompt_has_four_sections_in_order() {
        let prompt = PromptCompiler::new().compile(&single(1, 2, 3, 4)).text;
        let persona = prompt.find("### 1. PERSONA").unwrap();
        let context = prompt.find("### 2. CONTEXTO E OBJETIVO").unwrap();
        let rules = prompt.find("### 3. REGRAS").unwrap();
        let schema = prompt.find("### 4. ESTRUTURA DE SAÍDA").unwrap();
        assert!(persona < context && context < rules && rules < schema);
    }

    #[test]
    fn test_compile_is_deterministic() {
        let compiler = PromptCompiler::new();
        for payload in [
            single(0, 0, 0, 0),
            single(100, 100, 100, 100),
            single(90, 40, 20, 70),
            ScorePayload::Dual {
                natural: ScoreSet { d: 30, i: 20, s: 85, c: 25 },
                adaptado: ScoreSet { d: 60, i: 20, s: 70, c: 25 },
            },
        ] {
            assert_eq!(compiler.compile(&payload), compiler.compile(&payload));
        }
    }

    #[test]
    fn test_different_scores_yield_different_prompts() {
        let compiler = PromptCompiler::new();
        assert_ne!(
            compiler.compile(&single(90, 40, 20, 70)).text,
            compiler.compile(&single(90, 40, 20, 71)).text
        );
    }

    #[test]
    fn test_dual_prompt_embeds_both_blocks() {
        let payload = ScorePayload::Dual {
            natural: ScoreSet { d: 30, i: 20, s: 85, c: 25 },
            adaptado: ScoreSet { d: 60, i: 20, s: 70, c: 25 },
        };
        let prompt = PromptCompiler::new().compile(&payload);
        assert_eq!(prompt.variant, crate::scores::ReportVariant::DualProfile);

        let natural_block = "\"scores\": {\n      \"d\": 30,\n      \"i\": 20,\n      \"s\": 85,\n      \"c\": 25\n    }";
        let adapted_block = "\"scores\": {\n      \"d\": 60,\n      \"i\": 20,\n      \"s\": 70,\n      \"c\": 25\n    }";
        assert!(prompt.text.contains(natural_block));
        assert!(prompt.text.contains(adapted_block));
        assert!(prompt.text.contains("\"analisePerfilNatural\""));
        assert!(prompt.text.contains("\"analisePerfilAdaptado\""));
        assert!(!prompt.text.contains("{{"));
    }

    #[test]
    fn test_embedded_schema_is_valid_json() {
        let prompt = PromptCompiler::new().compile(&single(90, 40, 20, 70)).text;
        let start = prompt.find("{\n").unwrap();
        let schema: serde_json::Value = serde_json::from_str(prompt[start..].trim()).unwrap();
        assert_eq!(schema["dadosQuantitativos"]["scores"]["d"], 90);
    }

    #[test]
    fn test_single_ruleset_carried_verbatim() {
        let prompt = PromptCompiler::new().compile(&single(1, 2, 3, 4)).text;
        assert!(prompt.contains("- Um score acima de 75 é considerado ALTO."));
        assert!(prompt.contains("Perfil \"Comunicador Criativo\""));
        assert!(prompt.contains("\"Rápido e Devagar: Duas Formas de Pensar\""));
    }

    #[test]
    fn test_template_for_matches_variant() {
        assert_eq!(PromptCompiler::template_for(&single(1, 1, 1, 1)).id, "single-profile");
    }
}
