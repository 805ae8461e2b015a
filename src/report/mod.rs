// report/mod.rs - Response extractor: provider text in, trusted Report out

pub mod schema;
mod types;

pub use schema::{Shape, ShapeMismatch};
pub use types::*;

use crate::error::PipelineError;
use crate::scores::ReportVariant;
use serde_json::Value;

/// Schema the extractor enforces for a variant
pub fn shape_for(variant: ReportVariant) -> &'static Shape {
    match variant {
        ReportVariant::SingleProfile => &schema::SINGLE_PROFILE_SHAPE,
        ReportVariant::DualProfile => &schema::DUAL_PROFILE_SHAPE,
    }
}

/// Remove enclosing code-fence markers (```` ```json ... ``` ````) and whitespace
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        // The opening fence may carry a language tag up to the end of its line
        text = match rest.find('\n') {
            Some(newline) if !rest[..newline].contains('{') => &rest[newline + 1..],
            _ => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
        };
    }
    if let Some(rest) = text.trim_end().strip_suffix("```") {
        text = rest;
    }

    text.trim()
}

/// Extract and validate a report for `variant`. All-or-nothing: any parse or
/// shape failure rejects the whole response.
pub fn extract_report(raw: &str, variant: ReportVariant) -> Result<Report, PipelineError> {
    let cleaned = strip_code_fences(raw);

    let value: Value = serde_json::from_str(cleaned).map_err(|e| {
        tracing::error!("Provider returned malformed JSON: {} raw={}", e, raw);
        PipelineError::MalformedJson {
            message: e.to_string(),
            raw: raw.to_string(),
        }
    })?;

    validate_report(value, variant).map_err(|e| {
        if let PipelineError::SchemaViolation { path, .. } = &e {
            tracing::error!("Report failed {} schema at '{}' raw={}", variant, path, raw);
        }
        e
    })
}

/// Validate an already-parsed JSON value against the variant's contract
pub fn validate_report(value: Value, variant: ReportVariant) -> Result<Report, PipelineError> {
    schema::check(&value, shape_for(variant)).map_err(|m| PipelineError::SchemaViolation {
        path: m.path,
        expected: m.expected,
    })?;

    // The shape check covers every field the typed structs require
    let report = match variant {
        ReportVariant::SingleProfile => serde_json::from_value(value).map(Report::Single),
        ReportVariant::DualProfile => serde_json::from_value(value).map(Report::Dual),
    };

    report.map_err(|e| {
        tracing::error!("Typed report conversion failed after shape check: {}", e);
        PipelineError::SchemaViolation {
            path: "$".to_string(),
            expected: "a value matching the report contract",
        }
    })
}

impl Report {
    pub fn variant(&self) -> ReportVariant {
        match self {
            Report::Single(_) => ReportVariant::SingleProfile,
            Report::Dual(_) => ReportVariant::DualProfile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn single_report_json() -> Value {
        json!({
            "relatorioTextual": {
                "resumoPerfil": "Resumo.",
                "nomePerfil": "Executor-Analítico",
                "pontosFortes": [{ "ponto": "Foco", "descricao": "Descrição." }],
                "pontosDesenvolvimento": [{ "ponto": "Paciência", "descricao": "Descrição." }],
                "planoDeAcao": {
                    "livro": { "titulo": "Livro", "justificativa": "Motivo." },
                    "comportamentos": [{ "desafio": "Paciência", "sugestao": "Ouvir." }]
                },
                "mensagemFinal": "Siga em frente."
            },
            "dadosQuantitativos": {
                "scores": { "d": 90, "i": 40, "s": 20, "c": 70 },
                "palavrasChave": ["Liderança", "Análise"],
                "pontosChave": [{ "competencia": "Foco em Resultados", "pontuacao": 90 }]
            }
        })
    }

    #[test]
    fn test_fenced_and_plain_text_extract_identically() {
        let plain = single_report_json().to_string();
        let fenced = format!("```json\n{}\n```", plain);
        let bare_fence = format!("```\n{}\n```  \n", plain);
        let inline_fence = format!("```json{}```", plain);

        let expected = extract_report(&plain, ReportVariant::SingleProfile).unwrap();
        for text in [fenced, bare_fence, inline_fence] {
            assert_eq!(
                extract_report(&text, ReportVariant::SingleProfile).unwrap(),
                expected
            );
        }
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("  ```json\n{}\n```  "), "{}");
        assert_eq!(strip_code_fences("```JSON\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```{\"a\":1}```"), "{\"a\":1}");
    }

    #[test]
    fn test_missing_profile_name_is_schema_violation() {
        let mut value = single_report_json();
        value["relatorioTextual"]
            .as_object_mut()
            .unwrap()
            .remove("nomePerfil");

        match extract_report(&value.to_string(), ReportVariant::SingleProfile) {
            Err(PipelineError::SchemaViolation { path, .. }) => {
                assert_eq!(path, "relatorioTextual.nomePerfil")
            }
            other => panic!("expected SchemaViolation, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_type_is_schema_violation() {
        let mut value = single_report_json();
        value["dadosQuantitativos"]["pontosChave"][0]["pontuacao"] = json!("noventa");

        match extract_report(&value.to_string(), ReportVariant::SingleProfile) {
            Err(PipelineError::SchemaViolation { path, expected }) => {
                assert_eq!(path, "dadosQuantitativos.pontosChave[0].pontuacao");
                assert_eq!(expected, "a number");
            }
            other => panic!("expected SchemaViolation, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json() {
        let err = extract_report("Aqui está o relatório: {", ReportVariant::SingleProfile)
            .unwrap_err();
        match err {
            PipelineError::MalformedJson { raw, .. } => assert!(raw.contains("relatório")),
            other => panic!("expected MalformedJson, got {:?}", other),
        }
    }

    fn dual_report_json() -> Value {
        let groups = json!({
            "emocoes": ["Calma"],
            "relacionamentos": ["Leal"],
            "atividades": ["Rotina"]
        });
        json!({
            "introducao": "Introdução.",
            "analisePerfilNatural": {
                "scores": { "d": 30, "i": 20, "s": 85, "c": 25 },
                "fatorAltoPrincipal": "S",
                "fatorBaixoPrincipal": "I",
                "tituloPerfil": "O Planejador",
                "descricaoPerfil": "Estável e paciente.",
                "exposicaoCaracteristicas": [{ "titulo": "Ritmo", "texto": "Constante." }],
                "pontosFortes": groups,
                "pontosMelhorar": groups,
                "analiseFormaGrafico": { "tipo": "Polarizado", "descricao": "S domina." }
            },
            "analisePerfilAdaptado": {
                "scores": { "d": 60, "i": 20, "s": 70, "c": 25 },
                "exigenciasDoMeio": ["Mais assertividade"]
            },
            "estiloDeLideranca": {
                "titulo": "Líder Apoiador",
                "pontosFortes": ["Escuta"],
                "comportamentosTrabalhar": ["Delegar"]
            },
            "conclusao": "Conclusão."
        })
    }

    fn dual_violation_path(value: Value) -> (String, &'static str) {
        match validate_report(value, ReportVariant::DualProfile) {
            Err(PipelineError::SchemaViolation { path, expected }) => (path, expected),
            other => panic!("expected SchemaViolation, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        let report = validate_report(single_report_json(), ReportVariant::SingleProfile).unwrap();
        let serialized = serde_json::to_string(&report).unwrap();
        let again = extract_report(&serialized, ReportVariant::SingleProfile).unwrap();
        assert_eq!(
            serde_json::to_value(&again).unwrap(),
            serde_json::to_value(&report).unwrap()
        );
        assert_eq!(again.variant(), ReportVariant::SingleProfile);
    }

    #[test]
    fn test_validated_report_serializes_to_provider_value() {
        let mut value = single_report_json();
        value["extraKey"] = json!(1);
        value["dadosQuantitativos"]["pontosChave"][0]["nota"] = json!("alta");
        value["dadosQuantitativos"]["scores"]["c"] = json!(70.5);

        let report = validate_report(value.clone(), ReportVariant::SingleProfile).unwrap();
        let text = serde_json::to_string(&report).unwrap();

        assert!(text.contains(r#""d":90,"#), "integer score rewritten: {}", text);
        assert!(text.contains(r#""pontuacao":90"#), "integer pontuacao rewritten: {}", text);
        assert_eq!(serde_json::to_value(&report).unwrap(), value);
    }

    #[test]
    fn test_dual_report_passes_through_unchanged() {
        let value = dual_report_json();
        let report = validate_report(value.clone(), ReportVariant::DualProfile).unwrap();
        assert_eq!(report.variant(), ReportVariant::DualProfile);
        assert_eq!(serde_json::to_value(&report).unwrap(), value);
    }

    #[test]
    fn test_dual_missing_graph_type_is_schema_violation() {
        let mut value = dual_report_json();
        value["analisePerfilNatural"]["analiseFormaGrafico"]
            .as_object_mut()
            .unwrap()
            .remove("tipo");

        let (path, expected) = dual_violation_path(value);
        assert_eq!(path, "analisePerfilNatural.analiseFormaGrafico.tipo");
        assert_eq!(expected, "a string");
    }

    #[test]
    fn test_dual_wrong_typed_demands_is_schema_violation() {
        let mut value = dual_report_json();
        value["analisePerfilAdaptado"]["exigenciasDoMeio"] = json!("Mais assertividade");

        let (path, expected) = dual_violation_path(value);
        assert_eq!(path, "analisePerfilAdaptado.exigenciasDoMeio");
        assert_eq!(expected, "an array");
    }

    #[test]
    fn test_dual_missing_trait_group_is_schema_violation() {
        let mut value = dual_report_json();
        value["analisePerfilNatural"]["pontosMelhorar"]
            .as_object_mut()
            .unwrap()
            .remove("atividades");

        let (path, _) = dual_violation_path(value);
        assert_eq!(path, "analisePerfilNatural.pontosMelhorar.atividades");
    }

    #[test]
    fn test_single_json_does_not_pass_dual_schema() {
        let err = validate_report(single_report_json(), ReportVariant::DualProfile).unwrap_err();
        match err {
            PipelineError::SchemaViolation { path, .. } => assert_eq!(path, "introducao"),
            other => panic!("expected SchemaViolation, got {:?}", other),
        }
    }

    #[test]
    fn test_serialized_field_names_match_contract() {
        let report = validate_report(single_report_json(), ReportVariant::SingleProfile).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert!(value["relatorioTextual"]["planoDeAcao"]["livro"]["titulo"].is_string());
        assert!(value["dadosQuantitativos"]["palavrasChave"].is_array());
    }
}
