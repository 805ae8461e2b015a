// report/types.rs - Report wire contract
// Field names are destructured by the presentation layer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Bump when any field below changes name or shape
pub const REPORT_SCHEMA_VERSION: &str = "1";

/// A validated report, one variant per prompt template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Report {
    Single(SingleProfileReport),
    Dual(DualProfileReport),
}

// Numbers stay `serde_json::Number` and unknown keys land in `extra`, so a
// validated report serializes back to the value the provider sent.

/// Scores echoed back by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportScores {
    pub d: Number,
    pub i: Number,
    pub s: Number,
    pub c: Number,
    /// Provider keys outside the contract, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// --- Single profile ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleProfileReport {
    pub relatorio_textual: TextualReport,
    pub dados_quantitativos: QuantitativeData,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextualReport {
    pub resumo_perfil: String,
    pub nome_perfil: String,
    pub pontos_fortes: Vec<TopicPoint>,
    pub pontos_desenvolvimento: Vec<TopicPoint>,
    pub plano_de_acao: ActionPlan,
    pub mensagem_final: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicPoint {
    pub ponto: String,
    pub descricao: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPlan {
    pub livro: BookRecommendation,
    pub comportamentos: Vec<BehaviorSuggestion>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecommendation {
    pub titulo: String,
    pub justificativa: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorSuggestion {
    pub desafio: String,
    pub sugestao: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitativeData {
    pub scores: ReportScores,
    pub palavras_chave: Vec<String>,
    pub pontos_chave: Vec<CompetencyScore>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetencyScore {
    pub competencia: String,
    pub pontuacao: Number,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// --- Dual profile ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DualProfileReport {
    pub introducao: String,
    pub analise_perfil_natural: NaturalProfileAnalysis,
    pub analise_perfil_adaptado: AdaptedProfileAnalysis,
    pub estilo_de_lideranca: LeadershipStyle,
    pub conclusao: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NaturalProfileAnalysis {
    pub scores: ReportScores,
    pub fator_alto_principal: String,
    pub fator_baixo_principal: String,
    pub titulo_perfil: String,
    pub descricao_perfil: String,
    pub exposicao_caracteristicas: Vec<Characteristic>,
    pub pontos_fortes: TraitGroups,
    pub pontos_melhorar: TraitGroups,
    pub analise_forma_grafico: GraphShape,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Characteristic {
    pub titulo: String,
    pub texto: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Observations split into emotions, relationships and activities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitGroups {
    pub emocoes: Vec<String>,
    pub relacionamentos: Vec<String>,
    pub atividades: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphShape {
    pub tipo: String,
    pub descricao: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptedProfileAnalysis {
    pub scores: ReportScores,
    pub exigencias_do_meio: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadershipStyle {
    pub titulo: String,
    pub pontos_fortes: Vec<String>,
    pub comportamentos_trabalhar: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
