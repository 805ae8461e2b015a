// report/schema.rs - Declarative shape of each report variant
// Adding a required field to the contract means adding one entry here and
// one field in `types.rs`.

use serde_json::Value;

/// Structural expectation for one JSON node
#[derive(Debug)]
pub enum Shape {
    Str,
    Num,
    List(&'static Shape),
    Object(&'static [(&'static str, Shape)]),
}

impl Shape {
    fn describe(&self) -> &'static str {
        match self {
            Shape::Str => "a string",
            Shape::Num => "a number",
            Shape::List(_) => "an array",
            Shape::Object(_) => "an object",
        }
    }
}

/// First node that does not match its shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeMismatch {
    pub path: String,
    pub expected: &'static str,
}

const STRINGS: Shape = Shape::List(&Shape::Str);

const SCORES: Shape = Shape::Object(&[
    ("d", Shape::Num),
    ("i", Shape::Num),
    ("s", Shape::Num),
    ("c", Shape::Num),
]);

const TOPIC_POINT: Shape = Shape::Object(&[("ponto", Shape::Str), ("descricao", Shape::Str)]);

const TRAIT_GROUPS: Shape = Shape::Object(&[
    ("emocoes", STRINGS),
    ("relacionamentos", STRINGS),
    ("atividades", STRINGS),
]);

pub static SINGLE_PROFILE_SHAPE: Shape = Shape::Object(&[
    (
        "relatorioTextual",
        Shape::Object(&[
            ("resumoPerfil", Shape::Str),
            ("nomePerfil", Shape::Str),
            ("pontosFortes", Shape::List(&TOPIC_POINT)),
            ("pontosDesenvolvimento", Shape::List(&TOPIC_POINT)),
            (
                "planoDeAcao",
                Shape::Object(&[
                    (
                        "livro",
                        Shape::Object(&[("titulo", Shape::Str), ("justificativa", Shape::Str)]),
                    ),
                    (
                        "comportamentos",
                        Shape::List(&Shape::Object(&[
                            ("desafio", Shape::Str),
                            ("sugestao", Shape::Str),
                        ])),
                    ),
                ]),
            ),
            ("mensagemFinal", Shape::Str),
        ]),
    ),
    (
        "dadosQuantitativos",
        Shape::Object(&[
            ("scores", SCORES),
            ("palavrasChave", STRINGS),
            (
                "pontosChave",
                Shape::List(&Shape::Object(&[
                    ("competencia", Shape::Str),
                    ("pontuacao", Shape::Num),
                ])),
            ),
        ]),
    ),
]);

pub static DUAL_PROFILE_SHAPE: Shape = Shape::Object(&[
    ("introducao", Shape::Str),
    (
        "analisePerfilNatural",
        Shape::Object(&[
            ("scores", SCORES),
            ("fatorAltoPrincipal", Shape::Str),
            ("fatorBaixoPrincipal", Shape::Str),
            ("tituloPerfil", Shape::Str),
            ("descricaoPerfil", Shape::Str),
            (
                "exposicaoCaracteristicas",
                Shape::List(&Shape::Object(&[("titulo", Shape::Str), ("texto", Shape::Str)])),
            ),
            ("pontosFortes", TRAIT_GROUPS),
            ("pontosMelhorar", TRAIT_GROUPS),
            (
                "analiseFormaGrafico",
                Shape::Object(&[("tipo", Shape::Str), ("descricao", Shape::Str)]),
            ),
        ]),
    ),
    (
        "analisePerfilAdaptado",
        Shape::Object(&[("scores", SCORES), ("exigenciasDoMeio", STRINGS)]),
    ),
    (
        "estiloDeLideranca",
        Shape::Object(&[
            ("titulo", Shape::Str),
            ("pontosFortes", STRINGS),
            ("comportamentosTrabalhar", STRINGS),
        ]),
    ),
    ("conclusao", Shape::Str),
]);

/// Check `value` against `shape`, reporting the dotted path of the first mismatch.
/// Extra keys are allowed; missing or mistyped ones are not.
pub fn check(value: &Value, shape: &Shape) -> Result<(), ShapeMismatch> {
    check_at(value, shape, String::new())
}

fn check_at(value: &Value, shape: &Shape, path: String) -> Result<(), ShapeMismatch> {
    let mismatch = |path: String| ShapeMismatch {
        path: if path.is_empty() { "$".to_string() } else { path },
        expected: shape.describe(),
    };

    match shape {
        Shape::Str if value.is_string() => Ok(()),
        Shape::Num if value.is_number() => Ok(()),
        Shape::List(item) => {
            let items = value.as_array().ok_or_else(|| mismatch(path.clone()))?;
            for (index, element) in items.iter().enumerate() {
                check_at(element, item, format!("{}[{}]", path, index))?;
            }
            Ok(())
        }
        Shape::Object(fields) => {
            let object = value.as_object().ok_or_else(|| mismatch(path.clone()))?;
            for (name, field_shape) in fields.iter() {
                let field_path = if path.is_empty() {
                    name.to_string()
                } else {
                    format!("{}.{}", path, name)
                };
                match object.get(*name) {
                    Some(field) => check_at(field, field_shape, field_path)?,
                    None => {
                        return Err(ShapeMismatch {
                            path: field_path,
                            expected: field_shape.describe(),
                        })
                    }
                }
            }
            Ok(())
        }
        _ => Err(mismatch(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_nested_field_path() {
        const SHAPE: Shape = Shape::Object(&[("a", Shape::Object(&[("b", Shape::Str)]))]);
        let err = check(&json!({ "a": {} }), &SHAPE).unwrap_err();
        assert_eq!(err.path, "a.b");
        assert_eq!(err.expected, "a string");
    }

    #[test]
    fn test_array_index_in_path() {
        const SHAPE: Shape = Shape::Object(&[("xs", Shape::List(&Shape::Num))]);
        let err = check(&json!({ "xs": [1, "two", 3] }), &SHAPE).unwrap_err();
        assert_eq!(err.path, "xs[1]");
        assert_eq!(err.expected, "a number");
    }

    #[test]
    fn test_null_is_not_a_string() {
        const SHAPE: Shape = Shape::Object(&[("name", Shape::Str)]);
        let err = check(&json!({ "name": null }), &SHAPE).unwrap_err();
        assert_eq!(err.path, "name");
    }

    #[test]
    fn test_root_mismatch_uses_dollar() {
        let err = check(&json!([1, 2]), &SINGLE_PROFILE_SHAPE).unwrap_err();
        assert_eq!(err.path, "$");
        assert_eq!(err.expected, "an object");
    }

    #[test]
    fn test_extra_keys_allowed() {
        const SHAPE: Shape = Shape::Object(&[("name", Shape::Str)]);
        assert!(check(&json!({ "name": "x", "extra": 1 }), &SHAPE).is_ok());
    }

    #[test]
    fn test_empty_lists_accepted() {
        assert!(check(&json!([]), &STRINGS).is_ok());
    }
}
