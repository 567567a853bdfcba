// src/llm/parser.rs
// Tolerant parsing of the model reply. The upstream output is untrusted
// free text, so this stage never fails: strict JSON first, then a regex
// sweep for key/value fragments, then sentinel values.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

/// Category reported when the reply carries no usable classification.
pub const UNKNOWN_CATEGORY: &str = "Desconhecido";
/// Reply used when JSON parsed but the `resposta` field was absent.
pub const MISSING_REPLY: &str = "Resposta não disponível";
/// Reply used when nothing recognizable could be extracted at all.
pub const FALLBACK_REPLY: &str = "Não foi possível gerar resposta automática.";

// Keys may show up unquoted when the model drifts from strict JSON.
static CATEGORIA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""?categoria"?\s*:\s*"([^"]+)""#).unwrap());
static RESPOSTA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""?resposta"?\s*:\s*"([^"]+)""#).unwrap());

/// The two fields recovered from a model reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelReply {
    pub categoria: String,
    pub resposta: String,
}

#[derive(Debug, Deserialize)]
struct RawReply {
    categoria: Option<String>,
    resposta: Option<String>,
}

/// Extract category and suggested reply from the raw model output.
/// Total function: always returns a result, falling back to sentinels.
pub fn parse_model_reply(raw: &str) -> ModelReply {
    let stripped = raw.replace("```json", "").replace("```", "");
    let stripped = stripped.trim();

    if let Ok(reply) = serde_json::from_str::<RawReply>(stripped) {
        return ModelReply {
            categoria: reply
                .categoria
                .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
            resposta: reply.resposta.unwrap_or_else(|| MISSING_REPLY.to_string()),
        };
    }

    match (
        CATEGORIA_RE.captures(stripped),
        RESPOSTA_RE.captures(stripped),
    ) {
        (Some(categoria), Some(resposta)) => ModelReply {
            categoria: categoria[1].to_string(),
            resposta: resposta[1].to_string(),
        },
        _ => ModelReply {
            categoria: UNKNOWN_CATEGORY.to_string(),
            resposta: FALLBACK_REPLY.to_string(),
        },
    }
}
