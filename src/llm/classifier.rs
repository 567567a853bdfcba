// src/llm/classifier.rs
// Orchestrates one classification: validate, normalize, prompt, complete,
// parse. Holds the completion backend behind the trait seam.

use std::sync::Arc;
use tracing::debug;

use super::CompletionClient;
use super::parser::parse_model_reply;
use super::prompt::build_classification_prompt;
use crate::api::ApiError;
use crate::ingest::MIN_EMAIL_CHARS;
use crate::nlp::normalize;

/// Result of one classification run.
#[derive(Debug, Clone)]
pub struct ClassificationOutcome {
    pub categoria: String,
    pub resposta_sugerida: String,
    pub texto_processado: String,
}

pub struct ClassifierService {
    client: Arc<dyn CompletionClient>,
}

impl ClassifierService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Classify one email. The length check mirrors the extractor's: the
    /// service rejects short input even when called outside the HTTP path.
    pub async fn classify(&self, email_text: &str) -> Result<ClassificationOutcome, ApiError> {
        if email_text.trim().chars().count() < MIN_EMAIL_CHARS {
            return Err(ApiError::TooShort);
        }

        let texto_processado = normalize(email_text);
        let prompt = build_classification_prompt(email_text, &texto_processado);
        debug!(prompt_chars = prompt.chars().count(), "sending classification prompt");

        let raw_reply = self.client.complete(&prompt).await?;
        let reply = parse_model_reply(&raw_reply);

        Ok(ClassificationOutcome {
            categoria: reply.categoria,
            resposta_sugerida: reply.resposta,
            texto_processado,
        })
    }
}
