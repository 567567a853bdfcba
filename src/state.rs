// src/state.rs

use std::sync::Arc;

use crate::config::TriageConfig;
use crate::llm::classifier::ClassifierService;
use crate::llm::{AnthropicClient, CompletionClient};

/// Shared application state, built once at startup.
pub struct AppState {
    pub config: TriageConfig,
    pub classifier: ClassifierService,
}

impl AppState {
    /// Build state around any completion backend. Tests inject a stub here.
    pub fn new(config: TriageConfig, client: Arc<dyn CompletionClient>) -> Self {
        Self {
            config,
            classifier: ClassifierService::new(client),
        }
    }
}

/// Wire the real Anthropic client into the state.
pub fn create_app_state(config: TriageConfig) -> Arc<AppState> {
    let client = Arc::new(AnthropicClient::new(&config));
    Arc::new(AppState::new(config, client))
}
