use std::sync::Arc;

use tracing::warn;

use crate::application::use_cases::prompts::{
    build_generation_system_prompt, build_generation_user_prompt,
};
use crate::application::use_cases::synthesizer::synthesize_cases;
use crate::application::use_cases::text::normalize_text;
use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::{GenerationMode, LLMConfig};
use crate::domain::test_case::{new_case_id, GenerateResponse};
use crate::infrastructure::llm_clients::LLMClient;
use crate::infrastructure::response::{clean_llm_response, extract_json_payload};

/// Upper bound on cases per request, to keep response sizes sane.
const MAX_CASES: usize = 50;

const DEFAULT_NUM_CASES: usize = 8;

const UNSPECIFIED_REQUIREMENTS: &str =
    "General requirements and flows are unspecified. Generate broad, useful test cases.";

/// Picks the generation strategy and guarantees a response. The remote path
/// returns a `Result` and any error falls back to the local synthesizer, so
/// `execute` itself can never fail.
pub struct GenerateUseCase {
    llm_client: Arc<dyn LLMClient + Send + Sync>,
    config: LLMConfig,
}

impl GenerateUseCase {
    pub fn new(llm_client: Arc<dyn LLMClient + Send + Sync>, config: LLMConfig) -> Self {
        Self { llm_client, config }
    }

    pub fn default_num_cases() -> usize {
        DEFAULT_NUM_CASES
    }

    pub async fn execute(
        &self,
        source_text: &str,
        num_cases: usize,
        mode: GenerationMode,
        model_override: Option<String>,
    ) -> GenerateResponse {
        let num_cases = num_cases.min(MAX_CASES);

        let mut text = normalize_text(source_text);
        if text.is_empty() {
            text = UNSPECIFIED_REQUIREMENTS.to_string();
        }

        let resolved = match mode {
            GenerationMode::Auto => {
                if self.config.api_key.is_some() {
                    GenerationMode::OpenAi
                } else {
                    GenerationMode::Local
                }
            }
            other => other,
        };

        if resolved == GenerationMode::OpenAi {
            match self.generate_remote(&text, num_cases, model_override).await {
                Ok(response) => return response,
                Err(err) => {
                    warn!(error = %err, "Remote generation failed, falling back to local synthesis");
                }
            }
        }

        synthesize_cases(&text, num_cases)
    }

    /// Remote path: prompt the model for the fixed JSON shape and parse its
    /// reply into a `GenerateResponse`. Every failure mode surfaces as an
    /// error for the caller to fall back on.
    async fn generate_remote(
        &self,
        source_text: &str,
        num_cases: usize,
        model_override: Option<String>,
    ) -> Result<GenerateResponse> {
        if self.config.api_key.is_none() {
            return Err(AppError::ConfigError(
                "No API key configured for remote generation".to_string(),
            ));
        }

        let mut config = self.config.clone();
        if let Some(model) = model_override {
            config.model = model;
        }

        let system_prompt = build_generation_system_prompt();
        let user_prompt = build_generation_user_prompt(source_text, num_cases);

        let raw_output = self
            .llm_client
            .generate(&config, &system_prompt, &user_prompt)
            .await?;

        let cleaned = clean_llm_response(&raw_output);
        let payload = extract_json_payload(&cleaned);
        let mut response = serde_json::from_str::<GenerateResponse>(&payload).map_err(|err| {
            AppError::ParseError(format!("Failed to parse LLM test case output: {}", err))
        })?;

        for case in response.test_cases.iter_mut() {
            if case.id.is_empty() {
                case.id = new_case_id();
            }
        }

        Ok(response)
    }
}
