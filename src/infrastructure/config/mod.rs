use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::LLMConfig;

/// Process configuration, resolved once in `main` and handed to the
/// components that need it. Sources, later ones winning: built-in defaults,
/// `casegen.toml`, `CASEGEN_*` env vars, and the conventional
/// `OPENAI_API_KEY` / `OPENAI_MODEL` variables.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub ocr_languages: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let llm = LLMConfig::default();
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
            openai_api_key: None,
            openai_model: llm.model,
            openai_base_url: llm.base_url,
            max_tokens: llm.max_tokens,
            temperature: llm.temperature,
            ocr_languages: "eng".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let mut config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("casegen.toml"))
            .merge(Env::prefixed("CASEGEN_"))
            .merge(Env::raw().only(&["OPENAI_API_KEY", "OPENAI_MODEL"]).map(
                |key| key.as_str().to_lowercase().into(),
            ))
            .extract()
            .map_err(|err| AppError::ConfigError(err.to_string()))?;

        if let Some(key) = &config.openai_api_key {
            if key.trim().is_empty() {
                config.openai_api_key = None;
            }
        }

        Ok(config)
    }

    pub fn llm_config(&self) -> LLMConfig {
        LLMConfig {
            base_url: self.openai_base_url.clone(),
            model: self.openai_model.clone(),
            api_key: self.openai_api_key.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}
