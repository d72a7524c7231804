use serde::{Deserialize, Serialize};

/// Generation strategy requested by the caller. `Auto` resolves to `OpenAi`
/// when an API key is configured, otherwise `Local`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    #[default]
    Auto,
    Local,
    OpenAi,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LLMConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: None,
            max_tokens: Some(2048),
            temperature: Some(0.2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_deserializes_lowercase() {
        assert_eq!(
            serde_json::from_str::<GenerationMode>("\"auto\"").unwrap(),
            GenerationMode::Auto
        );
        assert_eq!(
            serde_json::from_str::<GenerationMode>("\"openai\"").unwrap(),
            GenerationMode::OpenAi
        );
        assert_eq!(
            serde_json::from_str::<GenerationMode>("\"local\"").unwrap(),
            GenerationMode::Local
        );
    }
}
