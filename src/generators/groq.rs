use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::ProviderConfig;
use crate::error::GenerateError;
use crate::generators::{
    build_recipe_prompt, parse_model_reply, RecipeGenerator, RECIPE_SYSTEM_PROMPT,
};
use crate::model::Recipe;

const DEFAULT_MODEL: &str = "llama3-70b-8192";

/// Chat-completions call to the Groq OpenAI-compatible API.
pub struct GroqGenerator {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GroqGenerator {
    /// Create a new Groq generator from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, GenerateError> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GROQ_API_KEY").ok())
            .ok_or(GenerateError::MissingApiKey("GROQ_API_KEY"))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| "https://api.groq.com".to_string());

        Ok(GroqGenerator {
            client: Client::new(),
            api_key,
            base_url,
            model: config.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        GroqGenerator {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.8,
            max_tokens: 1024,
        }
    }
}

#[async_trait]
impl RecipeGenerator for GroqGenerator {
    fn strategy_name(&self) -> &str {
        "groq"
    }

    async fn generate(&self, ingredients: &[String]) -> Result<Recipe, GenerateError> {
        if ingredients.len() < 2 {
            return Err(GenerateError::InsufficientIngredients);
        }

        let response = self
            .client
            .post(format!("{}/openai/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "system", "content": RECIPE_SYSTEM_PROMPT},
                    {"role": "user", "content": build_recipe_prompt(ingredients)}
                ],
                "temperature": self.temperature,
                "max_tokens": self.max_tokens
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerateError::Upstream(format!("groq returned {}", status)));
        }

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);

        let content = response_body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                GenerateError::Upstream("no content received from the model".to_string())
            })?;

        parse_model_reply(content)
    }
}
