mod factory;
mod fallback;
mod groq;
mod openai;
mod prompt;
mod template;

pub use factory::GeneratorFactory;
pub use fallback::SafeGenerator;
pub use groq::GroqGenerator;
pub use openai::OpenAIGenerator;
pub use prompt::{build_recipe_prompt, RECIPE_SYSTEM_PROMPT};
pub use template::{finishing_line, generate_with_rng, TemplateGenerator};

use async_trait::async_trait;

use crate::error::GenerateError;
use crate::model::Recipe;

/// Unified trait for all recipe generation strategies
#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    /// Get the strategy name (e.g., "template", "openai", "groq")
    fn strategy_name(&self) -> &str;

    /// Turn an ordered, caller-normalized ingredient list into a recipe
    async fn generate(&self, ingredients: &[String]) -> Result<Recipe, GenerateError>;
}

/// Parse an LLM chat reply into a `Recipe`.
///
/// Models sometimes wrap the JSON in a markdown code fence even when told
/// not to; strip it before parsing. A reply missing required fields or with
/// no instructions counts as malformed.
pub(crate) fn parse_model_reply(content: &str) -> Result<Recipe, GenerateError> {
    let body = strip_code_fence(content);

    let recipe: Recipe = serde_json::from_str(body)
        .map_err(|e| GenerateError::MalformedResponse(format!("invalid recipe JSON: {}", e)))?;

    if recipe.title.trim().is_empty() {
        return Err(GenerateError::MalformedResponse(
            "reply has an empty title".to_string(),
        ));
    }
    if recipe.instructions.is_empty() {
        return Err(GenerateError::MalformedResponse(
            "reply has no instructions".to_string(),
        ));
    }

    Ok(recipe)
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}
