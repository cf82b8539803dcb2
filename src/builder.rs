use crate::config::AppConfig;
use crate::error::GenerateError;
use crate::generators::GeneratorFactory;
use crate::model::Recipe;

/// Generation strategy selectable through the builder
#[derive(Debug, Clone, Copy)]
pub enum Strategy {
    /// Offline rule-table engine, no network access
    Template,
    /// Direct OpenAI chat-completions call
    OpenAI,
    /// Groq OpenAI-compatible chat-completions call
    Groq,
}

impl Strategy {
    /// Convert to the strategy name string used by the factory
    fn as_str(&self) -> &'static str {
        match self {
            Strategy::Template => "template",
            Strategy::OpenAI => "openai",
            Strategy::Groq => "groq",
        }
    }
}

/// Builder for configuring and executing a recipe generation
///
/// Ingredients are normalized on the way in (trimmed, lowercased,
/// deduplicated, entry order preserved); the generators themselves expect
/// already-normalized input and do not re-normalize.
#[derive(Debug, Default)]
pub struct RecipeRequestBuilder {
    ingredients: Vec<String>,
    strategy: Option<Strategy>,
    api_key: Option<String>,
    model: Option<String>,
    config: Option<AppConfig>,
}

impl RecipeRequestBuilder {
    /// Add a single ingredient
    ///
    /// # Example
    /// ```
    /// use dorm_chef::RecipeRequest;
    ///
    /// let builder = RecipeRequest::builder()
    ///     .ingredient("Instant Noodles ")
    ///     .ingredient("egg");
    /// ```
    pub fn ingredient(mut self, ingredient: impl Into<String>) -> Self {
        let normalized = ingredient.into().trim().to_lowercase();
        if !normalized.is_empty() && !self.ingredients.contains(&normalized) {
            self.ingredients.push(normalized);
        }
        self
    }

    /// Add several ingredients at once
    ///
    /// # Example
    /// ```
    /// use dorm_chef::RecipeRequest;
    ///
    /// let builder = RecipeRequest::builder()
    ///     .ingredients(["pasta", "cheese", "garlic"]);
    /// ```
    pub fn ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for ingredient in ingredients {
            self = self.ingredient(ingredient);
        }
        self
    }

    /// Pick a generation strategy instead of the configured default
    ///
    /// # Example
    /// ```
    /// use dorm_chef::{RecipeRequest, Strategy};
    ///
    /// let builder = RecipeRequest::builder()
    ///     .ingredients(["rice", "egg"])
    ///     .strategy(Strategy::Template);
    /// ```
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Set the API key for a network strategy directly, instead of relying
    /// on environment variables or config files
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name for a network strategy
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Use an explicit configuration instead of loading `config.toml` and
    /// the `RECIPE__` environment overlay
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Execute the generation
    ///
    /// # Errors
    /// Returns `GenerateError::InsufficientIngredients` when fewer than 2
    /// distinct ingredients were added, before any strategy work happens.
    ///
    /// # Example
    /// ```no_run
    /// # use dorm_chef::RecipeRequest;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let recipe = RecipeRequest::builder()
    ///     .ingredients(["instant noodles", "egg", "cheese"])
    ///     .generate()
    ///     .await?;
    /// println!("{}", recipe.title);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn generate(self) -> Result<Recipe, GenerateError> {
        if self.ingredients.len() < 2 {
            return Err(GenerateError::InsufficientIngredients);
        }

        let mut config = match self.config {
            Some(config) => config,
            None => AppConfig::load()?,
        };

        if let Some(strategy) = self.strategy {
            config.default_strategy = strategy.as_str().to_string();
        }

        // Direct overrides go into the provider entry for the chosen strategy
        if self.api_key.is_some() || self.model.is_some() {
            let entry = config
                .providers
                .entry(config.default_strategy.clone())
                .or_default();
            if let Some(key) = self.api_key {
                entry.api_key = Some(key);
            }
            if let Some(model) = self.model {
                entry.model = Some(model);
            }
        }

        let generator = GeneratorFactory::default_generator(&config)?;
        generator.generate(&self.ingredients).await
    }
}

/// Main entry point for the builder API
pub struct RecipeRequest;

impl RecipeRequest {
    /// Creates a new builder for generating recipes
    ///
    /// # Example
    /// ```
    /// use dorm_chef::RecipeRequest;
    ///
    /// let builder = RecipeRequest::builder();
    /// ```
    pub fn builder() -> RecipeRequestBuilder {
        RecipeRequestBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Vibe;

    #[test]
    fn test_ingredients_are_normalized_and_deduplicated() {
        let builder = RecipeRequest::builder()
            .ingredient("  Pasta ")
            .ingredient("pasta")
            .ingredient("CHEESE")
            .ingredient("   ");

        assert_eq!(builder.ingredients, vec!["pasta", "cheese"]);
    }

    #[test]
    fn test_entry_order_is_preserved() {
        let builder = RecipeRequest::builder().ingredients(["banana", "lime", "banana"]);
        assert_eq!(builder.ingredients, vec!["banana", "lime"]);
    }

    #[tokio::test]
    async fn test_too_few_ingredients_fails_before_any_strategy_work() {
        let result = RecipeRequest::builder()
            .ingredient("pasta")
            .strategy(Strategy::Template)
            .generate()
            .await;
        assert!(matches!(result, Err(GenerateError::InsufficientIngredients)));
    }

    #[tokio::test]
    async fn test_template_generation_end_to_end() {
        let recipe = RecipeRequest::builder()
            .ingredients(["pasta", "cheese", "garlic"])
            .strategy(Strategy::Template)
            .config(AppConfig::default())
            .generate()
            .await
            .unwrap();

        assert_eq!(recipe.vibe, Vibe::Comforting);
        assert_eq!(recipe.ingredients, vec!["pasta", "cheese", "garlic"]);
        assert!(recipe.instructions.len() >= 2);
    }
}
