//! Turn a handful of random ingredients into a structured recipe.
//!
//! Three interchangeable strategies sit behind the [`RecipeGenerator`]
//! trait: an offline rule-table engine (`template`), a direct OpenAI call
//! (`openai`), and a Groq call (`groq`). The network strategies can wrap
//! themselves in a static-recipe fallback so a provider outage still
//! answers with something edible.
//!
//! ```no_run
//! use dorm_chef::RecipeRequest;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let recipe = RecipeRequest::builder()
//!     .ingredients(["instant noodles", "egg", "cheese"])
//!     .generate()
//!     .await?;
//! println!("{} ({})", recipe.title, recipe.vibe);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod generators;
pub mod model;

pub use builder::{RecipeRequest, RecipeRequestBuilder, Strategy};
pub use config::{AppConfig, FallbackConfig, ProviderConfig};
pub use error::GenerateError;
pub use generators::{
    GeneratorFactory, GroqGenerator, OpenAIGenerator, RecipeGenerator, SafeGenerator,
    TemplateGenerator,
};
pub use model::{Recipe, Vibe};

/// Generate a recipe offline with the template strategy.
///
/// Ingredients must already be normalized (trimmed, lowercased,
/// deduplicated); use [`RecipeRequest::builder`] when starting from raw
/// user input.
pub async fn generate_recipe(ingredients: &[String]) -> Result<Recipe, GenerateError> {
    TemplateGenerator::new().generate(ingredients).await
}

/// Generate a recipe with a named strategy, loading configuration from
/// `config.toml` and the `RECIPE__` environment overlay.
pub async fn generate_with_strategy(
    strategy: &str,
    ingredients: &[String],
) -> Result<Recipe, GenerateError> {
    let config = AppConfig::load()?;
    let generator = GeneratorFactory::create(strategy, &config)?;
    generator.generate(ingredients).await
}
