use crate::config::AppConfig;
use crate::error::GenerateError;
use crate::generators::{
    GroqGenerator, OpenAIGenerator, RecipeGenerator, SafeGenerator, TemplateGenerator,
};

pub struct GeneratorFactory;

impl GeneratorFactory {
    /// Create a generator for a strategy name.
    ///
    /// Network strategies come back wrapped in [`SafeGenerator`] when
    /// fallback is enabled, so provider outages degrade to the static
    /// recipe instead of an error.
    pub fn create(
        strategy: &str,
        config: &AppConfig,
    ) -> Result<Box<dyn RecipeGenerator>, GenerateError> {
        match strategy {
            "template" => Ok(Box::new(TemplateGenerator::new())),
            "openai" | "groq" => {
                let provider_config = config.providers.get(strategy).cloned().unwrap_or_default();
                if !provider_config.enabled {
                    return Err(GenerateError::Disabled(strategy.to_string()));
                }

                let inner: Box<dyn RecipeGenerator> = match strategy {
                    "openai" => Box::new(OpenAIGenerator::new(&provider_config)?),
                    _ => Box::new(GroqGenerator::new(&provider_config)?),
                };

                if config.fallback.enabled {
                    Ok(Box::new(SafeGenerator::new(inner, &config.fallback)))
                } else {
                    Ok(inner)
                }
            }
            other => Err(GenerateError::UnknownStrategy(other.to_string())),
        }
    }

    /// Create the generator named by `default_strategy` in configuration
    pub fn default_generator(
        config: &AppConfig,
    ) -> Result<Box<dyn RecipeGenerator>, GenerateError> {
        Self::create(&config.default_strategy, config)
    }

    /// List all selectable strategy names
    pub fn available_strategies() -> Vec<&'static str> {
        vec!["template", "openai", "groq"]
    }
}
