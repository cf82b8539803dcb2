use async_trait::async_trait;
use log::{debug, warn};
use std::time::Duration;
use tokio::time::sleep;

use crate::config::FallbackConfig;
use crate::error::GenerateError;
use crate::generators::RecipeGenerator;
use crate::model::{Recipe, Vibe};

/// Wraps a network-backed generator with retries and a static-recipe
/// fallback, so a flaky provider never surfaces an error to the caller.
///
/// `InsufficientIngredients` is the one exception: it is the caller's
/// mistake, always fatal, and propagates without retry or fallback.
pub struct SafeGenerator {
    inner: Box<dyn RecipeGenerator>,
    retry_attempts: u32,
    retry_delay_ms: u64,
}

impl SafeGenerator {
    pub fn new(inner: Box<dyn RecipeGenerator>, config: &FallbackConfig) -> Self {
        SafeGenerator {
            inner,
            retry_attempts: config.retry_attempts.max(1),
            retry_delay_ms: config.retry_delay_ms,
        }
    }

    /// The fixed placeholder recipe served when the provider stays down.
    /// Not derived from the template engine's rule tables.
    pub fn fallback_recipe(ingredients: &[String]) -> Recipe {
        let lead = ingredients.first().map(String::as_str).unwrap_or("pantry");

        Recipe {
            title: format!("Creative {} Combo", lead),
            vibe: Vibe::Creative,
            cook_time: "15-20 mins".to_string(),
            ingredients: ingredients.to_vec(),
            instructions: vec![
                format!("Gather your ingredients: {}.", ingredients.join(", ")),
                "Prep everything by washing, chopping, or organizing as needed.".to_string(),
                "Combine your ingredients in a way that makes sense - trust your instincts!"
                    .to_string(),
                "Cook or mix until everything comes together nicely.".to_string(),
                "Taste, adjust, and enjoy your creation!".to_string(),
            ],
            servings: "Serves 1-2 people".to_string(),
        }
    }
}

#[async_trait]
impl RecipeGenerator for SafeGenerator {
    fn strategy_name(&self) -> &str {
        "fallback"
    }

    async fn generate(&self, ingredients: &[String]) -> Result<Recipe, GenerateError> {
        if ingredients.len() < 2 {
            return Err(GenerateError::InsufficientIngredients);
        }

        for attempt in 1..=self.retry_attempts {
            debug!(
                "Generating with {} (attempt {}/{})",
                self.inner.strategy_name(),
                attempt,
                self.retry_attempts
            );

            match self.inner.generate(ingredients).await {
                Ok(recipe) => return Ok(recipe),
                Err(GenerateError::InsufficientIngredients) => {
                    return Err(GenerateError::InsufficientIngredients);
                }
                Err(e) => {
                    warn!(
                        "Strategy {} failed (attempt {}/{}): {}",
                        self.inner.strategy_name(),
                        attempt,
                        self.retry_attempts,
                        e
                    );
                    if attempt < self.retry_attempts {
                        let delay = Duration::from_millis(self.retry_delay_ms * attempt as u64);
                        debug!("Waiting {:?} before retry", delay);
                        sleep(delay).await;
                    }
                }
            }
        }

        warn!(
            "All {} attempts with {} failed, serving the static fallback recipe",
            self.retry_attempts,
            self.inner.strategy_name()
        );
        Ok(Self::fallback_recipe(ingredients))
    }
}
