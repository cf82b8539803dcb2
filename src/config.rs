use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;

/// Top-level application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Strategy used when the caller does not pick one
    #[serde(default = "default_strategy")]
    pub default_strategy: String,
    /// Map of strategy name ("openai", "groq") to provider configuration
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    /// Static-recipe fallback behavior for the network strategies
    #[serde(default)]
    pub fallback: FallbackConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_strategy: default_strategy(),
            providers: HashMap::new(),
            fallback: FallbackConfig::default(),
        }
    }
}

/// Configuration for a network-backed strategy
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Whether this strategy may be used
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Model identifier; each provider has its own default when unset
    #[serde(default)]
    pub model: Option<String>,
    /// Sampling temperature for generation
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key (can also be set via environment variable)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL override (for proxies and tests)
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model: None,
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: None,
        }
    }
}

/// Controls retries and the static-recipe fallback for network strategies
#[derive(Debug, Deserialize, Clone)]
pub struct FallbackConfig {
    /// When set, a failed network generation serves the static recipe
    /// instead of surfacing the error
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Attempts per call before giving up on the provider
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    /// Delay between retries in milliseconds (grows linearly per attempt)
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

// Default value functions
fn default_strategy() -> String {
    "template".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_temperature() -> f32 {
    0.8
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_retry_attempts() -> u32 {
    2
}

fn default_retry_delay_ms() -> u64 {
    500
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE__PROVIDERS__OPENAI__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested: RECIPE__PROVIDERS__OPENAI__API_KEY
            .add_source(
                Environment::with_prefix("RECIPE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_strategy(), "template");
        assert_eq!(default_temperature(), 0.8);
        assert_eq!(default_max_tokens(), 1024);
        assert_eq!(default_retry_attempts(), 2);
        assert_eq!(default_retry_delay_ms(), 500);
    }

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.default_strategy, "template");
        assert!(config.providers.is_empty());
        assert!(config.fallback.enabled);
    }

    #[test]
    fn test_provider_config_default() {
        let config = ProviderConfig::default();
        assert!(config.enabled);
        assert!(config.model.is_none());
        assert!(config.api_key.is_none());
        assert_eq!(config.temperature, 0.8);
    }

    #[test]
    fn test_provider_config_deserializes_sparse_input() {
        let config: ProviderConfig =
            serde_json::from_str(r#"{"model": "llama3-70b-8192"}"#).unwrap();
        // Missing fields take serde defaults
        assert!(config.enabled);
        assert_eq!(config.model.as_deref(), Some("llama3-70b-8192"));
        assert_eq!(config.max_tokens, 1024);
    }

    #[test]
    fn test_app_config_structure() {
        let mut providers = HashMap::new();
        providers.insert(
            "openai".to_string(),
            ProviderConfig {
                api_key: Some("test-key".to_string()),
                ..ProviderConfig::default()
            },
        );

        let config = AppConfig {
            default_strategy: "openai".to_string(),
            providers,
            fallback: FallbackConfig::default(),
        };

        assert_eq!(config.default_strategy, "openai");
        assert!(config.providers.contains_key("openai"));
    }
}
