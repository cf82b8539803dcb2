use thiserror::Error;

/// Errors that can occur while generating a recipe
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Fewer than 2 ingredients were supplied; always fatal to the call
    #[error("need at least 2 ingredients to create a recipe")]
    InsufficientIngredients,

    /// The LLM provider returned a non-success status or no content
    #[error("upstream provider error: {0}")]
    Upstream(String),

    /// The LLM reply was not parseable as a recipe or lacked required fields
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    /// Network request failed
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// No API key in configuration or environment
    #[error("{0} not found in config or environment")]
    MissingApiKey(&'static str),

    /// Requested strategy name is not one of template/openai/groq
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    /// Requested strategy is disabled in configuration
    #[error("strategy '{0}' is not enabled in configuration")]
    Disabled(String),

    /// Builder was misconfigured
    #[error("builder error: {0}")]
    Builder(String),
}
