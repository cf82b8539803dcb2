use dorm_chef::{AppConfig, GenerateError, RecipeRequest, Strategy, Vibe};

#[tokio::test]
async fn test_builder_template_end_to_end() {
    let recipe = RecipeRequest::builder()
        .ingredient("  Instant Noodles ")
        .ingredient("EGG")
        .ingredient("cheese")
        .strategy(Strategy::Template)
        .config(AppConfig::default())
        .generate()
        .await
        .unwrap();

    // Normalized lowercased input, original entry order
    assert_eq!(recipe.ingredients, vec!["instant noodles", "egg", "cheese"]);
    // cheese matches comforting, which is scanned before quick's "instant"
    assert_eq!(recipe.vibe, Vibe::Comforting);
    assert_eq!(recipe.cook_time, "5-10 mins");
}

#[tokio::test]
async fn test_builder_deduplicates_before_the_length_check() {
    // Two entries that normalize to the same ingredient count as one
    let result = RecipeRequest::builder()
        .ingredients(["Pasta", "  pasta "])
        .strategy(Strategy::Template)
        .config(AppConfig::default())
        .generate()
        .await;

    assert!(matches!(result, Err(GenerateError::InsufficientIngredients)));
}

#[tokio::test]
async fn test_builder_empty_input_is_rejected() {
    let result = RecipeRequest::builder()
        .config(AppConfig::default())
        .generate()
        .await;
    assert!(matches!(result, Err(GenerateError::InsufficientIngredients)));
}

#[tokio::test]
async fn test_builder_uses_configured_default_strategy() {
    // No explicit .strategy(): AppConfig::default() points at "template"
    let recipe = RecipeRequest::builder()
        .ingredients(["banana", "lime"])
        .config(AppConfig::default())
        .generate()
        .await
        .unwrap();

    // banana's energy-boosting entry is declared before lime's refreshing one
    assert_eq!(recipe.vibe, Vibe::EnergyBoosting);
}
