/// The system prompt sent to every LLM strategy.
///
/// Loaded from `prompt.txt` at compile time using the `include_str!` macro,
/// making it easy to edit without dealing with Rust string syntax.
pub const RECIPE_SYSTEM_PROMPT: &str = include_str!("prompt.txt");

/// Build the user prompt for an ingredient list, spelling out the exact
/// JSON shape the reply must follow.
pub fn build_recipe_prompt(ingredients: &[String]) -> String {
    let joined = ingredients.join(", ");
    format!(
        r#"Create a fun, college-friendly recipe using ONLY these ingredients: {joined}

Requirements:
- Use ONLY the provided ingredients, no additional items
- Suitable for college hostel cooking (basic tools: stove, kettle, pan)
- Beginner-friendly instructions
- Fun, practical roommate tone
- Determine the natural vibe/mood based on ingredients (comforting, quick, energy-boosting, refreshing, indulgent, healthy, warming, creative)

Return a JSON object with this exact structure:
{{
  "title": "Fun recipe name with college vibe",
  "vibe": "single word describing the mood",
  "cookTime": "estimated time like '10-15 mins'",
  "ingredients": [exact ingredient list provided],
  "instructions": [3-5 step-by-step instructions in casual, encouraging tone],
  "servings": "serving description like 'Serves 1 hungry student'"
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_embedded() {
        assert!(!RECIPE_SYSTEM_PROMPT.is_empty());
        assert!(RECIPE_SYSTEM_PROMPT.contains("valid JSON only"));
    }

    #[test]
    fn test_user_prompt_lists_ingredients_and_shape() {
        let prompt = build_recipe_prompt(&["instant noodles".to_string(), "egg".to_string()]);
        assert!(prompt.contains("instant noodles, egg"));
        assert!(prompt.contains("\"cookTime\""));
        assert!(prompt.contains("comforting, quick, energy-boosting"));
    }
}
