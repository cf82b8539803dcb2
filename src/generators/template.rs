//! Offline rule-table recipe generator.
//!
//! Needs no network access: a fixed keyword table picks the vibe, priority
//! substring rules estimate the cook time, and a handful of word lists plus
//! a random source produce the title, instructions, and serving line.
//! Cosmetic variety is intentional; only the vibe and cook time are
//! deterministic for a given ingredient list.

use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::GenerateError;
use crate::generators::RecipeGenerator;
use crate::model::{Recipe, Vibe};

/// Trigger keywords per vibe, scanned in declaration order; the first entry
/// with any keyword appearing as a substring of the joined ingredient list
/// wins. `Creative` has no triggers and is reached only by exhaustion.
const VIBE_TRIGGERS: &[(Vibe, &[&str])] = &[
    (Vibe::Comforting, &["pasta", "cheese", "noodle", "soup", "bread"]),
    (Vibe::Quick, &["instant", "microwave", "ready", "leftover"]),
    (
        Vibe::EnergyBoosting,
        &["banana", "oats", "peanut", "coffee", "honey"],
    ),
    (
        Vibe::Refreshing,
        &["lime", "lemon", "cucumber", "mint", "yogurt"],
    ),
    (
        Vibe::Indulgent,
        &["chocolate", "butter", "cream", "sugar", "nutella"],
    ),
    (
        Vibe::Healthy,
        &["spinach", "broccoli", "quinoa", "tofu", "salad"],
    ),
    (
        Vibe::Warming,
        &["ginger", "chili", "turmeric", "cinnamon", "garlic"],
    ),
];

const TITLE_PREFIXES: [&str; 15] = [
    "Midnight",
    "Lazy",
    "Dorm Room",
    "Broke Student",
    "Last Minute",
    "Chaotic",
    "Cozy",
    "Speedy",
    "Legendary",
    "Questionable",
    "Gourmet-ish",
    "Improvised",
    "Three AM",
    "End of Month",
    "Finals Week",
];

const TITLE_SUFFIXES: [&str; 17] = [
    "Surprise",
    "Special",
    "Deluxe",
    "Situation",
    "Masterpiece",
    "Experiment",
    "Delight",
    "Fix",
    "Combo",
    "Creation",
    "Hack",
    "Bowl",
    "Scramble",
    "Remix",
    "Miracle",
    "Mashup",
    "Mood",
];

const COOKING_METHODS: [&str; 8] = [
    "Heat a pan and saute everything cookable until golden",
    "Boil whatever needs boiling in salted water until just tender",
    "Simmer on low heat, stirring now and then",
    "Stir-fry on high heat for a few energetic minutes",
    "Pan-fry until crispy at the edges",
    "Microwave in short bursts, stirring between rounds",
    "Toast gently until warmed through",
    "Cover the pan and let the steam do the work",
];

const SERVING_LINES: [&str; 6] = [
    "Serves 1 hungry student",
    "Serves 2, or 1 very hungry person",
    "Serves 1-2 roommates",
    "Enough for you and maybe a friend",
    "Serves 1 with leftovers for tomorrow",
    "Feeds the whole study group (barely)",
];

const CHOPPABLE: [&str; 6] = ["onion", "garlic", "potato", "tomato", "carrot", "bell pepper"];

const NEEDS_HEAT: [&str; 7] = ["rice", "pasta", "potato", "egg", "meat", "chicken", "onion"];

const SEASONINGS: [&str; 8] = [
    "salt", "pepper", "spice", "sauce", "oil", "butter", "lemon", "lime",
];

const NO_COOK_MARKERS: [&str; 3] = ["instant", "microwave", "pre"];

const REAL_COOKING: [&str; 8] = [
    "rice", "pasta", "potato", "onion", "garlic", "meat", "chicken", "egg",
];

/// The offline strategy. Stateless; all state lives in the fixed tables
/// above, which are never mutated, so calls may run concurrently.
#[derive(Debug, Default)]
pub struct TemplateGenerator;

impl TemplateGenerator {
    pub fn new() -> Self {
        TemplateGenerator
    }
}

#[async_trait]
impl RecipeGenerator for TemplateGenerator {
    fn strategy_name(&self) -> &str {
        "template"
    }

    async fn generate(&self, ingredients: &[String]) -> Result<Recipe, GenerateError> {
        let mut rng = rand::thread_rng();
        generate_with_rng(ingredients, &mut rng)
    }
}

/// Generate a recipe using the supplied random source.
///
/// The precondition check runs before any randomness is drawn, so repeated
/// failing calls are side-effect-free on the generator state.
pub fn generate_with_rng<R: Rng>(
    ingredients: &[String],
    rng: &mut R,
) -> Result<Recipe, GenerateError> {
    if ingredients.len() < 2 {
        return Err(GenerateError::InsufficientIngredients);
    }

    let vibe = classify_vibe(ingredients);
    let cook_time = estimate_cook_time(ingredients);
    let title = build_title(ingredients, vibe, rng);
    let instructions = build_instructions(ingredients, vibe, rng);
    let servings = pick(&SERVING_LINES, rng).to_string();

    Ok(Recipe {
        title,
        vibe,
        cook_time: cook_time.to_string(),
        // the input list verbatim, never the shuffled working copy
        ingredients: ingredients.to_vec(),
        instructions,
        servings,
    })
}

fn classify_vibe(ingredients: &[String]) -> Vibe {
    let haystack = ingredients.join(" ");
    for (vibe, triggers) in VIBE_TRIGGERS {
        if triggers.iter().any(|t| haystack.contains(t)) {
            return *vibe;
        }
    }
    Vibe::Creative
}

fn estimate_cook_time(ingredients: &[String]) -> &'static str {
    let any_contains =
        |set: &[&str]| ingredients.iter().any(|i| set.iter().any(|k| i.contains(k)));

    if any_contains(&NO_COOK_MARKERS) {
        "5-10 mins"
    } else if any_contains(&REAL_COOKING) {
        "15-25 mins"
    } else {
        "10-15 mins"
    }
}

// Vibe is accepted for interface symmetry with the other sub-steps even
// though the current title tables do not branch on it.
fn build_title<R: Rng>(ingredients: &[String], _vibe: Vibe, rng: &mut R) -> String {
    let prefix = pick(&TITLE_PREFIXES, rng);
    let suffix = pick(&TITLE_SUFFIXES, rng);

    if rng.gen_bool(0.5) {
        let ingredient = pick(ingredients, rng);
        format!("{} {} {}", prefix, capitalize(ingredient), suffix)
    } else {
        format!("{} {}", prefix, suffix)
    }
}

fn build_instructions<R: Rng>(ingredients: &[String], vibe: Vibe, rng: &mut R) -> Vec<String> {
    let mut working: Vec<&str> = ingredients.iter().map(String::as_str).collect();
    working.shuffle(rng);

    let mut steps = Vec::new();

    let chop: Vec<&str> = working
        .iter()
        .copied()
        .filter(|i| CHOPPABLE.iter().any(|k| i.contains(k)))
        .collect();
    if !chop.is_empty() {
        steps.push(format!(
            "Chop up the {} into whatever size feels right.",
            chop.join(", ")
        ));
    }

    if ingredients
        .iter()
        .any(|i| NEEDS_HEAT.iter().any(|k| i.contains(k)))
    {
        steps.push(format!("{}.", pick(&COOKING_METHODS, rng)));
    }

    let main_count = main_slice_len(working.len());
    let (main, rest) = working.split_at(main_count);
    steps.push(format!(
        "Combine the {} - this is the heart of the dish.",
        main.join(", ")
    ));
    if !rest.is_empty() {
        steps.push(format!(
            "Fold in the {} and bring it all together.",
            rest.join(", ")
        ));
    }

    // Seasoning scans the original order, not the shuffled copy
    let season: Vec<&str> = ingredients
        .iter()
        .map(String::as_str)
        .filter(|i| SEASONINGS.iter().any(|k| i.contains(k)))
        .collect();
    if !season.is_empty() {
        steps.push(format!(
            "Season with the {} until it tastes like a real meal.",
            season.join(", ")
        ));
    }

    steps.push(finishing_line(vibe).to_string());
    steps
}

/// "Main" portion of the shuffled list: ceil(0.6 * n), floored at 2.
fn main_slice_len(n: usize) -> usize {
    ((n * 3 + 4) / 5).max(2)
}

/// Closing sentence for a vibe. The wildcard arm keeps an unknown-tag
/// lookup safe rather than a panic, even though the enum is closed.
pub fn finishing_line(vibe: Vibe) -> &'static str {
    match vibe {
        Vibe::Comforting => "Plate it up, get comfy, and let it fix your whole day.",
        Vibe::Quick => "Done already - eat it before your next class.",
        Vibe::EnergyBoosting => "Fuel up and go conquer your to-do list.",
        Vibe::Refreshing => "Serve it cool and enjoy the reset.",
        Vibe::Indulgent => "No regrets - you earned every bite.",
        Vibe::Healthy => "Your body says thank you. Dig in!",
        Vibe::Warming => "Eat it while it's hot and feel the warmth spread.",
        _ => "Taste, adjust, and enjoy your creation!",
    }
}

// Panics on an empty slice; every call site passes a non-empty fixed table
// or the length-checked ingredient list.
fn pick<'a, T, R: Rng>(items: &'a [T], rng: &mut R) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
