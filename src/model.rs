use serde::{Deserialize, Serialize};
use std::fmt;

/// Mood tag attached to a generated recipe, chosen by keyword heuristic.
///
/// The set is closed; `Creative` is the default and the catch-all when an
/// LLM reply carries a tag we do not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    Comforting,
    Quick,
    #[serde(rename = "energy-boosting")]
    EnergyBoosting,
    Refreshing,
    Indulgent,
    Healthy,
    Warming,
    #[serde(other)]
    Creative,
}

impl Vibe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vibe::Comforting => "comforting",
            Vibe::Quick => "quick",
            Vibe::EnergyBoosting => "energy-boosting",
            Vibe::Refreshing => "refreshing",
            Vibe::Indulgent => "indulgent",
            Vibe::Healthy => "healthy",
            Vibe::Warming => "warming",
            Vibe::Creative => "creative",
        }
    }

    /// All tags a recipe can carry.
    pub fn all() -> &'static [Vibe] {
        &[
            Vibe::Comforting,
            Vibe::Quick,
            Vibe::EnergyBoosting,
            Vibe::Refreshing,
            Vibe::Indulgent,
            Vibe::Healthy,
            Vibe::Warming,
            Vibe::Creative,
        ]
    }
}

impl Default for Vibe {
    fn default() -> Self {
        Vibe::Creative
    }
}

impl fmt::Display for Vibe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated recipe. Constructed fresh on every call and immutable after.
///
/// `ingredients` is always the caller's list verbatim: same order, same
/// elements, regardless of how the generator shuffled its working copies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    #[serde(default)]
    pub vibe: Vibe,
    pub cook_time: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub servings: String,
}
