//! Data model returned by the suggestion generator.

use serde::{Deserialize, Serialize};

/// A single meal suggestion as produced by the model.
///
/// Field presence (except `calories`) is part of the structured-output
/// contract sent with the request; deserialization rejects payloads missing a
/// required field. The caller owns turning this into a full `Meal` record
/// (id, timestamps, source) — that assembly never happens here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSuggestion {
    /// Name of the dish.
    pub name: String,
    /// Short description (1-2 sentences).
    pub description: String,
    /// Cuisine type (e.g. Italian, Japanese, Fusion).
    pub cuisine: String,
    /// Estimated preparation and cooking time (e.g. "30 mins").
    pub prep_time: String,
    /// Ingredients with quantities.
    pub ingredients: Vec<String>,
    /// Step-by-step cooking instructions.
    pub instructions: Vec<String>,
    /// Approximate calories per serving.
    pub calories: Option<u32>,
    /// Descriptive tags (e.g. "Spicy", "Vegetarian", "Quick").
    pub tags: Vec<String>,
}
