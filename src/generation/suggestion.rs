//! Meal suggestion generation with structured JSON output.

use tracing::debug;

use crate::error::MealgenError;
use crate::provider::{ContentRequest, GeminiClient};
use crate::types::MealSuggestion;

pub const SUGGESTION_MODEL: &str = "gemini-2.5-flash";

const SYSTEM_INSTRUCTION: &str =
    "You are a world-class chef and nutritionist designed to suggest inspiring meals.";

/// Higher temperature for more variety between suggestions.
const SUGGESTION_TEMPERATURE: f64 = 1.2;

/// Only the most recent exclusions are worth mentioning in the prompt.
const MAX_EXCLUSIONS: usize = 5;

/// Structured-output schema for a meal suggestion.
///
/// `calories` is deliberately not required; everything else must be present
/// in the model's response.
pub fn meal_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "name": {
                "type": "STRING",
                "description": "The name of the dish. Be creative but clear.",
            },
            "description": {
                "type": "STRING",
                "description": "A mouth-watering description of the meal (1-2 sentences).",
            },
            "cuisine": {
                "type": "STRING",
                "description": "The cuisine type (e.g., Italian, Japanese, Fusion).",
            },
            "prepTime": {
                "type": "STRING",
                "description": "Estimated preparation and cooking time (e.g., '30 mins').",
            },
            "ingredients": {
                "type": "ARRAY",
                "items": {"type": "STRING"},
                "description": "List of ingredients with quantities.",
            },
            "instructions": {
                "type": "ARRAY",
                "items": {"type": "STRING"},
                "description": "Step-by-step cooking instructions.",
            },
            "calories": {
                "type": "INTEGER",
                "description": "Approximate calories per serving.",
            },
            "tags": {
                "type": "ARRAY",
                "items": {"type": "STRING"},
                "description": "3 descriptive tags (e.g., 'Spicy', 'Vegetarian', 'Quick').",
            },
        },
        "required": [
            "name", "description", "cuisine", "prepTime",
            "ingredients", "instructions", "tags",
        ],
    })
}

/// Last `MAX_EXCLUSIONS` entries of the list, in original order.
fn recent_exclusions(exclusions: &[String]) -> &[String] {
    let start = exclusions.len().saturating_sub(MAX_EXCLUSIONS);
    &exclusions[start..]
}

fn build_prompt(exclusions: &[String]) -> String {
    let mut prompt = String::from(
        "Suggest a unique, delicious, and practical meal for me to cook or eat. \
         It should be diverse and not repetitive. ",
    );
    let recent = recent_exclusions(exclusions);
    if !recent.is_empty() {
        prompt.push_str(&format!(
            "Avoid suggesting these recent meals: {}. ",
            recent.join(", ")
        ));
    }
    prompt.push_str(
        "Focus on appetizing flavor combinations. \
         Include a detailed recipe with ingredients and step-by-step instructions.",
    );
    prompt
}

/// Generate one meal suggestion, steering the model away from recently
/// suggested meals.
///
/// Errors propagate: this is the primary feature and must not silently
/// degrade. No retries are performed.
pub async fn generate_meal_suggestion(
    client: &GeminiClient,
    exclusions: &[String],
) -> Result<MealSuggestion, MealgenError> {
    let request = ContentRequest::builder()
        .prompt(build_prompt(exclusions))
        .system_instruction(SYSTEM_INSTRUCTION)
        .temperature(SUGGESTION_TEMPERATURE)
        .response_schema(meal_schema())
        .build();

    debug!(model = SUGGESTION_MODEL, excluded = exclusions.len().min(MAX_EXCLUSIONS), "generating meal suggestion");

    let response = client.generate_content(SUGGESTION_MODEL, &request).await?;
    let text = response.text().ok_or(MealgenError::EmptyResponse)?;
    let suggestion: MealSuggestion = serde_json::from_str(&text)?;
    Ok(suggestion)
}
