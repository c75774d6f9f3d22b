//! Meal image generation with graceful fallback.

use base64::Engine as _;
use tracing::{debug, warn};

use crate::error::MealgenError;
use crate::provider::{ContentRequest, GeminiClient};

pub const IMAGE_MODEL: &str = "gemini-2.5-flash-image";

const DATA_URI_PREFIX: &str = "data:image/png;base64,";

fn build_image_prompt(meal_name: &str, meal_description: &str) -> String {
    format!(
        "Professional food photography of {meal_name}. {meal_description}. \
         High resolution, appetizing, studio lighting, 4k."
    )
}

/// Generate an illustrative image for a meal, returned as a PNG data URI.
///
/// The image is a cosmetic enhancement on top of the suggestion itself, so
/// this never surfaces an error: a failed call or a response without an
/// inline-data part yields `None` and the caller substitutes a placeholder.
pub async fn generate_meal_image(
    client: &GeminiClient,
    meal_name: &str,
    meal_description: &str,
) -> Option<String> {
    let request = ContentRequest::builder()
        .prompt(build_image_prompt(meal_name, meal_description))
        .build();

    debug!(model = IMAGE_MODEL, meal = meal_name, "generating meal image");

    match client.generate_content(IMAGE_MODEL, &request).await {
        Ok(response) => match response.inline_data() {
            Some(inline) => Some(format!("{DATA_URI_PREFIX}{}", inline.data)),
            None => {
                warn!(model = IMAGE_MODEL, meal = meal_name, "no inline image part in response");
                None
            }
        },
        Err(e) => {
            warn!(model = IMAGE_MODEL, meal = meal_name, error = %e, "image generation failed");
            None
        }
    }
}

/// Decode the binary payload of a base64 data URI, for callers that want the
/// raw image bytes (e.g. to write to disk).
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>, MealgenError> {
    let payload = uri
        .split_once("base64,")
        .map(|(_, rest)| rest)
        .ok_or_else(|| MealgenError::InvalidArgument("not a base64 data URI".into()))?;
    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| MealgenError::InvalidArgument(format!("invalid base64 payload: {e}")))
}
