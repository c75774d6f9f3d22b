//! Convenience re-exports for common use.

pub use crate::config::MealgenConfig;
pub use crate::error::{MealgenError, Result};
pub use crate::generation::{generate_meal_image, generate_meal_suggestion};
pub use crate::provider::GeminiClient;
pub use crate::types::MealSuggestion;
