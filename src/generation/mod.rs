//! The two caller-facing operations: meal suggestion and meal image.

pub mod image;
pub mod suggestion;

pub use image::{decode_data_uri, generate_meal_image};
pub use suggestion::generate_meal_suggestion;
