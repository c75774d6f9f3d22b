//! mealgen — Gemini-backed meal suggestion and food image generation.
//!
//! A thin client over the Gemini `generateContent` endpoint providing two
//! stateless operations: a structured meal suggestion (typed JSON output) and
//! an illustrative food photo returned as a PNG data URI. Image generation is
//! best-effort; it never fails the suggestion flow.
//!
//! # Quick Start
//!
//! ```no_run
//! use mealgen::prelude::*;
//!
//! # async fn example() -> mealgen::error::Result<()> {
//! let client = GeminiClient::from_config(MealgenConfig::global())?;
//!
//! let recent = vec!["Pad Thai".to_string(), "Lasagna".to_string()];
//! let suggestion = generate_meal_suggestion(&client, &recent).await?;
//! println!("{}: {}", suggestion.name, suggestion.description);
//!
//! // Optional; `None` means the caller should show a placeholder.
//! let image = generate_meal_image(&client, &suggestion.name, &suggestion.description).await;
//! println!("got image: {}", image.is_some());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod generation;
pub mod prelude;
pub mod provider;
pub mod types;
