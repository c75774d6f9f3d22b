//! Gemini REST client and HTTP plumbing.

pub mod gemini;
pub mod http;

pub use gemini::{ContentRequest, GeminiClient, GenerateContentResponse, InlineData};
