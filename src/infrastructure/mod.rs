//! Infrastructure adapters implementing domain ports

mod gemini;

pub use gemini::{GeminiClient, API_KEY_ENV};
