//! Text-generation port
//!
//! The assistant treats the model service as an opaque request/response
//! call. No retry contract; failures surface as `WardenError` and are
//! recovered at the assistant call site.

use crate::error::WardenResult;

/// An external text-generation service
pub trait TextGenerator {
    /// Produce a completion for the given prompt
    fn generate(&self, prompt: &str) -> WardenResult<String>;
}
