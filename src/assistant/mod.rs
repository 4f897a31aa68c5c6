//! Hostel assistant
//!
//! Answers policy questions over the live dataset by driving a
//! `TextGenerator` port with a context-rich prompt. A port failure never
//! escapes: it is converted into a plain-language chat reply at the call
//! site, so the hosting surface stays up whatever the service does.

mod prompt;

pub use prompt::build_prompt;

use crate::config::HostelConfig;
use crate::domain::ports::TextGenerator;
use crate::domain::store::HostelStore;

/// Fallback reply when the service returns an empty completion
const EMPTY_REPLY: &str = "I couldn't process that request.";

/// The policy-and-records chat assistant
pub struct Assistant<'a> {
    config: &'a HostelConfig,
    generator: &'a dyn TextGenerator,
}

impl<'a> Assistant<'a> {
    pub fn new(config: &'a HostelConfig, generator: &'a dyn TextGenerator) -> Self {
        Self { config, generator }
    }

    /// Opening message shown before the first question
    pub fn greeting(&self) -> &str {
        &self.config.assistant.greeting
    }

    /// Answer a question against the current store state
    ///
    /// Always returns a displayable reply; failures come back as an
    /// apology with the underlying cause folded in.
    pub fn ask(&self, store: &HostelStore, question: &str) -> String {
        let prompt = build_prompt(self.config, store, question);
        match self.generator.generate(&prompt) {
            Ok(reply) if reply.trim().is_empty() => EMPTY_REPLY.to_string(),
            Ok(reply) => reply,
            Err(err) => format!(
                "Sorry, I'm having trouble reaching the assistant service right now ({err}). Please try again later."
            ),
        }
    }
}
