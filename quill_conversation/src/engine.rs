//! Turn processing against the language model.
//!
//! The engine is a plain composition: render the context string, fill the
//! instruction template, call the model, return its text. No length
//! capping or truncation is performed; the full history is resent every
//! turn.

use tracing::{debug, error, info};

use quill_core::{LLMProvider, PromptTemplate, Role};

use crate::session::ChatSession;

/// Returned to the user when the model call fails for any reason.
pub const FALLBACK_REPLY: &str =
    "I'm sorry, but I encountered an error while processing your request.";

/// Configuration for the conversation engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Model to use for completions
    pub model: String,
    /// Instruction template with `{context}` and `{question}` slots
    pub template: PromptTemplate,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model: "llama3.2".to_string(),
            template: PromptTemplate::default(),
        }
    }
}

/// Result of processing a conversation turn.
#[derive(Debug, Clone)]
pub struct TurnResult {
    /// Assistant's response (or the fallback reply)
    pub response: String,
    /// Turn number, 1-based
    pub turn_number: usize,
}

/// Single-threaded turn engine over an [`LLMProvider`].
///
/// One full turn completes before the next begins; there is no
/// interruption or concurrent-turn state.
pub struct ConversationEngine<P> {
    provider: P,
    config: EngineConfig,
}

impl<P> ConversationEngine<P>
where
    P: LLMProvider,
{
    pub const fn new(provider: P, config: EngineConfig) -> Self {
        Self { provider, config }
    }

    /// Fill the instruction template and ask the model.
    ///
    /// Any provider failure is reported and degraded to
    /// [`FALLBACK_REPLY`]; errors never reach the caller. No retry.
    pub async fn respond(&self, context: &str, question: &str) -> String {
        let prompt = self.config.template.render(context, question);
        debug!("Prompt assembled: {} chars", prompt.len());

        match self.provider.complete(&prompt, &self.config.model).await {
            Ok(text) => text,
            Err(e) => {
                error!("Error generating response: {e}");
                FALLBACK_REPLY.to_string()
            }
        }
    }

    /// Process one full conversation turn.
    ///
    /// Appends the user message, rebuilds the context from the entire
    /// session (newest message included), asks the model, and appends the
    /// assistant reply.
    pub async fn process_turn(&self, session: &mut ChatSession, input: &str) -> TurnResult {
        session.add_message(Role::User, input.to_string());

        let context = session.context();
        let response = self.respond(&context, input).await;

        session.add_message(Role::Assistant, response.clone());

        let turn_number = session.turn_count();
        info!("Turn {turn_number} completed for session {}", session.id);

        TurnResult {
            response,
            turn_number,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }
}
