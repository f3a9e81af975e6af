//! Prompt-context assembly.
//!
//! The model sees the whole conversation every turn: prior messages are
//! rendered as alternating `User:` / `AI:` lines and substituted, together
//! with the newest question, into a fixed instruction template.

use crate::{ChatMessage, Role};

/// Slot markers recognized by [`PromptTemplate::render`].
const CONTEXT_SLOT: &str = "{context}";
const QUESTION_SLOT: &str = "{question}";

/// The default instruction template.
pub const DEFAULT_TEMPLATE: &str = "You are a helpful AI assistant.\n\
Conversation History: {context}\n\
\n\
Answer the following question based on the context:\n\
Question: {question}\n\
\n\
Helpful Answer:";

/// Render conversation history as the context string sent to the model.
///
/// Lines are newline-separated, chronological, one per message.
#[must_use]
pub fn render_context(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|msg| match msg.role {
            Role::User => format!("User: {}", msg.content),
            Role::Assistant => format!("AI: {}", msg.content),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// An instruction template with two named slots, `{context}` and
/// `{question}`.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Substitute both slots verbatim.
    ///
    /// Slots are located in the template text only; substituted values are
    /// never re-scanned, so user content containing a slot marker stays
    /// untouched.
    #[must_use]
    pub fn render(&self, context: &str, question: &str) -> String {
        let mut out =
            String::with_capacity(self.template.len() + context.len() + question.len());
        let mut rest = self.template.as_str();

        loop {
            let next = [
                rest.find(CONTEXT_SLOT).map(|i| (i, CONTEXT_SLOT, context)),
                rest.find(QUESTION_SLOT).map(|i| (i, QUESTION_SLOT, question)),
            ]
            .into_iter()
            .flatten()
            .min_by_key(|(i, _, _)| *i);

            match next {
                Some((i, slot, value)) => {
                    out.push_str(&rest[..i]);
                    out.push_str(value);
                    rest = &rest[i + slot.len()..];
                }
                None => {
                    out.push_str(rest);
                    break;
                }
            }
        }

        out
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}
