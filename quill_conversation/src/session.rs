//! In-memory session store.
//!
//! A session holds the ordered message list for one running interaction.
//! Messages are only ever appended; there are no edit or delete
//! operations.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use quill_core::{ChatMessage, Role, render_context};

/// Append-only message store, unique per process instance.
#[derive(Debug, Clone)]
pub struct ChatSession {
    /// Session identifier
    pub id: Uuid,
    /// Message history, chronological
    pub messages: Vec<ChatMessage>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last append timestamp
    pub updated_at: DateTime<Utc>,
}

impl ChatSession {
    /// Create a new empty session.
    #[must_use]
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a message to the session.
    pub fn add_message(&mut self, role: Role, content: String) {
        self.messages.push(ChatMessage { role, content });
        self.updated_at = Utc::now();
    }

    /// Render the whole history as the context string for the model.
    #[must_use]
    pub fn context(&self) -> String {
        render_context(&self.messages)
    }

    #[must_use]
    pub const fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Completed user/assistant turns.
    #[must_use]
    pub const fn turn_count(&self) -> usize {
        self.messages.len() / 2
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop all messages, returning the session to its empty state.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.updated_at = Utc::now();
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_becomes_active_on_first_append() {
        let mut session = ChatSession::new();
        assert!(session.is_empty());

        session.add_message(Role::User, "Hello".to_string());
        assert!(!session.is_empty());
        assert_eq!(session.message_count(), 1);
    }

    #[test]
    fn appends_preserve_order() {
        let mut session = ChatSession::new();
        session.add_message(Role::User, "hi".to_string());
        session.add_message(Role::Assistant, "hello".to_string());
        session.add_message(Role::User, "how are you?".to_string());

        let contents: Vec<&str> = session
            .messages
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, ["hi", "hello", "how are you?"]);
    }

    #[test]
    fn context_renders_history_lines() {
        let mut session = ChatSession::new();
        session.add_message(Role::User, "hi".to_string());
        session.add_message(Role::Assistant, "hello".to_string());

        assert_eq!(session.context(), "User: hi\nAI: hello");
    }

    #[test]
    fn reset_returns_to_empty() {
        let mut session = ChatSession::new();
        session.add_message(Role::User, "hi".to_string());
        session.reset();

        assert!(session.is_empty());
        assert_eq!(session.turn_count(), 0);
    }
}
