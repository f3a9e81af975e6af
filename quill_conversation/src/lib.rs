#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Session store, turn engine, and transcript persistence.
//!
//! One interactive session is an append-only [`ChatSession`] owned by the
//! caller. The [`ConversationEngine`] processes one full turn at a time:
//! append the user message, rebuild the context string from the whole
//! session, ask the model, append the reply. [`TranscriptStore`] snapshots
//! a session to a timestamped JSON file and reads those files back for
//! display.

mod engine;
mod session;
mod transcript;

pub use engine::{ConversationEngine, EngineConfig, FALLBACK_REPLY, TurnResult};
pub use session::ChatSession;
pub use transcript::{Transcript, TranscriptError, TranscriptStore};
