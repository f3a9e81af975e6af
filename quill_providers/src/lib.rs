#![deny(
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

//! Language-model providers.
//!
//! Each provider implements [`quill_core::LLMProvider`] over its own wire
//! protocol. Only the local Ollama server is supported.

mod ollama;

pub use ollama::OllamaProvider;
