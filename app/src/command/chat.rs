//! Live turn-taking against the local model ("Current Chat").

use std::io::Write;

use quill_conversation::{ChatSession, ConversationEngine, TranscriptStore};
use quill_providers::OllamaProvider;
use tracing::info;

use super::init_components;

/// Input parameters for the Chat command strategy.
#[derive(Debug, Clone)]
pub struct ChatInput {
    /// Optional single message to send (non-interactive mode)
    pub message: Option<String>,
    /// Optional model override
    pub model: Option<String>,
    /// Save the transcript when the session ends
    pub save: bool,
}

/// Strategy for executing the Chat command.
///
/// Maintains an in-memory session for the lifetime of the process; one
/// full turn completes before the next begins. `/save` snapshots the
/// session to a transcript file at any point.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let common = init_components()?;

        let mut engine_config = common.engine_config;
        if let Some(model) = input.model {
            engine_config.model = model;
        }

        info!("Starting chat with model {}", engine_config.model);

        let engine = ConversationEngine::new(common.provider, engine_config);
        let mut session = ChatSession::new();

        if let Some(msg) = input.message {
            let result = engine.process_turn(&mut session, &msg).await;
            println!("{}", result.response);
        } else {
            run_interactive(&engine, &mut session, &common.store).await?;
        }

        if input.save && !session.is_empty() {
            let name = common.store.save(&session.messages)?;
            println!("Chat saved to {name}");
        }

        Ok(())
    }
}

/// Interactive stdin/stdout loop.
async fn run_interactive(
    engine: &ConversationEngine<OllamaProvider>,
    session: &mut ChatSession,
    store: &TranscriptStore,
) -> anyhow::Result<()> {
    println!(
        "=== Chat Session: {} (model {}) ===",
        session.id,
        engine.config().model
    );
    println!("Type 'exit' or 'quit' to end, '/save' to save the transcript, '/reset' to start over.\n");

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input)? == 0 {
            // EOF
            break;
        }
        let input = input.trim();

        if matches!(input, "exit" | "quit" | "q") {
            println!("\nSession ended. Total turns: {}", session.turn_count());
            break;
        }

        if input == "/save" {
            if session.is_empty() {
                println!("Nothing to save yet.");
            } else {
                let name = store.save(&session.messages)?;
                println!("Chat saved to {name}");
            }
            continue;
        }

        if input == "/reset" {
            session.reset();
            println!("Session cleared.");
            continue;
        }

        if input.is_empty() {
            continue;
        }

        let result = engine.process_turn(session, input).await;
        println!("\n{}\n", result.response);
    }

    Ok(())
}
