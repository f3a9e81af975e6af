//! Read-only browsing of saved transcripts ("Previous Chats").

use quill_config::Config;
use quill_conversation::TranscriptStore;
use quill_core::Role;

/// Input parameters for the History command strategy.
#[derive(Debug, Clone)]
pub struct HistoryInput {
    /// Show one transcript by file name instead of listing all
    pub show: Option<String>,
}

/// Strategy for executing the History command.
///
/// Loads every transcript in the history directory, newest first. Display
/// only; nothing here ever merges back into a live session.
#[derive(Debug, Clone, Copy)]
pub struct HistoryStrategy;

impl super::CommandStrategy for HistoryStrategy {
    type Input = HistoryInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let store = TranscriptStore::new(config.history_path()?)?;
        let transcripts = store.load_all()?;

        if let Some(name) = input.show {
            let Some(transcript) = transcripts.iter().find(|t| t.id == name) else {
                anyhow::bail!("No transcript named {name} in {}", store.dir().display());
            };

            println!("=== Chat: {} ===\n", transcript.id);
            for msg in &transcript.messages {
                match msg.role {
                    Role::User => println!("You: {}\n", msg.content),
                    Role::Assistant => println!("AI: {}\n", msg.content),
                }
            }
            return Ok(());
        }

        if transcripts.is_empty() {
            println!("No chat histories found.");
            return Ok(());
        }

        for transcript in &transcripts {
            println!(
                "{}  ({} messages)",
                transcript.id,
                transcript.messages.len()
            );
        }

        Ok(())
    }
}
