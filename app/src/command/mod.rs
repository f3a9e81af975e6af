//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own type and input,
//! dispatched statically from `main`. No dynamic trait objects, no
//! runtime casting.

use quill_config::Config;
use quill_conversation::{EngineConfig, TranscriptStore};
use quill_core::PromptTemplate;
use quill_providers::OllamaProvider;

mod chat;
mod history;
mod info;
mod init;
mod version;

pub use chat::{ChatInput, ChatStrategy};
pub use history::{HistoryInput, HistoryStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via an associated type,
/// enabling type-safe parameter passing; calls are monomorphized at
/// compile time.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Shared components built from the config file.
pub struct CommonComponents {
    pub provider: OllamaProvider,
    pub engine_config: EngineConfig,
    pub store: TranscriptStore,
}

/// Load config and wire up provider, engine config, and transcript store.
pub fn init_components() -> anyhow::Result<CommonComponents> {
    let config = Config::load()?;

    let provider = OllamaProvider::new(config.model.base_url.clone())
        .with_temperature(config.model.temperature);

    let template = config
        .chat
        .system_template
        .as_ref()
        .map_or_else(PromptTemplate::default, |t| PromptTemplate::new(t.clone()));

    let engine_config = EngineConfig {
        model: config.model.name.clone(),
        template,
    };

    let store = TranscriptStore::new(config.history_path()?)?;

    Ok(CommonComponents {
        provider,
        engine_config,
        store,
    })
}
