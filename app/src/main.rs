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

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod command;

use command::{
    ChatInput, ChatStrategy, CommandStrategy, HistoryInput, HistoryStrategy, InfoStrategy,
    InitStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "quill")]
#[command(about = "Chat with a locally hosted model, transcripts saved as files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a chat with the local model
    Chat {
        /// Single message to send (non-interactive mode)
        #[arg(short = 'm', long)]
        message: Option<String>,

        /// Model override
        #[arg(short = 'M', long)]
        model: Option<String>,

        /// Save the transcript when the session ends
        #[arg(long)]
        save: bool,
    },
    /// Browse previously saved transcripts
    History {
        /// Show one transcript by file name
        #[arg(long)]
        show: Option<String>,
    },
    /// Initialize configuration
    Init,
    /// Show effective configuration and probe the model endpoint
    Info,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat {
            message,
            model,
            save,
        } => {
            ChatStrategy
                .execute(ChatInput {
                    message,
                    model,
                    save,
                })
                .await
        }
        Commands::History { show } => HistoryStrategy.execute(HistoryInput { show }).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
