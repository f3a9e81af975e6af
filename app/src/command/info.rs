use quill_config::Config;
use quill_providers::OllamaProvider;
use tracing::info;

/// Strategy for displaying configuration information.
///
/// Outputs the effective configuration (model, endpoint, transcript
/// directory) and probes whether the Ollama endpoint is reachable.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        println!("=== quill Configuration ===\n");

        println!("Model:");
        println!("  Name: {}", config.model.name);
        println!("  Base URL: {}", config.model.base_url);
        println!("  Temperature: {}", config.model.temperature);
        println!();

        println!("Chat:");
        println!("  History Dir: {}", config.history_path()?.display());
        if let Some(ref template) = config.chat.system_template {
            println!("  System Template: {}", truncate(template, 60));
        }
        println!();

        println!("Ollama:");
        info!("Probing Ollama endpoint");
        let provider = OllamaProvider::new(config.model.base_url.clone());
        match provider.probe().await {
            Ok(version) => println!("  Status: Connected (version {version})"),
            Err(e) => {
                println!("  Status: Connection failed");
                println!("  Error: {e}");
            }
        }

        Ok(())
    }
}

/// Shorten `s` to at most `max_len` bytes, cutting on a char boundary.
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }

    let budget = max_len.saturating_sub(3);
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= budget)
        .last()
        .unwrap_or(0);

    format!("{}...", &s[..cut])
}
