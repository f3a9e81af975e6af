use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ModelConfig {
    #[serde(default = "ModelConfig::default_name")]
    pub name: String,
    #[serde(default = "ModelConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "ModelConfig::default_temperature")]
    pub temperature: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            base_url: Self::default_base_url(),
            temperature: Self::default_temperature(),
        }
    }
}

impl ModelConfig {
    fn default_name() -> String {
        "llama3.2".to_string()
    }

    fn default_base_url() -> String {
        "http://localhost:11434".to_string()
    }

    const fn default_temperature() -> f32 {
        0.7
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChatConfig {
    /// Where transcript files go. Relative paths resolve under `~/quill/`.
    #[serde(default = "ChatConfig::default_history_dir")]
    pub history_dir: String,
    /// Optional override of the built-in instruction template. Must keep
    /// the `{context}` and `{question}` slots to be useful.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_template: Option<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            history_dir: Self::default_history_dir(),
            system_template: None,
        }
    }
}

impl ChatConfig {
    fn default_history_dir() -> String {
        "chat_histories".to_string()
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("quill");

        let config_path = config_dir.join("config.json");

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'quill init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;

        info!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("quill");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Resolve the transcript directory to an absolute path.
    pub fn history_path(&self) -> anyhow::Result<PathBuf> {
        let dir = PathBuf::from(&self.chat.history_dir);
        if dir.is_absolute() {
            return Ok(dir);
        }
        Ok(Self::ensure_config_dir()?.join(dir))
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "model": {
    "name": "llama3.2",
    "base_url": "http://localhost:11434",
    "temperature": 0.7
  },
  "chat": {
    "history_dir": "chat_histories"
  }
}"#;

        std::fs::write(&config_path, config_template)?;
        info!("Wrote config template to {}", config_path.display());

        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Next steps:");
        println!("   1. Ensure Ollama is running (ollama serve) and the model is pulled");
        println!("   2. Run 'quill chat' to start a conversation");
        println!();
        println!("Configuration options:");
        println!("   - model.name: Ollama model to use (llama3.2, qwen2.5, etc.)");
        println!("   - model.base_url: Ollama server address");
        println!("   - chat.history_dir: where saved transcripts are written");
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn empty_object_fills_all_defaults() {
        let config: Config = serde_json::from_str("{}").expect("deserialize");

        assert_eq!(config.model.name, "llama3.2");
        assert_eq!(config.model.base_url, "http://localhost:11434");
        assert_eq!(config.chat.history_dir, "chat_histories");
        assert!(config.chat.system_template.is_none());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn partial_config_keeps_remaining_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"model":{"name":"qwen2.5"}}"#).expect("deserialize");

        assert_eq!(config.model.name, "qwen2.5");
        assert_eq!(config.model.base_url, "http://localhost:11434");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn config_round_trips_through_serde() {
        let config = Config {
            model: ModelConfig::default(),
            chat: ChatConfig {
                history_dir: "/tmp/transcripts".to_string(),
                system_template: Some("{context} {question}".to_string()),
            },
        };

        let json = serde_json::to_string(&config).expect("serialize");
        let back: Config = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(back.chat.history_dir, "/tmp/transcripts");
        assert_eq!(
            back.chat.system_template.as_deref(),
            Some("{context} {question}")
        );
    }
}
