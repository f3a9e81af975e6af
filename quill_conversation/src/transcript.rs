//! Transcript files.
//!
//! A transcript is a read-only snapshot of a session at save time: a
//! pretty-printed JSON array of `{ "role", "content" }` objects, one file
//! per save, named by the local wall clock at second resolution.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use quill_core::ChatMessage;

/// Errors from transcript persistence. These propagate to the caller and
/// abort the current operation; there is no partial-failure recovery.
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("transcript I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode transcript: {0}")]
    Encode(serde_json::Error),

    #[error("malformed transcript {file}: {source}")]
    Malformed {
        file: String,
        source: serde_json::Error,
    },
}

/// A previously saved session snapshot.
#[derive(Debug, Clone)]
pub struct Transcript {
    /// File name the snapshot was saved under, e.g. `chat_20260825_143012.json`
    pub id: String,
    /// Message sequence in original append order
    pub messages: Vec<ChatMessage>,
}

/// File-backed store of session snapshots, one JSON file per save.
#[derive(Debug, Clone)]
pub struct TranscriptStore {
    dir: PathBuf,
}

impl TranscriptStore {
    /// Open a store rooted at `dir`, creating the directory if absent.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, TranscriptError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save a message sequence, returning the file name it was written
    /// under.
    ///
    /// Names carry second resolution; a save colliding with an existing
    /// file in the same second gets a numeric suffix instead of
    /// overwriting it. No atomic-write guarantee.
    pub fn save(&self, messages: &[ChatMessage]) -> Result<String, TranscriptError> {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let mut name = format!("chat_{stamp}.json");
        let mut counter = 1_u32;
        while self.dir.join(&name).exists() {
            name = format!("chat_{stamp}_{counter}.json");
            counter += 1;
        }

        let body = serde_json::to_string_pretty(messages).map_err(TranscriptError::Encode)?;
        fs::write(self.dir.join(&name), body)?;

        info!("Saved transcript {name} ({} messages)", messages.len());
        Ok(name)
    }

    /// Load every transcript in the store, newest first.
    ///
    /// Timestamp-based names sort lexicographically, so descending name
    /// order is descending capture time. A single malformed file fails
    /// the whole load. An empty or freshly created directory yields an
    /// empty vec.
    pub fn load_all(&self) -> Result<Vec<Transcript>, TranscriptError> {
        let mut transcripts = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }

            let id = entry.file_name().to_string_lossy().into_owned();
            debug!("Loading transcript {id}");

            let body = fs::read_to_string(&path)?;
            let messages = serde_json::from_str(&body).map_err(|source| {
                TranscriptError::Malformed {
                    file: id.clone(),
                    source,
                }
            })?;

            transcripts.push(Transcript { id, messages });
        }

        transcripts.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(transcripts)
    }
}
