//! Durable transcript storage.
//!
//! The canonical on-disk document is `{"model": ..., "messages": [...]}`,
//! pretty-printed UTF-8 JSON with non-ASCII characters left unescaped. For
//! backward compatibility, loading also accepts a bare array of message
//! records.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{from_reader, to_writer_pretty};
use time::OffsetDateTime;
use time::macros::format_description;

use crate::error::{Error, Result};
use crate::types::Message;

/// The canonical transcript document: a model identifier plus the ordered
/// conversation it produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transcript {
    /// The model identifier the session was configured with.
    pub model: String,

    /// The conversation turns, in order.
    pub messages: Vec<Message>,
}

impl Transcript {
    /// Creates a transcript document from a model identifier and history.
    pub fn new(model: impl Into<String>, messages: &[Message]) -> Self {
        Self {
            model: model.into(),
            messages: messages.to_vec(),
        }
    }
}

/// The two accepted on-disk shapes, resolved at parse time. The canonical
/// object is attempted first, then the bare message array. Only `messages`
/// matters on load; `model` and any other keys of the wrapped shape are
/// ignored, so documents with or without them load the same way.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TranscriptDocument {
    Canonical { messages: Vec<Message> },
    Bare(Vec<Message>),
}

impl TranscriptDocument {
    fn into_messages(self) -> Vec<Message> {
        match self {
            TranscriptDocument::Canonical { messages, .. } => messages,
            TranscriptDocument::Bare(messages) => messages,
        }
    }
}

/// Writes a transcript to `path`, creating parent directories as needed and
/// unconditionally overwriting an existing file.
pub fn save(path: &Path, model: &str, messages: &[Message]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .map_err(|err| Error::io("failed to create transcript directory", err))?;
    }
    let file =
        File::create(path).map_err(|err| Error::io("failed to create transcript file", err))?;
    let writer = BufWriter::new(file);
    to_writer_pretty(writer, &Transcript::new(model, messages))
        .map_err(|err| Error::serialization("failed to serialize transcript", Some(Box::new(err))))
}

/// Loads a transcript from `path`.
///
/// A missing file yields `Ok(None)` — distinct from an empty history — and
/// the caller keeps its freshly seeded state. A present file must parse as
/// one of the two accepted shapes; anything else is an error the caller
/// reports as a warning and then proceeds without a document.
pub fn load(path: &Path) -> Result<Option<Vec<Message>>> {
    if !path.exists() {
        return Ok(None);
    }
    let file = File::open(path).map_err(|err| Error::io("failed to open transcript file", err))?;
    let reader = BufReader::new(file);
    let document: TranscriptDocument = from_reader(reader)
        .map_err(|err| Error::serialization("failed to parse transcript", Some(Box::new(err))))?;
    Ok(Some(document.into_messages()))
}

/// Generates the default save path used when `/save` is given no argument:
/// `outputs/gpt_oss_chat_<YYYYMMDD_HHMMSS>.json`.
pub fn default_save_path() -> PathBuf {
    let format = format_description!("[year][month][day]_[hour][minute][second]");
    let stamp = OffsetDateTime::now_utc()
        .format(&format)
        .unwrap_or_else(|_| "undated".to_string());
    PathBuf::from("outputs").join(format!("gpt_oss_chat_{stamp}.json"))
}
