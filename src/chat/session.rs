//! Core chat session management.
//!
//! `ChatSession` owns the conversation state and drives one dispatcher. The
//! binary's loop calls into it for every turn and command.

use std::path::{Path, PathBuf};

use crate::chat::config::ChatConfig;
use crate::chat::dispatch::{Dispatcher, dispatcher_for};
use crate::chat::history::History;
use crate::chat::transcript;
use crate::client::OpenAi;
use crate::error::Result;

/// A chat session: client, configuration, history, and the protocol variant
/// chosen at startup.
pub struct ChatSession {
    client: OpenAi,
    config: ChatConfig,
    history: History,
    dispatcher: Box<dyn Dispatcher>,
}

impl ChatSession {
    /// Creates a new chat session with the given client and configuration.
    ///
    /// Under the chat-style protocol the history is seeded with the system
    /// prompt; the single-turn protocol starts empty and inserts its system
    /// turn lazily before the first call.
    pub fn new(client: OpenAi, config: ChatConfig) -> Self {
        let dispatcher = dispatcher_for(config.protocol);
        Self::with_dispatcher(client, config, dispatcher)
    }

    /// Creates a new chat session with a custom dispatcher.
    pub fn with_dispatcher(
        client: OpenAi,
        config: ChatConfig,
        dispatcher: Box<dyn Dispatcher>,
    ) -> Self {
        let history = Self::seeded_history(&config);
        Self {
            client,
            config,
            history,
            dispatcher,
        }
    }

    fn seeded_history(config: &ChatConfig) -> History {
        if config.protocol.embeds_system_turn() {
            History::seed(Some(config.system_prompt.as_str()))
        } else {
            History::seed(None)
        }
    }

    /// Sends a user turn and returns the assistant reply.
    ///
    /// The user turn is appended before dispatch. On success the reply is
    /// appended as the next assistant turn. On a transport error the history
    /// keeps the just-appended user turn and the error propagates to the
    /// loop, which reports it and continues; the session stays usable.
    pub async fn send(&mut self, user_text: &str) -> Result<String> {
        if !self.config.protocol.embeds_system_turn() {
            self.history.ensure_system(&self.config.system_prompt);
        }
        self.history.append_user(user_text);

        let reply = self
            .dispatcher
            .respond(&self.client, &self.config, &self.history, user_text)
            .await?;

        self.history.append_assistant(reply.clone());
        Ok(reply)
    }

    /// Discards the conversation and re-seeds it.
    ///
    /// Only the chat-style protocol reseeds the system turn; the single-turn
    /// protocol reinserts it lazily on the next call.
    pub fn reset(&mut self) {
        self.history = Self::seeded_history(&self.config);
    }

    /// Sets the system prompt.
    ///
    /// The embedded system turn is rewritten immediately under the chat-style
    /// protocol. The single-turn protocol only updates the configuration; its
    /// parallel record refreshes on the next call. Callers reject empty text
    /// before getting here.
    pub fn set_system_prompt(&mut self, text: &str) {
        self.config.system_prompt = text.to_string();
        if self.config.protocol.embeds_system_turn() {
            self.history.update_system_prompt(text);
        }
    }

    /// Restores history from the configured transcript, if the file exists.
    ///
    /// Returns the number of restored messages, or `None` when no path is
    /// configured or no document is present. A parse failure is an error the
    /// caller reports as a warning before proceeding with the seeded history.
    pub fn load_transcript(&mut self) -> Result<Option<usize>> {
        let Some(path) = self.config.transcript_path.clone() else {
            return Ok(None);
        };
        match transcript::load(&path)? {
            Some(messages) => {
                let count = messages.len();
                self.history.replace(messages);
                Ok(Some(count))
            }
            None => Ok(None),
        }
    }

    /// Saves the transcript to `path`, or to a generated default path under
    /// `outputs/` when none is given. Returns the path written.
    pub fn save_transcript_to(&self, path: Option<&str>) -> Result<PathBuf> {
        let path = path
            .map(PathBuf::from)
            .unwrap_or_else(transcript::default_save_path);
        transcript::save(&path, &self.config.model, self.history.messages())?;
        Ok(path)
    }

    /// Writes the transcript to the configured path at session end.
    ///
    /// Returns the path written, or `None` when no path is configured.
    pub fn write_transcript(&self) -> Result<Option<&Path>> {
        match self.config.transcript_path.as_deref() {
            Some(path) => {
                transcript::save(path, &self.config.model, self.history.messages())?;
                Ok(Some(path))
            }
            None => Ok(None),
        }
    }

    /// Returns the conversation history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Returns the current model identifier.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Returns the current system prompt.
    pub fn system_prompt(&self) -> &str {
        &self.config.system_prompt
    }
}
