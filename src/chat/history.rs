//! Ordered conversation history and system-prompt placement rules.
//!
//! The history is the one piece of state whose shape matters: insertion order
//! is conversation order, and under the chat-style protocol a system message,
//! if present, is unique and sits at index 0. The single-turn protocol keeps
//! the same structure purely as a transcript record.

use crate::types::Message;

/// The ordered, mutable sequence of conversation turns.
///
/// Owned exclusively by one session; there is no sharing and no concurrent
/// mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    messages: Vec<Message>,
}

impl History {
    /// Produce an empty history, or a one-element history containing a system
    /// message when a non-empty prompt is given.
    pub fn seed(system_prompt: Option<&str>) -> Self {
        let mut history = Self::default();
        if let Some(prompt) = system_prompt
            && !prompt.is_empty()
        {
            history.messages.push(Message::system(prompt));
        }
        history
    }

    /// Append a user turn.
    pub fn append_user(&mut self, text: impl Into<String>) {
        self.messages.push(Message::user(text));
    }

    /// Append an assistant turn.
    pub fn append_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(Message::assistant(text));
    }

    /// Overwrite the content of the leading system message, or insert one at
    /// index 0 when none is present.
    ///
    /// An empty `text` is a silent no-op; rejecting empty input is the
    /// caller's job.
    pub fn update_system_prompt(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.messages.first_mut() {
            Some(first) if first.is_system() => first.content = text.to_string(),
            _ => self.messages.insert(0, Message::system(text)),
        }
    }

    /// Insert a system message at index 0 unless one is already there.
    ///
    /// Used by the single-turn protocol to refresh the parallel record lazily
    /// before a call. Unlike [`update_system_prompt`], an existing system
    /// message is left untouched even when its content is stale.
    ///
    /// [`update_system_prompt`]: History::update_system_prompt
    pub fn ensure_system(&mut self, text: &str) {
        if !self.messages.first().is_some_and(Message::is_system) {
            self.messages.insert(0, Message::system(text));
        }
    }

    /// Discard all turns and re-seed.
    pub fn reset(&mut self, system_prompt: Option<&str>) {
        *self = Self::seed(system_prompt);
    }

    /// Wholesale substitution with messages loaded from a transcript.
    ///
    /// The load is trusted: role ordering is not validated.
    pub fn replace(&mut self, messages: Vec<Message>) {
        self.messages = messages;
    }

    /// The turns in conversation order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Consumes the history, returning the turns.
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }

    /// The number of turns, system message included.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if the history holds no turns.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
