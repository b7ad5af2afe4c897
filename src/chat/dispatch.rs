//! Request dispatch for the two protocol variants.
//!
//! One variant is chosen at configuration time and fixed for the life of the
//! session; the session holds it behind a trait object instead of branching
//! on every turn.

use async_trait::async_trait;

use crate::chat::config::{ChatConfig, DEFAULT_SYSTEM, Protocol};
use crate::chat::history::History;
use crate::client::OpenAi;
use crate::error::Result;
use crate::types::{ChatCompletionParams, ResponseCreateParams};

/// Sends the current turn to the endpoint and extracts a single assistant
/// reply.
///
/// Transport failures propagate untouched; the session loop aborts the turn
/// and keeps running.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// Produce the assistant reply for `user_text`.
    ///
    /// `history` already contains the just-appended user turn.
    async fn respond(
        &self,
        client: &OpenAi,
        config: &ChatConfig,
        history: &History,
        user_text: &str,
    ) -> Result<String>;
}

/// Chat-style variant: the full ordered history, system turn included, is
/// sent in one request.
pub struct ChatCompletionsDispatcher;

#[async_trait]
impl Dispatcher for ChatCompletionsDispatcher {
    async fn respond(
        &self,
        client: &OpenAi,
        config: &ChatConfig,
        history: &History,
        _user_text: &str,
    ) -> Result<String> {
        let params = ChatCompletionParams::new(&config.model, history.messages().to_vec());
        let completion = client.chat_completions(params).await?;
        Ok(completion.text())
    }
}

/// Single-turn variant: instructions plus the latest user text, nothing else.
///
/// Each call is stateless from the endpoint's perspective; prior turns are
/// never transmitted, so multi-turn memory exists only if the server itself
/// retains state. The session still records every turn locally so the
/// transcript stays faithful. This is a known limitation of the variant, not
/// a bug.
pub struct ResponsesDispatcher;

#[async_trait]
impl Dispatcher for ResponsesDispatcher {
    async fn respond(
        &self,
        client: &OpenAi,
        config: &ChatConfig,
        _history: &History,
        user_text: &str,
    ) -> Result<String> {
        let instructions = if config.system_prompt.is_empty() {
            DEFAULT_SYSTEM
        } else {
            config.system_prompt.as_str()
        };
        let params = ResponseCreateParams::new(&config.model, instructions, user_text);
        let response = client.responses(params).await?;
        Ok(response.text())
    }
}

/// Selects the dispatcher for a protocol. Called once at session start.
pub fn dispatcher_for(protocol: Protocol) -> Box<dyn Dispatcher> {
    match protocol {
        Protocol::ChatCompletions => Box::new(ChatCompletionsDispatcher),
        Protocol::Responses => Box::new(ResponsesDispatcher),
    }
}
