//! Interactive chat application module.
//!
//! This module implements the conversation-state machine behind the
//! `gpt-oss-chat` binary:
//!
//! - [`config`]: CLI argument parsing and configuration resolution
//! - [`commands`]: slash command parsing
//! - [`history`]: the ordered message history and system-prompt placement
//! - [`transcript`]: durable transcript save/load
//! - [`dispatch`]: the two request protocol variants
//! - [`session`]: session glue tying the above together

pub mod commands;
pub mod config;
pub mod dispatch;
pub mod history;
pub mod transcript;

mod session;

pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{ChatArgs, ChatConfig, Protocol};
pub use dispatch::{ChatCompletionsDispatcher, Dispatcher, ResponsesDispatcher, dispatcher_for};
pub use history::History;
pub use session::ChatSession;
pub use transcript::Transcript;
