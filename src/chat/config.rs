//! Configuration types for the chat application.
//!
//! This module provides CLI argument parsing via `arrrg` and the resolved
//! session configuration. Every setting resolves with the same precedence:
//! an explicit command-line value wins over the environment, and the
//! environment wins over the built-in default.

use std::env;
use std::path::PathBuf;

use arrrg_derive::CommandLine;

/// Default endpoint base URL (a local vLLM server).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/v1";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-120b";

/// Default system prompt, also used as the instructions fallback for the
/// single-turn protocol when the configured prompt is empty.
pub const DEFAULT_SYSTEM: &str = "You are a helpful assistant.";

/// Command-line arguments for the gpt-oss-chat tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Endpoint base URL.
    #[arrrg(optional, "Endpoint base URL (default: http://localhost:8000/v1)", "URL")]
    pub base_url: Option<String>,

    /// Model identifier sent with every request.
    #[arrrg(optional, "Model to use (default: openai/gpt-oss-120b)", "MODEL")]
    pub model: Option<String>,

    /// System prompt to set context for the conversation.
    #[arrrg(optional, "System prompt for the conversation", "PROMPT")]
    pub system: Option<String>,

    /// Transcript file loaded at startup and written at exit.
    #[arrrg(optional, "Transcript file to restore and persist", "PATH")]
    pub transcript: Option<String>,

    /// Use the single-turn Responses API instead of Chat Completions.
    #[arrrg(flag, "Use the Responses API (single-turn, no server-side history)")]
    pub responses: bool,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

/// Which of the two request protocols the session uses. Fixed at startup.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Protocol {
    /// Full conversation per request, system turn embedded at index 0.
    ChatCompletions,

    /// One stateless request per turn: instructions plus the latest user
    /// text. The local history is kept only for transcript fidelity.
    Responses,
}

impl Protocol {
    /// Returns true for the chat-style variant, which embeds the system turn
    /// in the history.
    pub fn embeds_system_turn(&self) -> bool {
        matches!(self, Protocol::ChatCompletions)
    }
}

/// Resolved configuration for a chat session.
///
/// Immutable after construction except for the system prompt, which `/system`
/// rewrites mid-session.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    /// The endpoint base URL.
    pub base_url: String,

    /// The model identifier.
    pub model: String,

    /// The system prompt. Mutable via `/system`.
    pub system_prompt: String,

    /// Transcript restored at startup and written at exit, when set.
    pub transcript_path: Option<PathBuf>,

    /// The request protocol for this session.
    pub protocol: Protocol,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,
}

impl ChatConfig {
    /// Creates a new ChatConfig with built-in defaults, ignoring the
    /// environment.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM.to_string(),
            transcript_path: None,
            protocol: Protocol::ChatCompletions,
            use_color: true,
        }
    }

    /// Sets the endpoint base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Sets the transcript path.
    pub fn with_transcript_path(mut self, path: Option<PathBuf>) -> Self {
        self.transcript_path = path;
        self
    }

    /// Sets the request protocol.
    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves one setting: explicit override, then environment, then default.
fn resolve_setting(explicit: Option<String>, env_var: &str, default: &str) -> String {
    explicit
        .or_else(|| env::var(env_var).ok())
        .unwrap_or_else(|| default.to_string())
}

impl From<ChatArgs> for ChatConfig {
    fn from(args: ChatArgs) -> Self {
        ChatConfig {
            base_url: resolve_setting(args.base_url, "VLLM_BASE_URL", DEFAULT_BASE_URL),
            model: resolve_setting(args.model, "VLLM_MODEL", DEFAULT_MODEL),
            system_prompt: resolve_setting(args.system, "VLLM_SYSTEM", DEFAULT_SYSTEM),
            transcript_path: args.transcript.map(PathBuf::from),
            protocol: if args.responses {
                Protocol::Responses
            } else {
                Protocol::ChatCompletions
            },
            use_color: !args.no_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ChatConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.system_prompt, DEFAULT_SYSTEM);
        assert!(config.transcript_path.is_none());
        assert_eq!(config.protocol, Protocol::ChatCompletions);
        assert!(config.use_color);
    }

    #[test]
    fn config_from_args_explicit_wins() {
        let args = ChatArgs {
            base_url: Some("http://gpu-box:8000/v1".to_string()),
            model: Some("openai/gpt-oss-20b".to_string()),
            system: Some("You are terse.".to_string()),
            transcript: Some("chat.json".to_string()),
            responses: true,
            no_color: true,
        };
        let config = ChatConfig::from(args);
        assert_eq!(config.base_url, "http://gpu-box:8000/v1");
        assert_eq!(config.model, "openai/gpt-oss-20b");
        assert_eq!(config.system_prompt, "You are terse.");
        assert_eq!(config.transcript_path, Some(PathBuf::from("chat.json")));
        assert_eq!(config.protocol, Protocol::Responses);
        assert!(!config.use_color);
    }

    #[test]
    fn resolve_setting_precedence() {
        // Explicit beats environment beats default. A variable name no test
        // environment sets keeps this free of env manipulation.
        let var = "GPT_OSS_CHAT_TEST_UNSET_VAR";
        assert_eq!(
            resolve_setting(Some("explicit".to_string()), var, "default"),
            "explicit"
        );
        assert_eq!(resolve_setting(None, var, "default"), "default");
    }

    #[test]
    fn protocol_embedding() {
        assert!(Protocol::ChatCompletions.embeds_system_turn());
        assert!(!Protocol::Responses.embeds_system_turn());
    }

    #[test]
    fn config_builder_pattern() {
        let config = ChatConfig::new()
            .with_base_url("http://example.com/v1")
            .with_model("openai/gpt-oss-20b")
            .with_system_prompt("Test prompt")
            .with_transcript_path(Some(PathBuf::from("transcript.json")))
            .with_protocol(Protocol::Responses)
            .without_color();

        assert_eq!(config.base_url, "http://example.com/v1");
        assert_eq!(config.model, "openai/gpt-oss-20b");
        assert_eq!(config.system_prompt, "Test prompt");
        assert_eq!(
            config.transcript_path,
            Some(PathBuf::from("transcript.json"))
        );
        assert_eq!(config.protocol, Protocol::Responses);
        assert!(!config.use_color);
    }
}
