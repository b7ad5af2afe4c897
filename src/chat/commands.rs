//! Slash command parsing for the chat loop.
//!
//! Commands control the session and are never sent to the endpoint. Anything
//! that is not a recognized command — including unknown slash-prefixed text —
//! is treated as a conversational turn; that permissive fall-through matches
//! the behavior this tool has always had and is kept as-is.

/// A parsed chat command.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    /// Exit the chat loop (`/exit`, `/quit`).
    Quit,

    /// Discard the conversation and re-seed (`/reset`).
    Reset,

    /// Set the system prompt (`/system <text>`).
    /// `None` means the argument was missing; the loop prints usage.
    System(Option<String>),

    /// Save the transcript (`/save [path]`).
    /// `None` saves to a generated path under `outputs/`.
    Save(Option<String>),
}

/// Parses a line of operator input for slash commands.
///
/// Returns `Some(ChatCommand)` for a recognized command, `None` when the line
/// should be forwarded to the endpoint as a user turn. The leading token is
/// matched case-insensitively.
///
/// # Examples
///
/// ```
/// # use gpt_oss_chat::chat::{ChatCommand, parse_command};
/// assert_eq!(parse_command("/quit"), Some(ChatCommand::Quit));
/// assert_eq!(parse_command("Hello there"), None);
/// assert_eq!(parse_command("/frobnicate"), None); // sent as a literal turn
/// ```
pub fn parse_command(input: &str) -> Option<ChatCommand> {
    let input = input.trim();

    if !input.starts_with('/') {
        return None;
    }

    let mut parts = input.splitn(2, ' ');
    let command = parts.next()?.to_lowercase();
    let argument = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

    match command.as_str() {
        "/exit" | "/quit" => Some(ChatCommand::Quit),
        "/reset" => Some(ChatCommand::Reset),
        "/system" => Some(ChatCommand::System(argument.map(|s| s.to_string()))),
        "/save" => Some(ChatCommand::Save(argument.map(|s| s.to_string()))),
        _ => None,
    }
}

/// Returns the command summary shown in the banner.
pub fn help_text() -> &'static str {
    "Commands: /reset, /system <text>, /save [path], /exit"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_commands() {
        assert_eq!(parse_command("/quit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/exit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("  /exit  "), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/EXIT"), Some(ChatCommand::Quit));
    }

    #[test]
    fn parse_reset() {
        assert_eq!(parse_command("/reset"), Some(ChatCommand::Reset));
        assert_eq!(parse_command("/Reset"), Some(ChatCommand::Reset));
    }

    #[test]
    fn parse_system() {
        assert_eq!(
            parse_command("/system You are terse."),
            Some(ChatCommand::System(Some("You are terse.".to_string())))
        );
        assert_eq!(parse_command("/system"), Some(ChatCommand::System(None)));
        // Whitespace-only argument counts as missing.
        assert_eq!(parse_command("/system   "), Some(ChatCommand::System(None)));
    }

    #[test]
    fn parse_save() {
        assert_eq!(
            parse_command("/save out/chat.json"),
            Some(ChatCommand::Save(Some("out/chat.json".to_string())))
        );
        assert_eq!(parse_command("/save"), Some(ChatCommand::Save(None)));
    }

    #[test]
    fn unknown_slash_input_falls_through() {
        // Preserved quirk: unrecognized commands become literal user turns.
        assert_eq!(parse_command("/frobnicate"), None);
        assert_eq!(parse_command("/systemprompt hi"), None);
        assert_eq!(parse_command("/ reset"), None);
    }

    #[test]
    fn non_commands() {
        assert_eq!(parse_command("Hello!"), None);
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
    }

    #[test]
    fn help_text_lists_commands() {
        let help = help_text();
        assert!(help.contains("/reset"));
        assert!(help.contains("/system"));
        assert!(help.contains("/save"));
        assert!(help.contains("/exit"));
    }
}
