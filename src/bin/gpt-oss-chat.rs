//! Interactive chat client for gpt-oss models served through an
//! OpenAI-compatible endpoint (vLLM by default).
//!
//! # Usage
//!
//! ```bash
//! # Talk to a local vLLM server with default settings
//! gpt-oss-chat
//!
//! # Point at another endpoint and model
//! gpt-oss-chat --base-url http://gpu-box:8000/v1 --model openai/gpt-oss-20b
//!
//! # Restore and persist a transcript across sessions
//! gpt-oss-chat --transcript chats/today.json
//!
//! # Use the single-turn Responses API instead of Chat Completions
//! gpt-oss-chat --responses
//! ```
//!
//! # Commands
//!
//! While chatting:
//! - `/reset` - Discard the conversation and start over
//! - `/system <text>` - Change the system prompt
//! - `/save [path]` - Save the transcript (default: `outputs/gpt_oss_chat_<timestamp>.json`)
//! - `/exit`, `/quit` - Exit
//!
//! Anything else is sent to the model as a conversational turn.

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use gpt_oss_chat::chat::{ChatArgs, ChatCommand, ChatConfig, ChatSession, help_text, parse_command};
use gpt_oss_chat::{OpenAi, PlainTextRenderer, Renderer};

/// Main entry point for the gpt-oss-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("gpt-oss-chat [OPTIONS]");
    let config = ChatConfig::from(args);
    let use_color = config.use_color;

    // A malformed base URL is a warning, not a fatal error; fall back to the
    // built-in default endpoint.
    let client = match OpenAi::with_options(None, Some(config.base_url.clone()), None) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Warning: {err}; using the default endpoint");
            OpenAi::new(None)?
        }
    };
    let endpoint = client.base_url().to_string();
    let mut session = ChatSession::new(client, config);
    let mut renderer = PlainTextRenderer::with_color(use_color);
    let mut rl = DefaultEditor::new()?;

    println!("gpt-oss chat");
    println!("- base_url: {}", endpoint);
    println!("- model   : {}", session.model());
    println!("Type your message and press Enter.");
    println!("{}\n", help_text());

    // A bad transcript never blocks the session; warn and start fresh.
    match session.load_transcript() {
        Ok(Some(count)) => {
            let path = session.config().transcript_path.as_deref();
            renderer.print_info(&format!(
                "Loaded {} messages from {}",
                count,
                path.map(|p| p.display().to_string()).unwrap_or_default()
            ));
        }
        Ok(None) => {}
        Err(err) => {
            renderer.print_info(&format!("Warning: failed to load transcript: {err}"));
        }
    }

    loop {
        let readline = rl.readline("> ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Bye!");
                            break;
                        }
                        ChatCommand::Reset => {
                            session.reset();
                            renderer.print_info("Conversation reset.");
                        }
                        ChatCommand::System(Some(prompt)) => {
                            session.set_system_prompt(&prompt);
                            renderer.print_info("System prompt updated.");
                        }
                        ChatCommand::System(None) => {
                            renderer.print_info("Usage: /system <text>");
                        }
                        ChatCommand::Save(path) => {
                            match session.save_transcript_to(path.as_deref()) {
                                Ok(path) => renderer.print_info(&format!(
                                    "Saved transcript to {}",
                                    path.display()
                                )),
                                Err(err) => renderer
                                    .print_error(&format!("Failed to save transcript: {err}")),
                            }
                        }
                    }
                    continue;
                }

                // A failed turn is reported and the loop continues; the
                // history keeps the user turn that was already appended.
                match session.send(line).await {
                    Ok(reply) => renderer.print_reply(&reply),
                    Err(err) => renderer.print_error(&err.to_string()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C at the prompt is a soft interrupt; keep the session.
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("\nEnd of chat");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {err}"));
                break;
            }
        }
    }

    match session.write_transcript() {
        Ok(Some(path)) => renderer.print_info(&format!("Wrote transcript to {}", path.display())),
        Ok(None) => {}
        Err(err) => renderer.print_info(&format!("Note: couldn't write transcript: {err}")),
    }

    Ok(())
}
