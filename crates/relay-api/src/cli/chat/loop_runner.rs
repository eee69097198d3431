//! Main chat loop orchestration.
//!
//! Reads lines, hands them to the `SessionManager`, and lets the renderer
//! task redraw from session events. One request is in flight at most: the
//! loop awaits each turn before reading the next line, and the session
//! refuses overlapping submissions anyway.

use std::io::Write;

use console::style;

use relay_core::session::manager::SessionManager;
use relay_infra::client::HttpChatBackend;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::{ChatRenderer, format_transcript};

/// Run the interactive chat loop against the relay server at `server`.
pub async fn run_chat_loop(server: &str) -> anyhow::Result<()> {
    let backend = HttpChatBackend::new(server);
    let mut session = SessionManager::new();

    print_welcome_banner(server);
    tracing::info!(endpoint = backend.endpoint(), "chat session started");

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;
    let mut out = writer.clone();

    let renderer = ChatRenderer::new(writer, true);
    let render_task = tokio::spawn(renderer.run(session.subscribe()));

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                let _ = writeln!(out, "\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                let _ = writeln!(
                    out,
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                );
            }
            InputEvent::Message(text) => {
                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => {
                            let _ = write!(out, "{}", commands::help_text());
                        }
                        ChatCommand::Clear => chat_input.clear(),
                        ChatCommand::History => {
                            let _ = write!(out, "{}", format_transcript(session.messages()));
                        }
                        ChatCommand::Exit => {
                            let _ = writeln!(out, "\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::Unknown(name) => {
                            let _ = writeln!(
                                out,
                                "\n  {} Unknown command: {}. Type /help for available commands.",
                                style("?").yellow().bold(),
                                style(name).dim()
                            );
                        }
                    }
                    continue;
                }

                session.set_input(text.as_str());
                session.send(&text, &backend).await;
            }
        }
    }

    chat_input.flush();
    // Dropping the session closes its event bus, which ends the renderer.
    drop(session);
    let _ = render_task.await;

    Ok(())
}
