//! Terminal redraw driven by session events.
//!
//! `ChatRenderer` consumes `SessionEvent`s: a spinner runs while the session
//! is pending and every bot message is printed as soon as it is appended, so
//! the newest message is always the last thing on screen. User messages are
//! already echoed by the readline prompt and are not reprinted.

use std::io::Write;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::RecvError;

use relay_types::chat::{Message, Sender};
use relay_types::event::SessionEvent;

pub struct ChatRenderer<W: Write> {
    writer: W,
    show_spinner: bool,
    spinner: Option<ProgressBar>,
}

impl<W: Write> ChatRenderer<W> {
    pub fn new(writer: W, show_spinner: bool) -> Self {
        Self {
            writer,
            show_spinner,
            spinner: None,
        }
    }

    /// Apply one session event to the screen.
    pub fn handle(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::PendingChanged { pending: true } => self.start_spinner(),
            SessionEvent::PendingChanged { pending: false } => self.stop_spinner(),
            SessionEvent::MessageAppended { message } => {
                if message.sender == Sender::Bot {
                    self.stop_spinner();
                    let _ = write!(self.writer, "{}", format_message(&message));
                    let _ = self.writer.flush();
                }
            }
        }
    }

    /// Redraw until the session's event bus closes.
    pub async fn run(mut self, mut events: Receiver<SessionEvent>) {
        loop {
            match events.recv().await {
                Ok(event) => self.handle(event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "renderer fell behind session events");
                }
                Err(RecvError::Closed) => break,
            }
        }
        self.stop_spinner();
    }

    #[cfg(test)]
    fn into_writer(self) -> W {
        self.writer
    }

    fn start_spinner(&mut self) {
        if !self.show_spinner || self.spinner.is_some() {
            return;
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(template) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
            spinner.set_style(template);
        }
        spinner.set_message("thinking...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

/// Render one message as a labelled, timestamped block.
pub fn format_message(message: &Message) -> String {
    let label = match message.sender {
        Sender::User => style("You").green().bold(),
        Sender::Bot => style("Bot").cyan().bold(),
    };
    let time = message.timestamp.with_timezone(&chrono::Local).format("%H:%M");
    let mut out = format!("\n  {label} {}\n", style(time).dim());
    for line in message.text.lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Render a whole conversation, oldest first.
pub fn format_transcript(messages: &[Message]) -> String {
    if messages.is_empty() {
        return format!("\n  {}\n", style("No messages yet.").dim());
    }
    messages.iter().map(format_message).collect()
}
