//! Line input for the terminal client.
//!
//! Lines are returned untouched and recorded in readline history. Output
//! written through the returned `SharedWriter` is drawn above the prompt.

use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

#[derive(Debug)]
pub enum InputEvent {
    /// User submitted a line (untrimmed; the session decides what is blank).
    Message(String),
    /// End of file (Ctrl+D).
    Eof,
    /// Interrupt signal (Ctrl+C).
    Interrupted,
}

pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Take over the terminal with `prompt`.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, stdout) = Readline::new(prompt)?;
        Ok((Self { rl }, stdout))
    }

    /// Wait for the next line, Ctrl+D or Ctrl+C. Read errors count as EOF.
    pub async fn read_line(&mut self) -> InputEvent {
        let event = to_input_event(self.rl.readline().await);
        if let InputEvent::Message(line) = &event {
            let _ = self.rl.add_history_entry(line.clone());
        }
        event
    }

    /// Clear the terminal screen.
    pub fn clear(&mut self) {
        let _ = self.rl.clear();
    }

    /// Restore the terminal before exit.
    pub fn flush(&mut self) {
        let _ = self.rl.flush();
    }
}

fn to_input_event(result: Result<ReadlineEvent, ReadlineError>) -> InputEvent {
    match result {
        Ok(ReadlineEvent::Line(line)) => InputEvent::Message(line),
        Ok(ReadlineEvent::Eof) => InputEvent::Eof,
        Ok(ReadlineEvent::Interrupted) => InputEvent::Interrupted,
        Err(e) => {
            tracing::warn!(error = %e, "readline failed, ending session");
            InputEvent::Eof
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_is_kept_untrimmed() {
        let event = to_input_event(Ok(ReadlineEvent::Line("  hi ".to_string())));
        assert!(matches!(event, InputEvent::Message(line) if line == "  hi "));
    }

    #[test]
    fn read_error_ends_session() {
        let err = ReadlineError::from(std::io::Error::other("terminal gone"));
        assert!(matches!(to_input_event(Err(err)), InputEvent::Eof));
    }

    #[test]
    fn ctrl_c_is_interrupt() {
        assert!(matches!(
            to_input_event(Ok(ReadlineEvent::Interrupted)),
            InputEvent::Interrupted
        ));
    }
}
