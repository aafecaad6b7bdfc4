//! One interactive bill-splitting session: input line in, screen update out.

use thiserror::Error;

use billsplit_ledger::{Ledger, LedgerCommand};

use crate::alert;
use crate::config::OutputFormat;
use crate::input::{self, Action};
use crate::view;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to render summary as JSON: {0}")]
    Render(#[from] serde_json::Error),
}

/// What the front-end should show after a line was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A freshly rendered summary.
    Render(String),
    /// The line was rejected; the ledger is unchanged.
    Alert(String),
    /// Informational text (help).
    Message(String),
    /// Nothing to show (blank line, or a change while rendering is deferred).
    Nothing,
    Quit,
}

/// Owns the ledger for the lifetime of one run of the front-end.
#[derive(Debug)]
pub struct Session {
    ledger: Ledger,
    format: OutputFormat,
    /// Render only on `show` and on `finish`.
    quiet: bool,
}

impl Session {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self {
            ledger: Ledger::new(),
            format,
            quiet,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Handle one input line.
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome, SessionError> {
        let action = match input::parse_line(line) {
            Ok(Some(action)) => action,
            Ok(None) => return Ok(Outcome::Nothing),
            Err(err) => {
                tracing::warn!(error = %err, line, "input rejected");
                return Ok(Outcome::Alert(alert::for_input_error(&err)));
            }
        };

        match action {
            Action::Command(command) => self.run(command),
            Action::Show => self.render().map(Outcome::Render),
            Action::Help => Ok(Outcome::Message(input::HELP.to_string())),
            Action::Quit => Ok(Outcome::Quit),
        }
    }

    /// Rendering owed at end of input (only in quiet mode).
    pub fn finish(&self) -> Result<Option<String>, SessionError> {
        if self.quiet {
            self.render().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Render the current summary in the configured format.
    pub fn render(&self) -> Result<String, SessionError> {
        let summary = view::summary_view(&self.ledger);
        match self.format {
            OutputFormat::Text => Ok(view::render_text(&summary)),
            OutputFormat::Json => Ok(view::render_json(&summary)?),
        }
    }

    fn run(&mut self, command: LedgerCommand) -> Result<Outcome, SessionError> {
        if let Err(err) = self.ledger.dispatch(&command) {
            tracing::warn!(error = %err, "command rejected");
            return Ok(Outcome::Alert(alert::for_rejected_command(&command, &err)));
        }

        if self.quiet {
            return Ok(Outcome::Nothing);
        }
        self.render().map(Outcome::Render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billsplit_core::AggregateRoot;

    #[test]
    fn successful_change_re_renders() {
        let mut session = Session::new(OutputFormat::Text, false);
        match session.handle_line("person Sam").unwrap() {
            Outcome::Render(text) => assert!(text.starts_with("== Sam ==")),
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn rejected_change_alerts_and_keeps_state() {
        let mut session = Session::new(OutputFormat::Text, false);
        session.handle_line("person Sam").unwrap();

        let outcome = session.handle_line("person Sam").unwrap();
        assert_eq!(
            outcome,
            Outcome::Alert("Person \"Sam\" is already added!".to_string())
        );
        assert_eq!(session.ledger().len(), 1);
        assert_eq!(session.ledger().version(), 1);
    }

    #[test]
    fn quiet_mode_defers_rendering() {
        let mut session = Session::new(OutputFormat::Text, true);
        assert_eq!(session.handle_line("person Sam").unwrap(), Outcome::Nothing);
        assert!(matches!(session.handle_line("show").unwrap(), Outcome::Render(_)));
        assert!(session.finish().unwrap().unwrap().contains("TOTAL DUE: $0.00"));
    }

    #[test]
    fn loud_mode_has_nothing_left_to_finish() {
        let session = Session::new(OutputFormat::Text, false);
        assert_eq!(session.finish().unwrap(), None);
    }

    #[test]
    fn help_and_quit() {
        let mut session = Session::new(OutputFormat::Json, false);
        assert_eq!(
            session.handle_line("help").unwrap(),
            Outcome::Message(input::HELP.to_string())
        );
        assert_eq!(session.handle_line("quit").unwrap(), Outcome::Quit);
        assert_eq!(session.handle_line("  ").unwrap(), Outcome::Nothing);
    }
}
