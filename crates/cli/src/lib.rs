//! `billsplit-cli` — terminal front-end for the bill-splitting ledger.
//!
//! Reads one action per line, applies it to a [`billsplit_ledger::Ledger`] and
//! re-renders every person's breakdown after each successful change.

pub mod alert;
pub mod config;
pub mod input;
pub mod session;
pub mod view;

pub use config::{CliConfig, LogFormatArg, OutputFormat};
pub use input::{Action, ChargeKind, InputError, parse_line};
pub use session::{Outcome, Session, SessionError};
pub use view::{SummaryView, render_json, render_text, summary_view};
