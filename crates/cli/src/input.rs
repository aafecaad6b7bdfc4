//! Line-oriented input: one user action per line.
//!
//! ```text
//! person <name>
//! item <person> | <name> | <cost>
//! fee <person> | <name> | <cost>
//! show
//! help
//! quit
//! ```

use thiserror::Error;

use billsplit_core::DomainError;
use billsplit_ledger::{AddFee, AddItem, AddPerson, LedgerCommand, parse_cost};

pub const HELP: &str = "\
Commands:
  person <name>                    add a person
  item <person> | <name> | <cost>  add a taxed item to a person
  fee <person> | <name> | <cost>   add an untaxed fee to a person
  show                             print the summary
  help                             print this list
  quit                             leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeKind {
    Item,
    Fee,
}

impl ChargeKind {
    fn usage(self) -> &'static str {
        match self {
            ChargeKind::Item => "item <person> | <name> | <cost>",
            ChargeKind::Fee => "fee <person> | <name> | <cost>",
        }
    }
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A mutation to run against the ledger.
    Command(LedgerCommand),
    Show,
    Help,
    Quit,
}

/// Splits the arguments of `item` and `fee` lines.
pub const SEPARATOR: char = '|';

/// Input that could not be turned into an action.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("usage: {usage}")]
    Usage { usage: &'static str },

    #[error("person names cannot contain '|'")]
    SeparatorInName,

    #[error("invalid {kind:?} cost: {source}")]
    InvalidCost {
        kind: ChargeKind,
        #[source]
        source: DomainError,
    },
}

/// Parse one line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Action>, InputError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (keyword, rest) = line
        .split_once(char::is_whitespace)
        .unwrap_or((line, ""));

    let action = match keyword.to_ascii_lowercase().as_str() {
        // A name containing the separator could never be addressed by `item` or `fee`.
        "person" if rest.contains(SEPARATOR) => return Err(InputError::SeparatorInName),
        "person" => Action::Command(LedgerCommand::AddPerson(AddPerson {
            name: rest.to_string(),
        })),
        "item" => {
            let (person, name, cost) = charge_args(ChargeKind::Item, rest)?;
            Action::Command(LedgerCommand::AddItem(AddItem { person, name, cost }))
        }
        "fee" => {
            let (person, name, cost) = charge_args(ChargeKind::Fee, rest)?;
            Action::Command(LedgerCommand::AddFee(AddFee { person, name, cost }))
        }
        "show" => Action::Show,
        "help" | "?" => Action::Help,
        "quit" | "exit" => Action::Quit,
        _ => return Err(InputError::UnknownCommand(keyword.to_string())),
    };

    Ok(Some(action))
}

fn charge_args(kind: ChargeKind, rest: &str) -> Result<(String, String, f64), InputError> {
    let parts: Vec<&str> = rest.split(SEPARATOR).map(str::trim).collect();
    let [person, name, cost] = parts.as_slice() else {
        return Err(InputError::Usage {
            usage: kind.usage(),
        });
    };

    let cost = parse_cost(cost).map_err(|source| InputError::InvalidCost { kind, source })?;
    Ok((person.to_string(), name.to_string(), cost))
}
