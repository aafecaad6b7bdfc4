//! User-facing messages for rejected input.

use billsplit_core::DomainError;
use billsplit_ledger::{AddFee, AddItem, LedgerCommand};

use crate::input::{ChargeKind, InputError};

pub const ITEM_ALERT: &str = "Please enter a name and a valid cost greater than zero.";
pub const FEE_ALERT: &str = "Please enter a name and a valid cost.";
pub const PERSON_ALERT: &str = "Please enter a person name.";
pub const SEPARATOR_ALERT: &str = "Person names cannot contain \"|\".";

fn charge_alert(kind: ChargeKind) -> &'static str {
    match kind {
        ChargeKind::Item => ITEM_ALERT,
        ChargeKind::Fee => FEE_ALERT,
    }
}

/// Message for a command the ledger refused.
pub fn for_rejected_command(command: &LedgerCommand, err: &DomainError) -> String {
    match (command, err) {
        (LedgerCommand::AddPerson(cmd), DomainError::DuplicateEntity(_)) => {
            format!("Person \"{}\" is already added!", cmd.name.trim())
        }
        (LedgerCommand::AddPerson(_), DomainError::InvalidInput(_)) => PERSON_ALERT.to_string(),
        (LedgerCommand::AddItem(_), DomainError::InvalidInput(_)) => {
            charge_alert(ChargeKind::Item).to_string()
        }
        (LedgerCommand::AddFee(_), DomainError::InvalidInput(_)) => {
            charge_alert(ChargeKind::Fee).to_string()
        }
        (LedgerCommand::AddItem(AddItem { person, .. }), DomainError::UnknownEntity(_))
        | (LedgerCommand::AddFee(AddFee { person, .. }), DomainError::UnknownEntity(_)) => {
            format!("Person \"{}\" has not been added yet.", person.trim())
        }
        (_, other) => capitalize(&other.to_string()),
    }
}

/// Message for a line that did not parse.
pub fn for_input_error(err: &InputError) -> String {
    match err {
        InputError::UnknownCommand(keyword) => {
            format!("Unknown command \"{keyword}\". Type `help` for the list of commands.")
        }
        InputError::Usage { usage } => format!("Usage: {usage}"),
        InputError::SeparatorInName => SEPARATOR_ALERT.to_string(),
        InputError::InvalidCost { kind, .. } => charge_alert(*kind).to_string(),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
