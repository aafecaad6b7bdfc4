//! Bill-splitting ledger module.
//!
//! This crate contains the business rules for people, their items and fees,
//! and the per-person tax breakdown, implemented purely as deterministic domain
//! logic (no IO, no rendering).

pub mod breakdown;
pub mod charge;
pub mod ledger;
pub mod person;

pub use breakdown::{Breakdown, TAX_RATE, compute_breakdown};
pub use charge::{Charge, Fee, Item, parse_cost};
pub use ledger::{
    AddFee, AddItem, AddPerson, FeeAdded, ItemAdded, Ledger, LedgerCommand, LedgerEvent,
    PersonAdded,
};
pub use person::Person;
