use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use billsplit_core::{Aggregate, AggregateRoot, DomainError, DomainResult, PersonName};

use crate::breakdown::Breakdown;
use crate::charge::{Fee, Item};
use crate::person::Person;

/// Aggregate root: Ledger.
///
/// Owns every person of one bill-splitting session together with their items
/// and fees. People are kept in insertion order for deterministic rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    people: Vec<Person>,
    index: HashMap<PersonName, usize>,
    version: u64,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_person(&mut self, name: &str) -> DomainResult<()> {
        self.dispatch(&LedgerCommand::AddPerson(AddPerson {
            name: name.to_string(),
        }))
    }

    pub fn add_item(&mut self, person: &str, name: &str, cost: f64) -> DomainResult<()> {
        self.dispatch(&LedgerCommand::AddItem(AddItem {
            person: person.to_string(),
            name: name.to_string(),
            cost,
        }))
    }

    pub fn add_fee(&mut self, person: &str, name: &str, cost: f64) -> DomainResult<()> {
        self.dispatch(&LedgerCommand::AddFee(AddFee {
            person: person.to_string(),
            name: name.to_string(),
            cost,
        }))
    }

    /// Execute a command, logging the outcome.
    ///
    /// Either every resulting event is applied or, on error, nothing changes.
    pub fn dispatch(&mut self, command: &LedgerCommand) -> DomainResult<()> {
        match self.execute(command) {
            Ok(events) => {
                for event in &events {
                    tracing::debug!(
                        event_type = event.event_type(),
                        person = %event.person(),
                        version = self.version,
                        "ledger event applied"
                    );
                }
                Ok(())
            }
            Err(err) => {
                tracing::debug!(error = %err, ?command, "ledger command rejected");
                Err(err)
            }
        }
    }

    /// Person names in insertion order.
    pub fn list_people(&self) -> Vec<&str> {
        self.people.iter().map(|p| p.name().as_str()).collect()
    }

    /// People in insertion order.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.iter()
    }

    /// Look up a person. Surrounding whitespace in `name` is ignored.
    pub fn person(&self, name: &str) -> Option<&Person> {
        self.index.get(name.trim()).map(|&i| &self.people[i])
    }

    pub fn items(&self, person: &str) -> DomainResult<&[Item]> {
        Ok(self.require_person(person)?.items())
    }

    pub fn fees(&self, person: &str) -> DomainResult<&[Fee]> {
        Ok(self.require_person(person)?.fees())
    }

    pub fn compute_breakdown(&self, person: &str) -> DomainResult<Breakdown> {
        Ok(self.require_person(person)?.breakdown())
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    fn require_person(&self, name: &str) -> DomainResult<&Person> {
        self.person(name)
            .ok_or_else(|| DomainError::unknown(format!("no person named \"{}\"", name.trim())))
    }
}

impl AggregateRoot for Ledger {
    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddPerson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddPerson {
    /// Raw name as typed; trimmed during validation.
    pub name: String,
}

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddItem {
    pub person: String,
    pub name: String,
    pub cost: f64,
}

/// Command: AddFee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddFee {
    pub person: String,
    pub name: String,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LedgerCommand {
    AddPerson(AddPerson),
    AddItem(AddItem),
    AddFee(AddFee),
}

/// Event: PersonAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonAdded {
    pub person: PersonName,
}

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub person: PersonName,
    pub item: Item,
}

/// Event: FeeAdded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeAdded {
    pub person: PersonName,
    pub fee: Fee,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LedgerEvent {
    PersonAdded(PersonAdded),
    ItemAdded(ItemAdded),
    FeeAdded(FeeAdded),
}

impl LedgerEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            LedgerEvent::PersonAdded(_) => "ledger.person.added",
            LedgerEvent::ItemAdded(_) => "ledger.item.added",
            LedgerEvent::FeeAdded(_) => "ledger.fee.added",
        }
    }

    pub fn person(&self) -> &PersonName {
        match self {
            LedgerEvent::PersonAdded(e) => &e.person,
            LedgerEvent::ItemAdded(e) => &e.person,
            LedgerEvent::FeeAdded(e) => &e.person,
        }
    }
}

impl Aggregate for Ledger {
    type Command = LedgerCommand;
    type Event = LedgerEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            LedgerEvent::PersonAdded(e) => {
                if !self.index.contains_key(&e.person) {
                    self.index.insert(e.person.clone(), self.people.len());
                    self.people.push(Person::new(e.person.clone()));
                }
            }
            LedgerEvent::ItemAdded(e) => {
                if let Some(&i) = self.index.get(&e.person) {
                    self.people[i].push_item(e.item.clone());
                }
            }
            LedgerEvent::FeeAdded(e) => {
                if let Some(&i) = self.index.get(&e.person) {
                    self.people[i].push_fee(e.fee.clone());
                }
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            LedgerCommand::AddPerson(cmd) => self.handle_add_person(cmd),
            LedgerCommand::AddItem(cmd) => self.handle_add_item(cmd),
            LedgerCommand::AddFee(cmd) => self.handle_add_fee(cmd),
        }
    }
}

impl Ledger {
    fn handle_add_person(&self, cmd: &AddPerson) -> Result<Vec<LedgerEvent>, DomainError> {
        let person = PersonName::parse(&cmd.name)?;
        if self.index.contains_key(&person) {
            return Err(DomainError::duplicate(format!(
                "person \"{person}\" is already added"
            )));
        }

        Ok(vec![LedgerEvent::PersonAdded(PersonAdded { person })])
    }

    fn handle_add_item(&self, cmd: &AddItem) -> Result<Vec<LedgerEvent>, DomainError> {
        let person = self.require_person(&cmd.person)?.name().clone();
        let item = Item::new(&cmd.name, cmd.cost)?;

        Ok(vec![LedgerEvent::ItemAdded(ItemAdded { person, item })])
    }

    fn handle_add_fee(&self, cmd: &AddFee) -> Result<Vec<LedgerEvent>, DomainError> {
        let person = self.require_person(&cmd.person)?.name().clone();
        let fee = Fee::new(&cmd.name, cmd.cost)?;

        Ok(vec![LedgerEvent::FeeAdded(FeeAdded { person, fee })])
    }
}
