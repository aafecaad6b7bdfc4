use billsplit_core::{Entity, PersonName};

use crate::breakdown::{Breakdown, compute_breakdown};
use crate::charge::{Fee, Item};

/// One participant in the split, with their charges in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    name: PersonName,
    items: Vec<Item>,
    fees: Vec<Fee>,
}

impl Person {
    pub(crate) fn new(name: PersonName) -> Self {
        Self {
            name,
            items: Vec::new(),
            fees: Vec::new(),
        }
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn fees(&self) -> &[Fee] {
        &self.fees
    }

    /// Recomputed on every call.
    pub fn breakdown(&self) -> Breakdown {
        compute_breakdown(&self.items, &self.fees)
    }

    pub(crate) fn push_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub(crate) fn push_fee(&mut self, fee: Fee) {
        self.fees.push(fee);
    }
}

impl Entity for Person {
    type Id = PersonName;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_the_name_and_charges_keep_order() {
        let mut person = Person::new(PersonName::parse("Sam").unwrap());
        person.push_item(Item::new("Burger", 10.0).unwrap());
        person.push_item(Item::new("Fries", 5.0).unwrap());
        person.push_fee(Fee::new("Delivery", 3.0).unwrap());

        assert_eq!(person.id().as_str(), "Sam");
        let names: Vec<&str> = person.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Burger", "Fries"]);
        assert_eq!(person.breakdown().total_fees, 3.0);
    }
}
