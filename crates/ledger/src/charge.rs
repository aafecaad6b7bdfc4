//! Items and fees: the two kinds of charge a person can carry.

use serde::{Deserialize, Serialize};

use billsplit_core::{DomainError, DomainResult, ValueObject};

/// Anything that contributes a named cost to a person's bill.
pub trait Charge {
    fn name(&self) -> &str;
    fn cost(&self) -> f64;
}

/// A taxed purchase line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Strictly positive.
    pub cost: f64,
}

impl Item {
    /// Validate and build an item. The name is trimmed.
    pub fn new(name: &str, cost: f64) -> DomainResult<Self> {
        let name = charge_name(name, "item")?;
        if !cost.is_finite() || cost <= 0.0 {
            return Err(DomainError::invalid_input(
                "item cost must be a finite number greater than zero",
            ));
        }
        Ok(Self { name, cost })
    }
}

/// An untaxed flat charge (delivery, service, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fee {
    pub name: String,
    /// Zero is allowed so a waived fee can still be listed.
    pub cost: f64,
}

impl Fee {
    /// Validate and build a fee. The name is trimmed.
    pub fn new(name: &str, cost: f64) -> DomainResult<Self> {
        let name = charge_name(name, "fee")?;
        if !cost.is_finite() || cost < 0.0 {
            return Err(DomainError::invalid_input(
                "fee cost must be a finite number of zero or more",
            ));
        }
        // "-0" passes the range check; store it as plain zero.
        Ok(Self {
            name,
            cost: cost + 0.0,
        })
    }
}

impl Charge for Item {
    fn name(&self) -> &str {
        &self.name
    }

    fn cost(&self) -> f64 {
        self.cost
    }
}

impl Charge for Fee {
    fn name(&self) -> &str {
        &self.name
    }

    fn cost(&self) -> f64 {
        self.cost
    }
}

impl ValueObject for Item {}
impl ValueObject for Fee {}

fn charge_name(raw: &str, kind: &str) -> DomainResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid_input(format!(
            "{kind} name must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

/// Parse a raw cost field as typed by a user.
///
/// Only checks that the text is a finite decimal number; whether the value is
/// in range depends on the kind of charge and is checked by [`Item::new`] and
/// [`Fee::new`].
pub fn parse_cost(raw: &str) -> DomainResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid_input("cost is required"));
    }
    let cost: f64 = trimmed
        .parse()
        .map_err(|_| DomainError::invalid_input(format!("cost {trimmed:?} is not a number")))?;
    if !cost.is_finite() {
        return Err(DomainError::invalid_input(format!(
            "cost {trimmed:?} is not a finite number"
        )));
    }
    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_requires_positive_cost() {
        assert!(Item::new("Pizza", 0.0).unwrap_err().is_invalid_input());
        assert!(Item::new("Pizza", -1.0).unwrap_err().is_invalid_input());
        assert!(Item::new("Pizza", f64::NAN).unwrap_err().is_invalid_input());
        assert_eq!(Item::new("Pizza", 12.5).unwrap().cost, 12.5);
    }

    #[test]
    fn fee_accepts_zero_but_not_negative() {
        assert_eq!(Fee::new("Service", 0.0).unwrap().cost, 0.0);
        assert!(Fee::new("Service", -0.01).unwrap_err().is_invalid_input());
        assert!(Fee::new("Service", f64::INFINITY).unwrap_err().is_invalid_input());
    }

    #[test]
    fn negative_zero_fee_is_stored_as_zero() {
        let fee = Fee::new("Waived", parse_cost("-0").unwrap()).unwrap();
        assert_eq!(fee.cost, 0.0);
        assert!(fee.cost.is_sign_positive());
    }

    #[test]
    fn names_are_trimmed_and_required() {
        assert_eq!(Item::new("  Burger ", 1.0).unwrap().name, "Burger");
        assert!(Item::new("   ", 1.0).unwrap_err().is_invalid_input());
        assert!(Fee::new("", 1.0).unwrap_err().is_invalid_input());
    }

    #[test]
    fn parse_cost_accepts_decimal_text() {
        assert_eq!(parse_cost("10").unwrap(), 10.0);
        assert_eq!(parse_cost(" 3.25 ").unwrap(), 3.25);
        assert_eq!(parse_cost("0").unwrap(), 0.0);
        assert_eq!(parse_cost("-2").unwrap(), -2.0);
    }

    #[test]
    fn parse_cost_rejects_garbage() {
        for raw in ["", "  ", "abc", "12abc", "NaN", "inf", "-infinity", "1,50"] {
            let err = parse_cost(raw).unwrap_err();
            assert!(err.is_invalid_input(), "{raw:?} should be rejected");
        }
    }
}
