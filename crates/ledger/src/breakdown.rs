//! Per-person breakdown: subtotal, tax, fees and total due.

use serde::{Deserialize, Serialize};

use billsplit_core::ValueObject;

use crate::charge::{Charge, Fee, Item};

/// Sales tax applied to the item subtotal. Fees are never taxed.
pub const TAX_RATE: f64 = 0.05;

/// Derived monetary figures for one person.
///
/// Values are unrounded; rounding is left to whatever displays them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Breakdown {
    pub subtotal_before_tax: f64,
    pub tax_amount: f64,
    pub subtotal_after_tax: f64,
    pub total_fees: f64,
    pub total_with_fees: f64,
}

impl ValueObject for Breakdown {}

/// Compute the breakdown for one person's items and fees.
pub fn compute_breakdown(items: &[Item], fees: &[Fee]) -> Breakdown {
    let subtotal_before_tax = total_cost(items);
    let tax_amount = subtotal_before_tax * TAX_RATE;
    let subtotal_after_tax = subtotal_before_tax + tax_amount;
    let total_fees = total_cost(fees);

    Breakdown {
        subtotal_before_tax,
        tax_amount,
        subtotal_after_tax,
        total_fees,
        total_with_fees: subtotal_after_tax + total_fees,
    }
}

fn total_cost<C: Charge>(charges: &[C]) -> f64 {
    // `Sum` for floats starts at -0.0, which would render as "-0.00".
    charges.iter().fold(0.0, |acc, c| acc + c.cost())
}
