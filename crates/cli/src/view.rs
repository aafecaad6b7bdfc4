//! Pure presentation: ledger state in, display structures out.
//!
//! Money is only rounded here, when formatted for display. The JSON form keeps
//! the unrounded amounts next to the formatted strings.

use std::fmt::Write as _;

use serde::Serialize;

use billsplit_core::AggregateRoot;
use billsplit_ledger::{Breakdown, Charge, Ledger, Person, TAX_RATE};

pub const PLACEHOLDER: &str = "Add a person to begin tracking items and fees.";

/// Everything needed to draw the summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    /// Ledger version the view was built from.
    pub version: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    pub people: Vec<PersonCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grand_total: Option<FigureRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonCard {
    pub name: String,
    pub items: Vec<ChargeLine>,
    pub fees: Vec<ChargeLine>,
    pub breakdown: Breakdown,
    pub figures: Vec<FigureRow>,
}

/// One item or fee, e.g. `Burger ($10.00)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChargeLine {
    pub name: String,
    pub cost: f64,
    pub display: String,
}

/// A labelled amount, e.g. `Tax (5%)` / `$0.75`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureRow {
    pub label: String,
    pub amount: f64,
    pub display: String,
}

impl FigureRow {
    fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
            display: format_money(amount),
        }
    }
}

/// `$` followed by the amount rounded to two decimals.
pub fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Label of the tax row, derived from the rate (`Tax (5%)`).
pub fn tax_label() -> String {
    format!("Tax ({:.0}%)", TAX_RATE * 100.0)
}

/// Build the summary for every person, in insertion order.
pub fn summary_view(ledger: &Ledger) -> SummaryView {
    let people: Vec<PersonCard> = ledger.people().map(person_card).collect();

    let (placeholder, grand_total) = if people.is_empty() {
        (Some(PLACEHOLDER), None)
    } else {
        let total = people
            .iter()
            .fold(0.0, |acc, card| acc + card.breakdown.total_with_fees);
        (None, Some(FigureRow::new("GRAND TOTAL", total)))
    };

    SummaryView {
        version: ledger.version(),
        placeholder,
        people,
        grand_total,
    }
}

fn person_card(person: &Person) -> PersonCard {
    let breakdown = person.breakdown();

    PersonCard {
        name: person.name().to_string(),
        items: person.items().iter().map(charge_line).collect(),
        fees: person.fees().iter().map(charge_line).collect(),
        breakdown,
        figures: vec![
            FigureRow::new("Subtotal (Before Tax)", breakdown.subtotal_before_tax),
            FigureRow::new(tax_label(), breakdown.tax_amount),
            FigureRow::new("Subtotal (After Tax)", breakdown.subtotal_after_tax),
            FigureRow::new("Custom Fees", breakdown.total_fees),
            FigureRow::new("TOTAL DUE", breakdown.total_with_fees),
        ],
    }
}

fn charge_line<C: Charge>(charge: &C) -> ChargeLine {
    ChargeLine {
        name: charge.name().to_string(),
        cost: charge.cost(),
        display: format!("{} ({})", charge.name(), format_money(charge.cost())),
    }
}

fn join_charges(lines: &[ChargeLine]) -> String {
    lines
        .iter()
        .map(|l| l.display.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Plain-text rendering, one card per person.
pub fn render_text(view: &SummaryView) -> String {
    let mut out = String::new();

    if let Some(placeholder) = view.placeholder {
        out.push_str(placeholder);
        out.push('\n');
        return out;
    }

    for card in &view.people {
        let _ = writeln!(out, "== {} ==", card.name);
        let _ = writeln!(out, "Items: {}", join_charges(&card.items));
        let _ = writeln!(out, "Fees: {}", join_charges(&card.fees));
        out.push_str("---\n");
        for row in &card.figures {
            let _ = writeln!(out, "{}: {}", row.label, row.display);
        }
        out.push('\n');
    }

    if let Some(total) = &view.grand_total {
        let _ = writeln!(out, "{}: {}", total.label, total.display);
    }

    out
}

pub fn render_json(view: &SummaryView) -> serde_json::Result<String> {
    serde_json::to_string_pretty(view)
}
