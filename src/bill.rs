//! Bill Aggregation
//!
//! Pure recomputation of the cost breakdown from the current grid rows,
//! plus the input-coercion helpers used by the editable cells.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{LineItem, Totals};

/// Round to the cent, midpoint up (9.995 -> 10.00)
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Coerce grid-cell text; empty or non-numeric means the cell is absent
pub fn parse_cell(raw: &str) -> Option<Decimal> {
    raw.trim().parse().ok()
}

/// Coerce adjustment-field text; empty or non-numeric means zero
pub fn parse_amount(raw: &str) -> Decimal {
    raw.trim().parse().unwrap_or(Decimal::ZERO)
}

/// Recompute subtotal/tax/total from the rows and the two adjustments.
///
/// A row missing quantity or price is skipped, not treated as zero-priced.
/// Tax and total are derived from the unrounded subtotal; each displayed
/// figure is rounded separately.
pub fn recompute(items: &[LineItem], tax_percentage: Decimal, tip: Decimal) -> Totals {
    let raw_subtotal: Decimal = items
        .iter()
        .filter_map(|item| match (item.quantity, item.price) {
            (Some(quantity), Some(price)) => Some(quantity * price),
            _ => None,
        })
        .sum();
    let raw_tax = raw_subtotal * tax_percentage / Decimal::ONE_HUNDRED;
    let raw_total = raw_subtotal + raw_tax + tip;

    Totals {
        subtotal: round_cents(raw_subtotal),
        tax: round_cents(raw_tax),
        total: round_cents(raw_total),
    }
}
