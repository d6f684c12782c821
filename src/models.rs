//! Frontend Models
//!
//! Data structures for the bill grid.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One editable row of the bill grid
///
/// An empty or unparseable numeric cell is `None` and contributes nothing
/// to the subtotal. The name is display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: u32,
    pub quantity: Option<Decimal>,
    pub name: String,
    pub price: Option<Decimal>,
}

impl LineItem {
    /// Fresh row as created by "Add Item": quantity 1, no name, no price
    pub fn new(id: u32) -> Self {
        Self {
            id,
            quantity: Some(Decimal::ONE),
            name: String::new(),
            price: None,
        }
    }
}

/// Derived cost breakdown, each figure rounded to the cent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}
