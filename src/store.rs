//! Global Application State Store
//!
//! Uses Leptos reactive_stores. All mutation goes through the `AppState`
//! methods below, each of which ends in a recompute, so `totals` is always
//! consistent with the rows and adjustments on screen.

use leptos::prelude::*;
use reactive_stores::Store;
use rust_decimal::Decimal;

use crate::bill;
use crate::models::{LineItem, Totals};

/// Global application state: grid rows, adjustments, derived totals
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Grid rows in display order
    pub items: Vec<LineItem>,
    /// Ids of rows currently selected in the grid
    pub selected: Vec<u32>,
    /// Percentage units (8.25 means 8.25%)
    pub tax_percentage: Decimal,
    /// Absolute currency units
    pub tip: Decimal,
    /// Derived breakdown, never mutated directly
    pub totals: Totals,
    /// Session-local id source for new rows
    pub next_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fresh row, returning it for logging
    pub fn add_item(&mut self) -> LineItem {
        self.next_id += 1;
        let item = LineItem::new(self.next_id);
        self.items.push(item.clone());
        self.recompute();
        item
    }

    /// Remove every selected row, returning the removed rows in display order
    pub fn remove_selected(&mut self) -> Vec<LineItem> {
        let selected = std::mem::take(&mut self.selected);
        let mut removed = Vec::new();
        self.items.retain(|item| {
            if selected.contains(&item.id) {
                removed.push(item.clone());
                false
            } else {
                true
            }
        });
        self.recompute();
        removed
    }

    /// Drop all rows and the selection
    pub fn clear_items(&mut self) -> Vec<LineItem> {
        self.selected.clear();
        let removed = std::mem::take(&mut self.items);
        self.recompute();
        removed
    }

    pub fn set_quantity(&mut self, id: u32, quantity: Option<Decimal>) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = quantity;
        }
        self.recompute();
    }

    pub fn set_name(&mut self, id: u32, name: String) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.name = name;
        }
        self.recompute();
    }

    pub fn set_price(&mut self, id: u32, price: Option<Decimal>) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.price = price;
        }
        self.recompute();
    }

    pub fn set_tax_percentage(&mut self, tax_percentage: Decimal) {
        self.tax_percentage = tax_percentage;
        self.recompute();
    }

    pub fn set_tip(&mut self, tip: Decimal) {
        self.tip = tip;
        self.recompute();
    }

    /// Toggle a row in the selection; selection never affects totals
    pub fn toggle_selected(&mut self, id: u32) {
        if let Some(pos) = self.selected.iter().position(|&sel| sel == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id);
        }
    }

    /// Single recompute entry point; every mutation above funnels here
    fn recompute(&mut self) {
        self.totals = bill::recompute(&self.items, self.tax_percentage, self.tip);
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Log a grid transaction the way the dev console expects it
fn log_rows(action: &str, rows: &[LineItem]) {
    if let Ok(payload) = serde_json::to_string(rows) {
        web_sys::console::log_1(&format!("[GRID] {action} {payload}").into());
    }
}

/// Append a new row to the grid
pub fn store_add_item(store: &AppStore) {
    let added = store.write().add_item();
    log_rows("added", std::slice::from_ref(&added));
}

/// Remove the currently selected rows
pub fn store_remove_selected(store: &AppStore) {
    let removed = store.write().remove_selected();
    log_rows("removed", &removed);
}

/// Remove all rows
pub fn store_clear_items(store: &AppStore) {
    let removed = store.write().clear_items();
    log_rows("cleared", &removed);
}

/// Toggle a row's membership in the grid selection
pub fn store_toggle_selected(store: &AppStore, id: u32) {
    store.write().toggle_selected(id);
}

pub fn store_set_quantity(store: &AppStore, id: u32, quantity: Option<Decimal>) {
    store.write().set_quantity(id, quantity);
}

pub fn store_set_name(store: &AppStore, id: u32, name: String) {
    store.write().set_name(id, name);
}

pub fn store_set_price(store: &AppStore, id: u32, price: Option<Decimal>) {
    store.write().set_price(id, price);
}

pub fn store_set_tax_percentage(store: &AppStore, tax_percentage: Decimal) {
    store.write().set_tax_percentage(tax_percentage);
}

pub fn store_set_tip(store: &AppStore, tip: Decimal) {
    store.write().set_tip(tip);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_item_defaults() {
        let mut state = AppState::new();
        let added = state.add_item();
        assert_eq!(added.quantity, Some(Decimal::ONE));
        assert_eq!(added.name, "");
        assert_eq!(added.price, None);
        assert_eq!(state.items.len(), 1);
        // quantity without price contributes nothing
        assert_eq!(state.totals.subtotal, Decimal::ZERO);
    }

    #[test]
    fn test_cell_edits_recompute() {
        let mut state = AppState::new();
        let id = state.add_item().id;
        state.set_name(id, "Coffee".to_string());
        state.set_price(id, Some(dec("3.50")));
        state.set_quantity(id, Some(dec("2")));
        assert_eq!(state.totals.subtotal, dec("7.00"));

        state.set_tax_percentage(dec("10"));
        state.set_tip(dec("1"));
        assert_eq!(state.totals.tax, dec("0.70"));
        assert_eq!(state.totals.total, dec("8.70"));
    }

    #[test]
    fn test_remove_selected_drops_rows_and_selection() {
        let mut state = AppState::new();
        let first = state.add_item().id;
        let second = state.add_item().id;
        state.set_price(first, Some(dec("5")));
        state.set_price(second, Some(dec("9")));

        state.toggle_selected(first);
        let removed = state.remove_selected();

        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].id, first);
        assert!(state.selected.is_empty());
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.totals.subtotal, dec("9.00"));
    }

    #[test]
    fn test_toggle_selected_twice_deselects() {
        let mut state = AppState::new();
        let id = state.add_item().id;
        state.toggle_selected(id);
        assert_eq!(state.selected, vec![id]);
        state.toggle_selected(id);
        assert!(state.selected.is_empty());
    }

    #[test]
    fn test_clear_items_keeps_tip_in_total() {
        let mut state = AppState::new();
        let id = state.add_item().id;
        state.set_price(id, Some(dec("4.20")));
        state.set_tip(dec("2"));

        let removed = state.clear_items();

        assert_eq!(removed.len(), 1);
        assert!(state.items.is_empty());
        assert_eq!(state.totals.subtotal, Decimal::ZERO);
        assert_eq!(state.totals.tax, Decimal::ZERO);
        assert_eq!(state.totals.total, dec("2.00"));
    }

    #[test]
    fn test_edit_unknown_id_is_ignored() {
        let mut state = AppState::new();
        state.set_price(42, Some(dec("5")));
        assert!(state.items.is_empty());
        assert_eq!(state.totals.total, Decimal::ZERO);
    }

    #[test]
    fn test_row_ids_not_reused_after_removal() {
        let mut state = AppState::new();
        let first = state.add_item().id;
        state.toggle_selected(first);
        state.remove_selected();
        let second = state.add_item().id;
        assert_ne!(first, second);
    }
}
