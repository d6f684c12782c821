//! UI Components
//!
//! Reusable Leptos components.

mod add_item_button;
mod adjustments_form;
mod bill_grid;
mod bill_row;
mod grid_toolbar;
mod totals_panel;

pub use add_item_button::AddItemButton;
pub use adjustments_form::AdjustmentsForm;
pub use bill_grid::BillGrid;
pub use bill_row::BillRow;
pub use grid_toolbar::GridToolbar;
pub use totals_panel::TotalsPanel;
