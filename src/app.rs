//! Bill Split App
//!
//! Single-page calculator: toolbar, editable grid, adjustments, breakdown.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddItemButton, AdjustmentsForm, BillGrid, GridToolbar, TotalsPanel};
use crate::store::{AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    // Explicitly owned application state; every mutation goes through the
    // store helpers, which end in a recompute.
    let store: AppStore = Store::new(AppState::new());
    provide_context(store);

    view! {
        <div class="calculator-container">
            <GridToolbar />
            <BillGrid />
            <AddItemButton />
            <AdjustmentsForm />
            <TotalsPanel />
        </div>
    }
}
