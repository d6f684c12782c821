//! Totals Panel Component
//!
//! Read-only Subtotal / Tax / Total breakdown.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Cost breakdown display
#[component]
pub fn TotalsPanel() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="cost-breakdown">
            <p class="breakdown-line">
                {move || format!("Subtotal: ${:.2}", store.totals().get().subtotal)}
            </p>
            <p class="breakdown-line">
                {move || format!("Tax: ${:.2}", store.totals().get().tax)}
            </p>
            <p class="breakdown-total">
                {move || format!("Total: ${:.2}", store.totals().get().total)}
            </p>
        </div>
    }
}
