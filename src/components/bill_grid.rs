//! Bill Grid Component
//!
//! Editable three-column grid of line items with row selection.

use leptos::prelude::*;

use crate::components::BillRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// The editable line-item grid
#[component]
pub fn BillGrid() -> impl IntoView {
    let store = use_app_store();

    view! {
        <table class="bill-grid">
            <thead>
                <tr>
                    <th class="select-col"></th>
                    <th class="quantity-col">"Quantity"</th>
                    <th class="name-col">"Name"</th>
                    <th class="price-col">"Price"</th>
                </tr>
            </thead>
            <tbody>
                // Keyed by row id only: cells commit on change, so a row's
                // own edits never need to re-render it.
                <For
                    each=move || store.items().get()
                    key=|item| item.id
                    children=move |item| view! { <BillRow item=item /> }
                />
            </tbody>
        </table>
    }
}
