//! Bill Row Component
//!
//! One editable grid row: selection checkbox plus quantity/name/price
//! cells. Cell edits commit on change, then the store recomputes.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::bill;
use crate::models::LineItem;
use crate::store::{
    store_set_name, store_set_price, store_set_quantity, store_toggle_selected, use_app_store,
    AppStateStoreFields,
};

/// One row of the bill grid
#[component]
pub fn BillRow(item: LineItem) -> impl IntoView {
    let store = use_app_store();
    let id = item.id;

    let is_selected = move || store.selected().get().contains(&id);
    let row_class = move || {
        if is_selected() {
            "bill-row selected"
        } else {
            "bill-row"
        }
    };

    view! {
        <tr class=row_class>
            <td class="select-col">
                <input
                    type="checkbox"
                    prop:checked=is_selected
                    on:change=move |_| store_toggle_selected(&store, id)
                />
            </td>
            <td class="quantity-col">
                <input
                    type="number"
                    class="cell-input"
                    value=item.quantity.map(|q| q.to_string()).unwrap_or_default()
                    on:change=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        store_set_quantity(&store, id, bill::parse_cell(&input.value()));
                    }
                />
            </td>
            <td class="name-col">
                <input
                    type="text"
                    class="cell-input"
                    value=item.name.clone()
                    on:change=move |ev| store_set_name(&store, id, event_target_value(&ev))
                />
            </td>
            <td class="price-col">
                <input
                    type="number"
                    class="cell-input"
                    step=".01"
                    value=item.price.map(|p| p.to_string()).unwrap_or_default()
                    on:change=move |ev| {
                        store_set_price(&store, id, bill::parse_cell(&event_target_value(&ev)));
                    }
                />
            </td>
        </tr>
    }
}
