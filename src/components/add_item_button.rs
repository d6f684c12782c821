//! Add Item Button Component
//!
//! Appends a fresh row to the grid.

use leptos::prelude::*;

use crate::store::{store_add_item, use_app_store};

/// "Add Item" action below the grid
#[component]
pub fn AddItemButton() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="add-item-bar">
            <button class="neutral-btn" on:click=move |_| store_add_item(&store)>
                "Add Item"
            </button>
        </div>
    }
}
