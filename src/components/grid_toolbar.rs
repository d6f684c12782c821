//! Grid Toolbar Component
//!
//! "Remove Selected" and "Clear Data" actions above the grid.

use leptos::prelude::*;

use crate::store::{store_clear_items, store_remove_selected, use_app_store};

/// Destructive grid actions
#[component]
pub fn GridToolbar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="grid-toolbar">
            <button class="danger-btn" on:click=move |_| store_remove_selected(&store)>
                "Remove Selected"
            </button>
            <button class="danger-btn" on:click=move |_| store_clear_items(&store)>
                "Clear Data"
            </button>
        </div>
    }
}
