//! Adjustments Form Component
//!
//! Tax percentage and tip inputs; both recompute on every keystroke.

use leptos::prelude::*;

use crate::bill;
use crate::store::{store_set_tax_percentage, store_set_tip, use_app_store};

/// Tax percent ("%" suffix) and tip ("$" prefix) fields
#[component]
pub fn AdjustmentsForm() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="adjustments">
            <label class="adjustment-field">
                <span class="adjustment-label">"Tax Percent"</span>
                <span class="adjustment-input">
                    <input
                        type="number"
                        min="0"
                        step=".1"
                        on:input=move |ev| {
                            store_set_tax_percentage(&store, bill::parse_amount(&event_target_value(&ev)));
                        }
                    />
                    <span class="adornment">"%"</span>
                </span>
            </label>
            <label class="adjustment-field">
                <span class="adjustment-label">"Tip"</span>
                <span class="adjustment-input">
                    <span class="adornment">"$"</span>
                    <input
                        type="number"
                        min="0"
                        step=".01"
                        on:input=move |ev| {
                            store_set_tip(&store, bill::parse_amount(&event_target_value(&ev)));
                        }
                    />
                </span>
            </label>
        </div>
    }
}
