//! Search Bar Component
//!
//! Free-text search with a loading spinner. Keystrokes go straight to the
//! coordinator, which debounces them.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::DashboardDataStoreFields;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <div class="search-bar relative">
            <input
                id="search-input"
                type="search"
                class="search-input w-full pl-10 pr-10 py-2 border border-gray-300 rounded-lg"
                placeholder="Buscar por proyecto, cliente o N°..."
                autocomplete="off"
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    ctx.with(|d| d.on_search_input(&raw));
                }
            />
            <span
                id="search-spinner"
                class=move || if store.loading().get() { "search-spinner" } else { "search-spinner hidden" }
            >
                <i class="fas fa-spinner fa-spin text-gray-400"></i>
            </span>
        </div>
    }
}
