//! Cotizaciones Dashboard App
//!
//! Wires the gateway, coordinator and store, then lays out the dashboard:
//! folder sidebar on the left, search and results on the right.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;
use wasm_debounce::GlooTimer;

use crate::commands::{ApiClient, DocumentCsrf, FetchTransport};
use crate::components::{FolderSidebar, NewFolderModal, QuoteTable, SearchBar, Toast};
use crate::config::DashboardConfig;
use crate::context::AppContext;
use crate::dashboard::{Dashboard, LeptosExecutor};
use crate::store::{DashboardData, DashboardDataStoreFields, StoreView};

#[component]
pub fn App() -> impl IntoView {
    let config = Rc::new(DashboardConfig::from_document());
    let seeded_choices = config.folder_choices.clone();

    let store = Store::new(DashboardData::default());
    let sink = Rc::new(StoreView::new(store, config.toast_ms));

    let api = ApiClient::new(config, Rc::new(FetchTransport), Rc::new(DocumentCsrf), sink.clone());
    let dashboard = Dashboard::new(api, sink, Rc::new(LeptosExecutor), GlooTimer);

    let ctx = AppContext::new(dashboard, store, seeded_choices);
    provide_context(ctx);

    ctx.with(|d| d.init());

    view! {
        <div class="dashboard-layout flex gap-6">
            <FolderSidebar />

            <main class="dashboard-main flex-1">
                <div class="flex items-center justify-between mb-4">
                    <SearchBar />
                    <span id="cotizaciones-count" class="text-sm text-gray-500">
                        {move || format!("{} cotizaciones", store.quote_count().get())}
                    </span>
                </div>
                <QuoteTable />
            </main>

            <NewFolderModal />
            <Toast />
        </div>
    }
}
