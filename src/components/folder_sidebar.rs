//! Folder Sidebar Component
//!
//! Folder filter list with per-folder counts. Entries are rebuilt on every
//! refresh while the list keeps one click listener.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::DashboardDataStoreFields;
use crate::dom::{closest_data, FOLDER_KEY_ATTR};
use crate::render::{mark_active, render_folders};

fn entry_class(active: bool) -> &'static str {
    if active {
        "folder-item active w-full flex items-center justify-between px-3 py-2 rounded-lg bg-red-50 text-red-700 font-medium"
    } else {
        "folder-item w-full flex items-center justify-between px-3 py-2 rounded-lg text-gray-700 hover:bg-gray-50"
    }
}

fn count_class(active: bool) -> &'static str {
    if active {
        "folder-count text-xs bg-red-100 text-red-700 px-2 py-0.5 rounded-full"
    } else {
        "folder-count text-xs bg-gray-100 text-gray-600 px-2 py-0.5 rounded-full"
    }
}

#[component]
pub fn FolderSidebar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let entries = Memo::new(move |_| {
        let mut entries = render_folders(&store.folders().get());
        mark_active(&mut entries, &store.active_folder().get());
        entries
    });

    let on_list_click = move |ev: web_sys::MouseEvent| {
        if let Some(key) = closest_data(&ev, FOLDER_KEY_ATTR) {
            tracing::debug!("[FolderSidebar] Clicked: {:?}", key);
            ctx.with(|d| d.on_folder_click(&key));
        }
    };

    view! {
        <aside class="folder-sidebar">
            <div class="sidebar-header">
                <h3>"Carpetas"</h3>
                <button
                    id="nueva-carpeta-btn"
                    class="add-folder-btn"
                    title="Nueva carpeta"
                    on:click=move |_| ctx.with(|d| d.open_modal())
                >
                    "+"
                </button>
            </div>

            <ul id="carpetas-list" class="folder-list space-y-1" on:click=on_list_click>
                {move || {
                    entries
                        .get()
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <li>
                                    <button type="button" data-folder-key=entry.key class=entry_class(entry.active)>
                                        <span class="flex items-center">
                                            <i class=format!("{} mr-2", entry.icon.class())></i>
                                            <span class="folder-name">{entry.label}</span>
                                        </span>
                                        <span class=count_class(entry.active)>{entry.count}</span>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </aside>
    }
}
