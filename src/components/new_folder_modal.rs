//! New Folder Modal Component
//!
//! Name entry for a new folder. Open/submitting/error transitions live in
//! the coordinator; this only renders the published [`ModalState`].
//! The input has no `maxlength`: the name limit is enforced in characters
//! by the gateway.
//!
//! [`ModalState`]: crate::modal::ModalState

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::DashboardDataStoreFields;

#[component]
pub fn NewFolderModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let is_open = move || store.modal().with(|m| m.is_open());
    let submitting = move || store.modal().with(|m| m.is_submitting());

    // Focus the name input whenever the modal opens
    Effect::new(move |_| {
        if is_open() && !submitting() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let close = move || ctx.with(|d| d.close_modal());
    let submit = move || ctx.with(|d| d.submit_modal());

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            submit();
        }
        "Escape" => close(),
        _ => {}
    };

    // Only clicks on the overlay itself, not bubbling from the panel
    let on_backdrop_click = move |ev: web_sys::MouseEvent| {
        if ev.target() == ev.current_target() {
            close();
        }
    };

    view! {
        <Show when=is_open>
            <div
                id="nueva-carpeta-modal"
                class="modal-backdrop fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50"
                on:click=on_backdrop_click
            >
                <div class="modal-panel bg-white rounded-lg shadow-xl w-full max-w-md p-6">
                    <div class="flex items-center justify-between mb-4">
                        <h3 class="text-lg font-semibold text-gray-900">"Nueva Carpeta"</h3>
                        <button id="modal-close-btn" class="text-gray-400 hover:text-gray-600" on:click=move |_| close()>
                            "×"
                        </button>
                    </div>

                    <input
                        id="carpeta-nombre-input"
                        node_ref=input_ref
                        type="text"
                        class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                        placeholder="Nombre de la carpeta"
                        prop:value=move || store.modal().with(|m| m.input().to_string())
                        prop:disabled=submitting
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            ctx.with(|d| d.edit_modal(&text));
                        }
                        on:keydown=on_keydown
                    />

                    {move || {
                        store.modal().with(|m| m.error().map(str::to_string)).map(|message| {
                            view! {
                                <div id="modal-error-message" class="mt-3 p-3 bg-red-50 border border-red-200 text-red-700 rounded-lg text-sm">
                                    <i class="fas fa-exclamation-circle mr-2"></i>
                                    <span id="modal-error-text">{message}</span>
                                </div>
                            }
                        })
                    }}

                    <div class="flex justify-end space-x-3 mt-6">
                        <button id="modal-cancel-btn" class="px-4 py-2 text-gray-700 bg-gray-100 rounded-lg" on:click=move |_| close()>
                            "Cancelar"
                        </button>
                        <button
                            id="modal-confirm-btn"
                            class="px-4 py-2 text-white bg-red-600 rounded-lg disabled:opacity-50"
                            disabled=submitting
                            on:click=move |_| submit()
                        >
                            {move || if submitting() { "Creando..." } else { "Crear Carpeta" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
