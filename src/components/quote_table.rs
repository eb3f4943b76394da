//! Quote Table Component
//!
//! Search results, one row per quote, with an inline folder dropdown.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::DashboardDataStoreFields;
use crate::dom::quote_folder_selection;
use crate::models::FolderChoice;
use crate::render::{folder_choices, render_table, QuoteRow, TableView, UNFILED_LABEL};

const ACTION_LINK_CLASS: &str = "text-gray-400 hover:text-red-600 transition duration-150";

#[component]
pub fn QuoteTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let seeded = ctx.seeded_choices;

    let table = Memo::new(move |_| render_table(&store.quotes().get()));
    let choices = Memo::new(move |_| folder_choices(&store.folders().get(), &seeded.get_value()));

    // Single listener for every row dropdown
    let on_body_change = move |ev: web_sys::Event| {
        if let Some((quote_id, folder_id)) = quote_folder_selection(&ev) {
            ctx.with(|d| d.on_quote_folder_change(quote_id, folder_id));
        }
    };

    view! {
        <div class="overflow-x-auto">
            <table class="quotes-table min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="px-4 py-3 text-left">"N°"</th>
                        <th class="px-4 py-3 text-left">"Estado"</th>
                        <th class="px-4 py-3 text-left">"Proyecto / Cliente"</th>
                        <th class="px-4 py-3 text-left">"Carpeta"</th>
                        <th class="px-4 py-3 text-left">"Fecha"</th>
                        <th class="px-4 py-3 text-right">"Total"</th>
                        <th class="px-4 py-3 text-center">"Acciones"</th>
                    </tr>
                </thead>
                <tbody id="cotizaciones-tbody" class="bg-white divide-y divide-gray-200" on:change=on_body_change>
                    {move || match table.get() {
                        TableView::Empty { colspan, message } => view! {
                            <tr id="empty-state">
                                <td colspan=colspan.to_string() class="px-4 py-12 text-center">
                                    <div class="flex flex-col items-center text-gray-400">
                                        <i class="fas fa-inbox text-4xl mb-3"></i>
                                        <p class="font-medium">{message}</p>
                                    </div>
                                </td>
                            </tr>
                        }
                        .into_any(),
                        TableView::Rows(rows) => rows
                            .into_iter()
                            .map(|row| view! { <QuoteRowView row=row choices=choices /> })
                            .collect_view()
                            .into_any(),
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn QuoteRowView(row: QuoteRow, choices: Memo<Vec<FolderChoice>>) -> impl IntoView {
    let unfiled = row.folder_id.is_empty();
    let folder_id = row.folder_id.clone();

    view! {
        <tr class="hover:bg-gray-50 transition duration-150">
            <td class="px-4 py-3 text-sm font-medium text-gray-900">{row.id}</td>
            <td class="px-4 py-3">
                <span class=row.badge.class()>
                    <span class=row.badge.dot_class()></span>
                    {row.badge.label.clone()}
                </span>
            </td>
            <td class="px-4 py-3">
                <div class="text-sm font-semibold text-gray-900">{row.project.clone()}</div>
                <div class="text-xs text-gray-500">{row.client.clone()}</div>
            </td>
            <td class="px-4 py-3">
                <select
                    data-quote-id=row.id.to_string()
                    class="carpeta-dropdown text-xs border border-gray-300 rounded px-2 py-1"
                    aria-label=format!("Carpeta de la cotización {}", row.id)
                >
                    <option value="" selected=unfiled>{UNFILED_LABEL}</option>
                    {move || {
                        let folder_id = folder_id.clone();
                        choices
                            .get()
                            .into_iter()
                            .map(move |choice| {
                                let selected = choice.id == folder_id;
                                view! { <option value=choice.id selected=selected>{choice.nombre}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </td>
            <td class="px-4 py-3 text-sm text-gray-600">{row.date.clone()}</td>
            <td class="px-4 py-3 text-right">
                <span class="text-sm font-bold text-red-600">{row.total.clone()}</span>
            </td>
            <td class="px-4 py-3 text-center">
                <div class="flex items-center justify-center space-x-2">
                    <a href=row.detail_url.clone() class=ACTION_LINK_CLASS title="Ver detalles">
                        <i class="fas fa-eye text-sm"></i>
                    </a>
                    <a href=row.pdf_url.clone() class=ACTION_LINK_CLASS title="Descargar PDF" target="_blank">
                        <i class="fas fa-file-pdf text-sm"></i>
                    </a>
                    <a href=row.delete_url.clone() class=ACTION_LINK_CLASS title="Eliminar">
                        <i class="fas fa-trash text-sm"></i>
                    </a>
                </div>
            </td>
        </tr>
    }
}
