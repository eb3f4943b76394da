//! Toast Component
//!
//! Transient notice in the corner. Dismissed on click or after the
//! configured delay (see [`StoreView`](crate::store::StoreView)).

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::DashboardDataStoreFields;
use crate::models::NoticeKind;

fn toast_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "toast fixed bottom-4 right-4 px-4 py-3 rounded-lg shadow-lg text-white bg-green-600 z-50",
        NoticeKind::Error => "toast fixed bottom-4 right-4 px-4 py-3 rounded-lg shadow-lg text-white bg-red-600 z-50",
        NoticeKind::Info => "toast fixed bottom-4 right-4 px-4 py-3 rounded-lg shadow-lg text-white bg-blue-600 z-50",
    }
}

#[component]
pub fn Toast() -> impl IntoView {
    let store = use_app_context().store;

    move || {
        store.toast().with(|slot| slot.current().cloned()).map(|notice| {
            view! {
                <div class=toast_class(notice.kind) role="status" on:click=move |_| store.toast().write().clear()>
                    {notice.message}
                </div>
            }
        })
    }
}
