//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The coordinator
//! writes here through [`StoreView`]; components only read.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::Feedback;
use crate::dashboard::DashboardView;
use crate::modal::ModalState;
use crate::models::{FolderFilter, FolderListResult, Notice, NoticeKind, QuoteRecord, SearchResult};

/// Rendered data with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardData {
    /// Rows of the latest search, in server order
    pub quotes: Vec<QuoteRecord>,
    pub quote_count: u64,
    /// Latest folder listing with counts
    pub folders: FolderListResult,
    /// Sidebar highlight
    pub active_folder: FolderFilter,
    /// Search spinner
    pub loading: bool,
    /// Toast currently shown
    pub toast: ToastSlot,
    pub modal: ModalState,
}

/// Notice on screen, tagged so a stale dismiss timer cannot clear a newer one
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastSlot {
    seq: u64,
    current: Option<Notice>,
}

impl ToastSlot {
    /// Show `notice`, returning the tag its dismiss timer must present
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.seq += 1;
        self.current = Some(notice);
        self.seq
    }

    /// Timer expiry; ignored if another notice was shown since
    pub fn dismiss(&mut self, seq: u64) {
        if seq == self.seq {
            self.current = None;
        }
    }

    /// Click on the toast
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardData>;

/// [`DashboardView`] that writes into the store
#[derive(Clone, Copy)]
pub struct StoreView {
    store: DashboardStore,
    toast_ms: u32,
}

impl StoreView {
    pub fn new(store: DashboardStore, toast_ms: u32) -> Self {
        Self { store, toast_ms }
    }
}

impl Feedback for StoreView {
    fn set_loading(&self, loading: bool) {
        self.store.loading().set(loading);
    }

    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Error => tracing::error!("[ERROR] {}", notice.message),
            NoticeKind::Success => tracing::info!("[SUCCESS] {}", notice.message),
            NoticeKind::Info => tracing::info!("[INFO] {}", notice.message),
        }

        let seq = self.store.toast().write().show(notice);

        let store = self.store;
        Timeout::new(self.toast_ms, move || {
            store.toast().write().dismiss(seq);
        })
        .forget();
    }
}

impl DashboardView for StoreView {
    fn show_quotes(&self, result: SearchResult) {
        self.store.quote_count().set(result.count);
        self.store.quotes().set(result.cotizaciones);
    }

    fn show_folders(&self, list: FolderListResult) {
        self.store.folders().set(list);
    }

    fn set_active_folder(&self, folder: FolderFilter) {
        self.store.active_folder().set(folder);
    }

    fn show_modal(&self, modal: ModalState) {
        self.store.modal().set(modal);
    }
}
