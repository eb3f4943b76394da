//! Dashboard Coordinator
//!
//! Turns user intents (typing, folder clicks, dropdown changes, modal actions)
//! into gateway calls and pushes results to a [`DashboardView`].
//!
//! Owns the view state and the modal state. Text input is debounced; folder
//! clicks are not. Every search is tagged with a sequence number and only the
//! latest one is rendered.


use std::cell::RefCell;
use std::rc::{Rc, Weak};

use futures::future::{FutureExt, LocalBoxFuture};
use wasm_debounce::{Debounced, Timer};

use crate::commands::{ApiClient, Feedback};
use crate::modal::ModalState;
use crate::models::{FolderFilter, FolderListResult, Notice, SearchResult};
use crate::state::ViewState;

/// Where results end up (store-backed in the app, recorded in tests)
pub trait DashboardView: Feedback {
    fn show_quotes(&self, result: SearchResult);
    fn show_folders(&self, list: FolderListResult);
    fn set_active_folder(&self, folder: FolderFilter);
    fn show_modal(&self, modal: ModalState);
}

/// Runs detached futures on the page's event loop
pub trait Executor {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LeptosExecutor;

impl Executor for LeptosExecutor {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        leptos::task::spawn_local(task);
    }
}

/// What to reload after a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshScope {
    /// Folder list and counts
    Folders,
    /// Re-run the current search
    Quotes,
    /// Both of the above
    All,
}

struct Inner<T: Timer> {
    api: ApiClient,
    view: Rc<dyn DashboardView>,
    executor: Rc<dyn Executor>,
    state: RefCell<ViewState>,
    modal: RefCell<ModalState>,
    search_input: Debounced<String, T>,
}

pub struct Dashboard<T: Timer + 'static> {
    inner: Rc<Inner<T>>,
}

impl<T: Timer + 'static> Clone for Dashboard<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Timer + 'static> Dashboard<T> {
    pub fn new(api: ApiClient, view: Rc<dyn DashboardView>, executor: Rc<dyn Executor>, timer: T) -> Self {
        let delay_ms = api.config().debounce_ms;
        let inner = Rc::new_cyclic(|weak: &Weak<Inner<T>>| {
            let weak = weak.clone();
            let search_input = Debounced::new(timer, delay_ms, move |raw: String| {
                if let Some(inner) = weak.upgrade() {
                    Dashboard { inner }.apply_search(&raw);
                }
            });

            Inner {
                api,
                view,
                executor,
                state: RefCell::new(ViewState::new()),
                modal: RefCell::new(ModalState::Closed),
                search_input,
            }
        });

        Self { inner }
    }

    /// Initial load: folder counts and the unfiltered quote list
    pub fn init(&self) {
        tracing::info!("Inicializando Dashboard de Cotizaciones...");
        self.refresh(RefreshScope::All);
    }

    pub fn view_state(&self) -> ViewState {
        self.inner.state.borrow().clone()
    }

    // ========================
    // Search & Filter
    // ========================

    /// Raw text from the search box; debounced
    pub fn on_search_input(&self, raw: &str) {
        self.inner.search_input.call(raw.to_string());
    }

    fn apply_search(&self, raw: &str) {
        self.inner.state.borrow_mut().set_search(raw);
        self.run_search();
    }

    /// Click on a sidebar entry; `key` is its `data-folder-key`
    pub fn on_folder_click(&self, key: &str) {
        let folder = FolderFilter::from_key(key);
        self.inner.state.borrow_mut().set_folder(folder.clone());
        // Highlight before the response arrives
        self.inner.view.set_active_folder(folder);
        self.run_search();
    }

    fn run_search(&self) {
        let ticket = self.inner.state.borrow_mut().begin_search();
        let this = self.clone();
        self.spawn(async move {
            let result = this.inner.api.search(&ticket.query, &ticket.folder).await;
            let is_latest = this.inner.state.borrow().is_latest(ticket.seq);
            if is_latest {
                this.inner.view.show_quotes(result);
            } else {
                tracing::debug!("dropping stale search #{} (q={:?})", ticket.seq, ticket.query);
            }
        });
    }

    pub fn refresh(&self, scope: RefreshScope) {
        if matches!(scope, RefreshScope::Folders | RefreshScope::All) {
            let seq = self.inner.state.borrow_mut().begin_listing();
            let this = self.clone();
            self.spawn(async move {
                let list = this.inner.api.list_folders().await;
                if this.inner.state.borrow().is_latest_listing(seq) {
                    this.inner.view.show_folders(list);
                } else {
                    tracing::debug!("dropping stale folder listing #{}", seq);
                }
            });
        }
        if matches!(scope, RefreshScope::Quotes | RefreshScope::All) {
            self.run_search();
        }
    }

    // ========================
    // Folder Reassignment
    // ========================

    /// Dropdown change on a quote row
    pub fn on_quote_folder_change(&self, quote_id: u64, folder_id: String) {
        let this = self.clone();
        self.spawn(async move {
            this.change_quote_folder(quote_id, &folder_id).await;
        });
    }

    /// Reassign and, on success, reload counts and the current list once
    pub async fn change_quote_folder(&self, quote_id: u64, folder_id: &str) -> bool {
        let applied = self.inner.api.set_quote_folder(quote_id, folder_id).await;
        if applied {
            self.refresh(RefreshScope::All);
            self.inner.view.notify(Notice::success("Carpeta actualizada correctamente"));
        }
        applied
    }

    // ========================
    // New Folder Modal
    // ========================

    pub fn open_modal(&self) {
        self.inner.modal.borrow_mut().open();
        self.publish_modal();
    }

    /// Close button, cancel, backdrop click and Escape all land here
    pub fn close_modal(&self) {
        self.inner.modal.borrow_mut().close();
        self.publish_modal();
    }

    pub fn edit_modal(&self, text: &str) {
        self.inner.modal.borrow_mut().edit(text);
    }

    /// Confirm button or Enter in the name input
    pub fn submit_modal(&self) {
        let Some(name) = self.inner.modal.borrow_mut().begin_submit() else {
            return;
        };
        self.publish_modal();

        let this = self.clone();
        self.spawn(async move {
            match this.inner.api.create_folder(&name).await {
                Ok(folder) => {
                    this.inner.modal.borrow_mut().finish(Ok(()));
                    this.publish_modal();
                    this.refresh(RefreshScope::Folders);
                    this.inner
                        .view
                        .notify(Notice::success(format!("Carpeta \"{}\" creada exitosamente", folder.nombre)));
                }
                Err(e) => {
                    this.inner.modal.borrow_mut().finish(Err(e.to_string()));
                    this.publish_modal();
                }
            }
        });
    }

    fn publish_modal(&self) {
        let snapshot = self.inner.modal.borrow().clone();
        self.inner.view.show_modal(snapshot);
    }

    fn spawn(&self, task: impl std::future::Future<Output = ()> + 'static) {
        self.inner.executor.spawn(task.boxed_local());
    }
}
