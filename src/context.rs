//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use wasm_debounce::GlooTimer;

use crate::dashboard::Dashboard;
use crate::models::FolderChoice;
use crate::store::DashboardStore;

pub type AppDashboard = Dashboard<GlooTimer>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Coordinator (not `Send`, so kept in local storage)
    dashboard: StoredValue<AppDashboard, LocalStorage>,
    /// Rendered data
    pub store: DashboardStore,
    /// Dropdown options rendered into the page by the server
    pub seeded_choices: StoredValue<Vec<FolderChoice>>,
}

impl AppContext {
    pub fn new(dashboard: AppDashboard, store: DashboardStore, seeded_choices: Vec<FolderChoice>) -> Self {
        Self {
            dashboard: StoredValue::new_local(dashboard),
            store,
            seeded_choices: StoredValue::new(seeded_choices),
        }
    }

    /// Run `f` against the coordinator
    pub fn with<R>(&self, f: impl FnOnce(&AppDashboard) -> R) -> R {
        self.dashboard.with_value(f)
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
