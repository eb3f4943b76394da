//! UI Components
//!
//! Leptos components for the quotes dashboard.

mod folder_sidebar;
mod new_folder_modal;
mod quote_table;
mod search_bar;
mod toast;

pub use folder_sidebar::FolderSidebar;
pub use new_folder_modal::NewFolderModal;
pub use quote_table::QuoteTable;
pub use search_bar::SearchBar;
pub use toast::Toast;
