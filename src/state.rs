//! View State
//!
//! The two filter axes (free text, folder) plus the sequence counters used
//! to drop stale search and folder-listing responses.

use crate::models::FolderFilter;

/// Parameters of one dispatched search, tagged with its sequence number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: String,
    pub folder: FolderFilter,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub current_search: String,
    pub current_folder: FolderFilter,
    issued: u64,
    listings_issued: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the query, trimmed
    pub fn set_search(&mut self, raw: &str) {
        self.current_search = raw.trim().to_string();
    }

    pub fn set_folder(&mut self, folder: FolderFilter) {
        self.current_folder = folder;
    }

    /// Issue a new search with both current axis values
    pub fn begin_search(&mut self) -> SearchTicket {
        self.issued += 1;
        SearchTicket {
            seq: self.issued,
            query: self.current_search.clone(),
            folder: self.current_folder.clone(),
        }
    }

    /// Only the most recently issued search may render
    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.issued
    }

    /// Sequence number for a new folder listing
    pub fn begin_listing(&mut self) -> u64 {
        self.listings_issued += 1;
        self.listings_issued
    }

    pub fn is_latest_listing(&self, seq: u64) -> bool {
        seq == self.listings_issued
    }
}
