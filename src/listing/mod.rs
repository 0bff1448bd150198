//! The list presentation core.
//!
//! Everything in this module is display-agnostic: controllers turn the
//! retained data and the current view state into snapshot values, and the
//! rendering adapters (colored CLI, ratatui widgets) consume those without
//! the core ever touching a terminal.

mod controller;
mod folders;
mod pager;
mod search;
mod state;

pub use controller::{FeedSnapshot, FolderList, ListSnapshot, PagedFeed};
pub use folders::{folder_summaries, FolderSummary};
pub use pager::{page_controls, page_slice, total_pages, PageControl, PAGE_SIZE};
pub use search::{search_filter, SEARCH_RESULTS};
pub use state::ViewState;

/// Full-text view of an item for substring search.
pub trait Searchable {
    fn haystack(&self) -> String;
}

/// An item that belongs to a named folder.
pub trait Grouped: Searchable {
    fn group(&self) -> &str;

    /// Representative image for the folder tile, if the item carries one.
    fn thumbnail(&self) -> Option<&str> {
        None
    }
}
