//! Loading state of a data-backed view.
//!
//! ```text
//! Loading --> Ready(data)
//!         --> Empty        (detail fetch found nothing)
//!         --> Error(msg)   (fetch failed)
//! ```
//!
//! The three settled states are terminal: only an explicit
//! [`ViewState::reload`] moves a view back to `Loading`.

use std::fmt::Display;

/// State of a view waiting on a single fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Empty,
    Error(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl<T> ViewState<T> {
    /// State for a collection fetch. An empty collection is still `Ready`.
    pub fn from_collection<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => ViewState::Ready(data),
            Err(e) => ViewState::Error(e.to_string()),
        }
    }

    /// State for a single-item fetch where absence is not an error.
    pub fn from_lookup<E: Display>(result: Result<Option<T>, E>) -> Self {
        match result {
            Ok(Some(data)) => ViewState::Ready(data),
            Ok(None) => ViewState::Empty,
            Err(e) => ViewState::Error(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    /// Move from `Loading` to a settled state.
    ///
    /// Returns `false` and leaves the state untouched when the view has
    /// already settled or `next` is itself `Loading`.
    pub fn settle(&mut self, next: ViewState<T>) -> bool {
        if self.is_settled() || next.is_loading() {
            return false;
        }
        *self = next;
        true
    }

    /// Explicit re-fetch trigger: discard the settled state.
    pub fn reload(&mut self) {
        *self = ViewState::Loading;
    }
}
