//! View State
//!
//! The table's own UI state (search term, sort, current page) as an
//! immutable value. Every user interaction is a [`ViewAction`] folded in by
//! [`ViewState::apply`], which returns a new state.

use super::pagination::clamp_page;
use super::sort::SortState;

/// What happens to the current page when the row count shrinks underneath it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagePolicy {
    /// Pull the page back into range after every search, sort or data change
    #[default]
    Clamp,
    /// Leave the page alone until the user navigates (may show an empty page)
    Preserve,
}

/// A user interaction with the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    /// Search box changed
    Search(String),
    /// Sortable header clicked
    SortBy(String),
    /// Previous page button
    PrevPage,
    /// Next page button
    NextPage,
    /// Jump to a page
    GoToPage(usize),
}

/// Table view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    current_page: usize,
    search_term: String,
    sort: Option<SortState>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            search_term: String::new(),
            sort: None,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Fold `action` into a new state.
    ///
    /// `total_pages` is the page count of the rows currently shown and
    /// bounds the navigation actions.
    pub fn apply(&self, action: ViewAction, total_pages: usize) -> ViewState {
        let mut next = self.clone();
        match action {
            ViewAction::Search(term) => next.search_term = term,
            ViewAction::SortBy(column) => {
                next.sort = Some(SortState::toggle(self.sort.as_ref(), &column));
            }
            ViewAction::PrevPage => {
                next.current_page = clamp_page(self.current_page.saturating_sub(1), total_pages);
            }
            ViewAction::NextPage => {
                next.current_page = clamp_page(self.current_page.saturating_add(1), total_pages);
            }
            ViewAction::GoToPage(page) => next.current_page = clamp_page(page, total_pages),
        }
        next
    }

    /// Page to display for `total_pages` under `policy`
    pub fn effective_page(&self, total_pages: usize, policy: PagePolicy) -> usize {
        match policy {
            PagePolicy::Clamp => clamp_page(self.current_page, total_pages),
            PagePolicy::Preserve => self.current_page,
        }
    }

    /// State with the page reconciled against a new page count
    pub fn reconciled(&self, total_pages: usize, policy: PagePolicy) -> ViewState {
        ViewState {
            current_page: self.effective_page(total_pages, policy),
            ..self.clone()
        }
    }
}
