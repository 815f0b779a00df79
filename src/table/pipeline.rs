//! Table Pipeline
//!
//! Runs the stages in order over the supplied records:
//! search filter, column sort, pagination. The result borrows the records
//! and carries everything a renderer needs for one frame.

use super::cell::EntityKind;
use super::column::{ColumnSpec, resolve_columns};
use super::filter::filter_records;
use super::pagination::{page_slice, shows_controls, total_pages};
use super::record::Record;
use super::sort::{SortState, sort_records};
use super::view_state::{PagePolicy, ViewState};

/// Default rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Table configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Rows per page
    pub page_size: usize,
    /// Show the search box and apply the search term
    pub searchable: bool,
    /// Allow header clicks to sort
    pub sortable: bool,
    /// Domain render rules to apply, if any
    pub entity_kind: Option<EntityKind>,
    /// Page handling when the row count shrinks
    pub page_policy: PagePolicy,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            searchable: false,
            sortable: false,
            entity_kind: None,
            page_policy: PagePolicy::default(),
        }
    }
}

/// One computed frame of the table
#[derive(Debug)]
pub struct TableView<'a> {
    /// Columns to show
    pub columns: Vec<ColumnSpec>,
    /// Rows on the current page, in display order
    pub rows: Vec<&'a Record>,
    /// Row count after filtering
    pub filtered_count: usize,
    /// Page count after filtering
    pub total_pages: usize,
    /// Page being shown
    pub current_page: usize,
    /// Active sort
    pub sort: Option<SortState>,
}

impl TableView<'_> {
    /// Whether prev/next controls should be rendered
    pub fn shows_pagination(&self) -> bool {
        shows_controls(self.total_pages)
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// All filtered and sorted rows, before pagination
pub fn process_rows<'a>(
    records: &'a [Record],
    state: &ViewState,
    options: &TableOptions,
) -> Vec<&'a Record> {
    let term = if options.searchable {
        state.search_term()
    } else {
        ""
    };
    let mut rows = filter_records(records, term);
    if let Some(sort) = state.sort() {
        sort_records(&mut rows, sort);
    }
    rows
}

/// Compute the frame for `records` under `state`
pub fn build_view<'a>(
    records: &'a [Record],
    columns: Option<&[ColumnSpec]>,
    state: &ViewState,
    options: &TableOptions,
) -> TableView<'a> {
    let rows = process_rows(records, state, options);
    let filtered_count = rows.len();
    let total_pages = total_pages(filtered_count, options.page_size);
    let current_page = state.effective_page(total_pages, options.page_policy);
    let page_rows = page_slice(&rows, current_page, options.page_size).to_vec();

    TableView {
        columns: resolve_columns(columns, records),
        rows: page_rows,
        filtered_count,
        total_pages,
        current_page,
        sort: state.sort().cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::record::Value;
    use crate::table::view_state::ViewAction;

    fn numbered(count: usize) -> Vec<Record> {
        (1..=count)
            .map(|i| {
                Record::new()
                    .with("id", i as i64)
                    .with("name", if i % 2 == 0 { "even" } else { "odd" })
            })
            .collect()
    }

    fn searchable() -> TableOptions {
        TableOptions {
            searchable: true,
            sortable: true,
            ..TableOptions::default()
        }
    }

    #[test]
    fn empty_data_has_no_pages_and_no_controls() {
        let view = build_view(&[], None, &ViewState::new(), &TableOptions::default());
        assert_eq!(view.total_pages, 0);
        assert!(view.rows.is_empty());
        assert!(view.columns.is_empty());
        assert!(!view.shows_pagination());
        assert_eq!(view.current_page, 1);
    }

    #[test]
    fn first_page_holds_page_size_rows() {
        let data = numbered(25);
        let view = build_view(&data, None, &ViewState::new(), &TableOptions::default());
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.rows.len(), 10);
        assert!(view.shows_pagination());
        assert!(!view.can_go_prev());
        assert!(view.can_go_next());
        assert_eq!(view.columns.len(), 2);
    }

    #[test]
    fn search_is_ignored_when_not_searchable() {
        let data = numbered(4);
        let state = ViewState::new().apply(ViewAction::Search("even".into()), 1);
        let options = TableOptions::default();
        assert_eq!(process_rows(&data, &state, &options).len(), 4);
        assert_eq!(process_rows(&data, &state, &searchable()).len(), 2);
    }

    #[test]
    fn filter_then_sort_then_page() {
        let data = numbered(30);
        let options = TableOptions {
            page_size: 5,
            ..searchable()
        };
        let state = ViewState::new()
            .apply(ViewAction::Search("odd".into()), 1)
            .apply(ViewAction::SortBy("id".into()), 1)
            .apply(ViewAction::SortBy("id".into()), 1)
            .apply(ViewAction::NextPage, 3);

        let view = build_view(&data, None, &state, &options);
        assert_eq!(view.filtered_count, 15);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.current_page, 2);
        let ids: Vec<_> = view.rows.iter().map(|r| r.id()).collect();
        let expected: Vec<Value> = [19, 17, 15, 13, 11].into_iter().map(Value::from).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn shrinking_results_clamp_or_preserve_the_page() {
        let data = numbered(30);
        let state = ViewState::new()
            .apply(ViewAction::GoToPage(3), 3)
            .apply(ViewAction::Search("7".into()), 3);

        let clamped = build_view(&data, None, &state, &searchable());
        assert_eq!(clamped.filtered_count, 3);
        assert_eq!(clamped.current_page, 1);
        assert_eq!(clamped.rows.len(), 3);

        let preserving = TableOptions {
            page_policy: PagePolicy::Preserve,
            ..searchable()
        };
        let quirk = build_view(&data, None, &state, &preserving);
        assert_eq!(quirk.current_page, 3);
        assert!(quirk.rows.is_empty());
    }

    #[test]
    fn explicit_columns_are_used() {
        let data = numbered(2);
        let columns = vec![ColumnSpec::new("name", "Name")];
        let view = build_view(
            &data,
            Some(columns.as_slice()),
            &ViewState::new(),
            &TableOptions::default(),
        );
        assert_eq!(view.columns, columns);
    }
}
