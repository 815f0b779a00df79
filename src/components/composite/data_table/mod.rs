//! DataTable Component
//!
//! Searchable, sortable, paginated table over [`crate::table`] records.

pub mod column;
pub mod data_table;
pub mod pagination;

pub use data_table::DataTable;
pub use pagination::Pagination;
