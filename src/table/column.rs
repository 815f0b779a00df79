//! Column Definition
//!
//! Declares table columns: which record field they show, the header label,
//! an optional width and whether clicking the header sorts by it.

use super::record::Record;

/// Column width specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Flexible width with optional min/max
    Flex { min: Option<f32>, max: Option<f32> },
    /// Percentage of available space
    Percent(f32),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex { min: None, max: None }
    }
}

/// Column descriptor for the tabular view
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    /// Record field shown in this column
    pub key: String,
    /// Header label
    pub header: String,
    /// Width, `None` lets the layout decide
    pub width: Option<ColumnWidth>,
    /// Per-column sort switch, `None` inherits the table setting
    pub sortable: Option<bool>,
}

impl ColumnSpec {
    /// Create a new column
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            width: None,
            sortable: None,
        }
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = Some(ColumnWidth::Fixed(width));
        self
    }

    /// Set flexible width with optional constraints
    pub fn flex_width(mut self, min: Option<f32>, max: Option<f32>) -> Self {
        self.width = Some(ColumnWidth::Flex { min, max });
        self
    }

    /// Set percentage width
    pub fn percent_width(mut self, percent: f32) -> Self {
        self.width = Some(ColumnWidth::Percent(percent));
        self
    }

    /// Explicitly enable or disable sorting for this column
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = Some(sortable);
        self
    }

    /// Whether a header click on this column sorts, given the table switch
    pub fn is_sortable(&self, table_sortable: bool) -> bool {
        table_sortable && self.sortable.unwrap_or(true)
    }
}

/// Columns derived from the keys of the first record (header = key)
pub fn derive_columns(records: &[Record]) -> Vec<ColumnSpec> {
    records
        .first()
        .map(|first| first.keys().map(|key| ColumnSpec::new(key, key)).collect())
        .unwrap_or_default()
}

/// Explicit columns when given, derived ones otherwise
pub fn resolve_columns(explicit: Option<&[ColumnSpec]>, records: &[Record]) -> Vec<ColumnSpec> {
    match explicit {
        Some(columns) => columns.to_vec(),
        None => derive_columns(records),
    }
}
