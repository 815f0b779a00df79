//! Column Layout
//!
//! Turns a column's declared width into flex styling so header and body
//! cells line up.

use gpui::{px, relative, Styled};

use crate::table::ColumnWidth;

/// Apply `width` to a header or body cell
pub fn apply_width<E: Styled>(cell: E, width: Option<ColumnWidth>) -> E {
    match width {
        Some(ColumnWidth::Fixed(w)) => cell.flex_none().w(px(w)),
        Some(ColumnWidth::Percent(p)) => cell.flex_none().w(relative(p / 100.0)),
        Some(ColumnWidth::Flex { min, max }) => {
            let cell = cell.flex_1().min_w(px(min.unwrap_or(0.0)));
            match max {
                Some(max) => cell.max_w(px(max)),
                None => cell,
            }
        }
        None => cell.flex_1().min_w(px(0.0)),
    }
}
