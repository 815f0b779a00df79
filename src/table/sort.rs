//! Column Sort
//!
//! Header clicks toggle the sort state; rows are ordered with a stable sort.
//! A column whose values are all numbers sorts numerically; any other column
//! sorts every row by string form using a locale-style collation. The mode is
//! chosen once per column so the comparison stays a total order.

use std::cmp::Ordering;

use super::record::{Record, Value};

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header indicator
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Next sort state after clicking `column`.
    ///
    /// Clicking the sorted column flips the direction, any other column
    /// starts ascending.
    pub fn toggle(current: Option<&SortState>, column: &str) -> SortState {
        match current {
            Some(state) if state.column == column => SortState {
                column: state.column.clone(),
                direction: state.direction.toggled(),
            },
            _ => SortState::ascending(column),
        }
    }
}

/// Case-folded comparison, lowercase before uppercase on ties
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);

    folded_a.cmp(folded_b).then_with(|| {
        a.chars()
            .zip(b.chars())
            .find(|(x, y)| x != y)
            .map_or(Ordering::Equal, |(x, y)| {
                y.is_lowercase().cmp(&x.is_lowercase()).then(x.cmp(&y))
            })
            .then_with(|| a.len().cmp(&b.len()))
    })
}

/// How a column is compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Every value is a number
    Numeric,
    /// String form with locale-style collation
    Text,
}

/// Comparison mode for `key` over `rows`
pub fn column_mode(rows: &[&Record], key: &str) -> SortMode {
    if rows.iter().all(|row| matches!(row.value(key), Value::Number(_))) {
        SortMode::Numeric
    } else {
        SortMode::Text
    }
}

/// Ascending comparison of two cell values under `mode`
pub fn compare_values(mode: SortMode, a: &Value, b: &Value) -> Ordering {
    match (mode, a, b) {
        (SortMode::Numeric, Value::Number(x), Value::Number(y)) => x.total_cmp(y),
        _ => locale_compare(&a.string_form(), &b.string_form()),
    }
}

/// Stable in-place sort of `rows` by `sort`
pub fn sort_records(rows: &mut [&Record], sort: &SortState) {
    let key = sort.column.as_str();
    let mode = column_mode(rows, key);
    rows.sort_by(|a, b| {
        let ordering = compare_values(mode, a.value(key), b.value(key));
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Record> {
        vec![
            Record::new().with("id", 1).with("views", 300).with("title", "beta"),
            Record::new().with("id", 2).with("views", 20).with("title", "Alpha"),
            Record::new().with("id", 3).with("views", 1000).with("title", "alpha"),
            Record::new().with("id", 4).with("views", 5).with("title", "Gamma"),
        ]
    }

    fn ids(sorted: &[&Record]) -> Vec<Value> {
        sorted.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn toggle_rules() {
        let first = SortState::toggle(None, "views");
        assert_eq!(first, SortState::ascending("views"));

        let flipped = SortState::toggle(Some(&first), "views");
        assert_eq!(flipped.direction, SortDirection::Descending);

        let back = SortState::toggle(Some(&flipped), "views");
        assert_eq!(back.direction, SortDirection::Ascending);

        let other = SortState::toggle(Some(&flipped), "title");
        assert_eq!(other, SortState::ascending("title"));
    }

    #[test]
    fn numbers_sort_numerically() {
        let data = rows();
        let mut sorted: Vec<&Record> = data.iter().collect();
        sort_records(&mut sorted, &SortState::ascending("views"));
        assert_eq!(
            ids(&sorted),
            vec![Value::from(4), Value::from(2), Value::from(1), Value::from(3)]
        );
    }

    #[test]
    fn toggling_a_numeric_column_reverses_the_order() {
        let data = rows();
        let asc_state = SortState::ascending("views");
        let desc_state = SortState::toggle(Some(&asc_state), "views");

        let mut asc: Vec<&Record> = data.iter().collect();
        sort_records(&mut asc, &asc_state);
        let mut desc: Vec<&Record> = data.iter().collect();
        sort_records(&mut desc, &desc_state);

        let mut reversed = ids(&asc);
        reversed.reverse();
        assert_eq!(ids(&desc), reversed);
    }

    #[test]
    fn strings_use_locale_style_collation() {
        let data = rows();
        let mut sorted: Vec<&Record> = data.iter().collect();
        sort_records(&mut sorted, &SortState::ascending("title"));
        // "alpha" before "Alpha", both before "beta" and "Gamma"
        assert_eq!(
            ids(&sorted),
            vec![Value::from(3), Value::from(2), Value::from(1), Value::from(4)]
        );
    }

    #[test]
    fn mixed_columns_compare_as_strings() {
        let data = vec![
            Record::new().with("id", 1).with("v", 10),
            Record::new().with("id", 2).with("v", "9"),
            Record::new().with("id", 3).with("v", 2),
        ];
        let rows: Vec<&Record> = data.iter().collect();
        assert_eq!(column_mode(&rows, "v"), SortMode::Text);
        assert_eq!(
            compare_values(SortMode::Text, &Value::Number(10.0), &Value::Number(9.0)),
            Ordering::Less
        );
        assert_eq!(
            compare_values(SortMode::Numeric, &Value::Number(10.0), &Value::Number(9.0)),
            Ordering::Greater
        );
    }

    #[test]
    fn large_mixed_column_sorts_into_a_consistent_order() {
        let data: Vec<Record> = (0..200)
            .map(|i| {
                let v = match i % 3 {
                    0 => Value::from(i * 7 % 50),
                    1 => Value::from(format!("{}a", i % 13)),
                    _ => Value::from(i as f64 / 3.0),
                };
                Record::new().with("id", i).with("v", v)
            })
            .chain([
                Record::new().with("id", 200).with("v", f64::NAN),
                Record::new().with("id", 201),
            ])
            .collect();

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let mut sorted: Vec<&Record> = data.iter().collect();
            let state = SortState {
                column: "v".into(),
                direction,
            };
            sort_records(&mut sorted, &state);
            assert_eq!(sorted.len(), data.len());
            for pair in sorted.windows(2) {
                let ordering =
                    compare_values(SortMode::Text, pair[0].value("v"), pair[1].value("v"));
                match direction {
                    SortDirection::Ascending => assert_ne!(ordering, Ordering::Greater),
                    SortDirection::Descending => assert_ne!(ordering, Ordering::Less),
                }
            }
        }
    }

    #[test]
    fn nan_sorts_after_numbers() {
        let data = vec![
            Record::new().with("id", 1).with("v", f64::NAN),
            Record::new().with("id", 2).with("v", 5),
            Record::new().with("id", 3).with("v", -1),
        ];
        let mut sorted: Vec<&Record> = data.iter().collect();
        sort_records(&mut sorted, &SortState::ascending("v"));
        assert_eq!(ids(&sorted), vec![Value::from(3), Value::from(2), Value::from(1)]);
    }

    #[test]
    fn null_sorts_as_its_string_form() {
        assert_eq!(
            compare_values(SortMode::Text, &Value::Null, &Value::from("2024-05-01")),
            Ordering::Greater
        );
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let data = vec![
            Record::new().with("id", 1).with("group", "x"),
            Record::new().with("id", 2).with("group", "x"),
            Record::new().with("id", 3).with("group", "a"),
        ];
        let mut sorted: Vec<&Record> = data.iter().collect();
        sort_records(&mut sorted, &SortState::ascending("group"));
        assert_eq!(ids(&sorted), vec![Value::from(3), Value::from(1), Value::from(2)]);
    }
}
