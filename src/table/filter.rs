//! Search Filter
//!
//! Keeps the records where any field contains the search term,
//! case-insensitively. No fuzzy matching and no per-column scoping.

use super::record::Record;

/// Whether any field of `record` contains `needle` (already lowercased)
fn record_contains(record: &Record, needle: &str) -> bool {
    record
        .values()
        .any(|value| value.string_form().to_lowercase().contains(needle))
}

/// Records matching `term`; an empty term keeps everything
pub fn filter_records<'a>(records: &'a [Record], term: &str) -> Vec<&'a Record> {
    if term.is_empty() {
        return records.iter().collect();
    }

    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| record_contains(record, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::record::Value;

    fn sample() -> Vec<Record> {
        vec![
            Record::new().with("id", 1).with("name", "Alice").with("role", "admin"),
            Record::new().with("id", 2).with("name", "bob").with("role", "user"),
            Record::new().with("id", 12).with("name", "Carol").with("active", true),
        ]
    }

    #[test]
    fn empty_term_is_identity() {
        let records = sample();
        let kept = filter_records(&records, "");
        assert_eq!(kept.len(), records.len());
        assert!(kept.iter().zip(&records).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn case_insensitive_on_both_sides() {
        let records = sample();
        let kept = filter_records(&records, "ALI");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].value("name"), &Value::from("Alice"));

        let kept = filter_records(&records, "Bob");
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn numbers_and_booleans_match_by_string_form() {
        let records = sample();
        let ids: Vec<_> = filter_records(&records, "1")
            .into_iter()
            .map(Record::id)
            .collect();
        assert_eq!(ids, vec![Value::Number(1.0), Value::Number(12.0)]);

        assert_eq!(filter_records(&records, "true").len(), 1);
    }

    #[test]
    fn filter_is_sound_and_complete() {
        let records = sample();
        let term = "o";
        let kept = filter_records(&records, term);
        for record in &records {
            let has = record
                .values()
                .any(|v| v.string_form().to_lowercase().contains(term));
            let retained = kept.iter().any(|k| std::ptr::eq(*k, record));
            assert_eq!(has, retained);
        }
    }

    #[test]
    fn null_matches_its_string_form() {
        let records = vec![
            Record::new().with("id", 1).with("lastLogin", Value::Null),
            Record::new().with("id", 2).with("lastLogin", "2024-05-01"),
        ];
        let kept = filter_records(&records, "NULL");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id(), Value::from(1));
    }

    #[test]
    fn elements_never_match() {
        let records = vec![Record::new().with("a", Value::element(|| unreachable!()))];
        assert!(filter_records(&records, "a").is_empty());
        assert_eq!(filter_records(&records, "").len(), 1);
    }
}
