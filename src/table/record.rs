//! Record - Table Rows and Cell Values
//!
//! A record is an insertion-ordered map from field name to [`Value`]. The
//! order matters: when a table has no explicit columns, they are derived
//! from the keys of the first record.

use std::fmt;
use std::sync::Arc;

use gpui::AnyElement;
use hashlink::LinkedHashMap;

/// Factory producing a ready-made element for a cell
pub type ElementFactory = Arc<dyn Fn() -> AnyElement + Send + Sync>;

static NULL: Value = Value::Null;

/// A single cell value
#[derive(Clone, Default)]
pub enum Value {
    /// Absent or null value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// Text value
    Text(String),
    /// Pre-rendered element, displayed as-is
    Element(ElementFactory),
}

impl Value {
    /// Wrap an element factory
    pub fn element(factory: impl Fn() -> AnyElement + Send + Sync + 'static) -> Self {
        Value::Element(Arc::new(factory))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether the value counts as "present" for placeholder rules.
    ///
    /// Null, `false`, zero, NaN and the empty string are falsy; elements are
    /// always truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Text(s) => !s.is_empty(),
            Value::Element(_) => true,
        }
    }

    /// String form used for searching and sorting.
    ///
    /// Same as [`Value::display_text`] except that null reads as `"null"`.
    pub fn string_form(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            other => other.display_text(),
        }
    }

    /// Text shown in a plain cell.
    ///
    /// Integral numbers print without a fractional part. Null and elements
    /// have no text.
    pub fn display_text(&self) -> String {
        match self {
            Value::Null | Value::Element(_) => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_js_number(*n),
            Value::Text(s) => s.clone(),
        }
    }
}

fn format_js_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n.fract() == 0.0 {
        // `-0.0` prints as "0"
        format!("{:.0}", n + 0.0)
    } else {
        n.to_string()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Element(a), Value::Element(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Value::Element(_) => f.write_str("Element(..)"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(value as f64)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// One row of table data
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: LinkedHashMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a field, keeping the original position on replace
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.fields.get_mut(&key) {
            *slot = value;
        } else {
            self.fields.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Field value, or `Null` when absent
    pub fn value(&self, key: &str) -> &Value {
        self.fields.get(key).unwrap_or(&NULL)
    }

    /// The `id` field, or `Null`
    pub fn id(&self) -> Value {
        self.value("id").clone()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_text_formats_numbers_like_the_browser() {
        assert_eq!(Value::Number(3.0).display_text(), "3");
        assert_eq!(Value::Number(-0.0).display_text(), "0");
        assert_eq!(Value::Number(1.5).display_text(), "1.5");
        assert_eq!(Value::Number(f64::NAN).display_text(), "NaN");
        assert_eq!(Value::Bool(true).display_text(), "true");
        assert_eq!(Value::Null.display_text(), "");
    }

    #[test]
    fn null_has_a_string_form_but_no_display_text() {
        assert_eq!(Value::Null.string_form(), "null");
        assert_eq!(Value::Null.display_text(), "");
        assert_eq!(Value::Number(7.0).string_form(), "7");
        assert_eq!(Value::element(|| unreachable!()).string_form(), "");
    }

    #[test]
    fn truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Number(0.0).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(Value::from("x").is_truthy());
        assert!(Value::Number(-1.0).is_truthy());
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut record = Record::new().with("id", 1).with("name", "a");
        record.insert("id", 2);
        let keys: Vec<_> = record.keys().collect();
        assert_eq!(keys, vec!["id", "name"]);
        assert_eq!(record.id(), Value::Number(2.0));
        assert_eq!(record.value("missing"), &Value::Null);
    }
}
