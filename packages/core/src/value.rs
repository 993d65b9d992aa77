//! The Value type - the document tree.
//!
//! A `Document` describes a whole directory tree: directory markers, file
//! tokens and property names all live side by side as string keys. Files
//! decoded from disk use the same `Value` shape for their contents.

use std::collections::BTreeMap;

/// A mapping from string keys to values.
///
/// Uses `BTreeMap` so iteration, encoding and comparison are deterministic.
pub type Document = BTreeMap<String, Value>;

/// A tree-shaped value: the contents of a document, a directory or a file.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed 64-bit integer.
    Integer(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string. As file content this is raw text.
    String(String),
    /// Ordered sequence of values.
    Array(Vec<Value>),
    /// Nested document.
    Map(Document),
}

impl Value {
    /// Create an empty map.
    pub fn map() -> Self {
        Value::Map(Document::new())
    }

    /// Check if this value is a map.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Maps and arrays are structured; everything else is a final scalar.
    ///
    /// Only structured values are merged into existing files.
    pub fn is_structured(&self) -> bool {
        matches!(self, Value::Map(_) | Value::Array(_))
    }

    pub fn as_map(&self) -> Option<&Document> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
        }
    }

    /// Look up a nested value by literal keys.
    ///
    /// Keys are used as-is: `"dir/"` looks up the directory marker, not a
    /// two-segment path.
    pub fn get<'a, K: AsRef<str>>(&'a self, keys: &[K]) -> Option<&'a Value> {
        let mut current = self;
        for key in keys {
            current = match current {
                Value::Map(map) => map.get(key.as_ref())?,
                _ => return None,
            };
        }
        Some(current)
    }
}

// Conversion from common types

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Document> for Value {
    fn from(v: Document) -> Self {
        Value::Map(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}
