//! Configuration values
//!
//! [`Value`] models a single attribute value inside a configuration tree. Besides
//! ordinary known data, a value may be *null* (the attribute is absent from the
//! configuration) or *unknown* (it will only be known later in the plan/apply
//! lifecycle). Validators treat both of those states as "nothing to check yet".
//!
//! # Example
//!
//! ```rust
//! use attr_validators::Value;
//!
//! let name = Value::string("web");
//! assert!(name.is_known());
//! assert_eq!(name.to_string(), "\"web\"");
//! assert_eq!(name.unquoted(), "web");
//!
//! assert!(Value::Null.is_null());
//! assert!(Value::Unknown.is_unknown());
//! ```

use std::collections::BTreeMap;
use std::fmt;

/// The kind of a known configuration value.
///
/// Mirrors the attribute types a provider schema can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValueKind {
    /// Boolean attribute.
    Bool,
    /// 32-bit integer attribute.
    Int32,
    /// 64-bit integer attribute.
    Int64,
    /// 64-bit float attribute.
    Float64,
    /// Arbitrary-precision number attribute.
    Number,
    /// String attribute.
    String,
    /// Ordered list of elements.
    List,
    /// Unordered set of elements.
    Set,
    /// String-keyed map of elements.
    Map,
    /// Object with named attributes.
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "bool",
            ValueKind::Int32 => "int32",
            ValueKind::Int64 => "int64",
            ValueKind::Float64 => "float64",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::List => "list",
            ValueKind::Set => "set",
            ValueKind::Map => "map",
            ValueKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// A configuration value, possibly null or unknown.
///
/// Equality is kind-aware: `Int32(10)` and `Int64(10)` are different values,
/// just as they are different attribute values for the host framework.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The attribute is explicitly absent.
    #[default]
    Null,
    /// The attribute is not known yet.
    Unknown,
    /// A boolean.
    Bool(bool),
    /// A 32-bit integer.
    Int32(i32),
    /// A 64-bit integer.
    Int64(i64),
    /// A 64-bit float.
    Float64(f64),
    /// A number.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered list.
    List(Vec<Value>),
    /// A set; element order is the configuration order.
    Set(Vec<Value>),
    /// A map with string keys.
    Map(BTreeMap<String, Value>),
    /// An object with named attributes.
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(value: impl Into<String>) -> Self {
        Value::String(value.into())
    }

    /// Create a list value from its elements.
    pub fn list<I>(elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::List(elements.into_iter().map(Into::into).collect())
    }

    /// Create a set value from its elements.
    pub fn set<I>(elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::Set(elements.into_iter().map(Into::into).collect())
    }

    /// Create a map value from `(key, element)` pairs.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Create an object value from `(attribute, value)` pairs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attr_validators::Value;
    ///
    /// let obj = Value::object([("name", Value::string("web")), ("port", Value::Int64(80))]);
    /// assert_eq!(obj.to_string(), r#"{"name":"web","port":80}"#);
    /// ```
    pub fn object<I, K, V>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Object(
            attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns true if the value is null.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if the value is unknown.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    /// Returns true if the value is neither null nor unknown.
    #[inline]
    pub fn is_known(&self) -> bool {
        !self.is_null() && !self.is_unknown()
    }

    /// The kind of a known value, `None` for null and unknown.
    pub fn kind(&self) -> Option<ValueKind> {
        let kind = match self {
            Value::Null | Value::Unknown => return None,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int32(_) => ValueKind::Int32,
            Value::Int64(_) => ValueKind::Int64,
            Value::Float64(_) => ValueKind::Float64,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::List(_) => ValueKind::List,
            Value::Set(_) => ValueKind::Set,
            Value::Map(_) => ValueKind::Map,
            Value::Object(_) => ValueKind::Object,
        };
        Some(kind)
    }

    /// The string content of a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The content of a bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The content of an integer value of either width.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int32(n) => Some(i64::from(*n)),
            Value::Int64(n) => Some(*n),
            _ => None,
        }
    }

    /// The content of a float or number value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float64(n) | Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Rendering with the surrounding quotes of a string value removed.
    ///
    /// Used where a literal is already wrapped in Markdown back-quotes.
    pub fn unquoted(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

fn write_elements(f: &mut fmt::Formatter<'_>, elements: &[Value]) -> fmt::Result {
    f.write_str("[")?;
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{element}")?;
    }
    f.write_str("]")
}

fn write_entries(f: &mut fmt::Formatter<'_>, entries: &BTreeMap<String, Value>) -> fmt::Result {
    f.write_str("{")?;
    for (i, (key, element)) in entries.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{key:?}:{element}")?;
    }
    f.write_str("}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("<null>"),
            Value::Unknown => f.write_str("<unknown>"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int32(n) => write!(f, "{n}"),
            Value::Int64(n) => write!(f, "{n}"),
            Value::Float64(n) | Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::List(elements) | Value::Set(elements) => write_elements(f, elements),
            Value::Map(entries) | Value::Object(entries) => write_entries(f, entries),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int32(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int64(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float64(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_unknown_states() {
        assert!(Value::Null.is_null());
        assert!(!Value::Null.is_known());
        assert!(Value::Unknown.is_unknown());
        assert!(!Value::Unknown.is_known());
        assert!(Value::Bool(false).is_known());
        assert_eq!(Value::default(), Value::Null);
    }

    #[test]
    fn test_kind_aware_equality() {
        assert_ne!(Value::Int32(10), Value::Int64(10));
        assert_eq!(Value::Int64(10), Value::from(10i64));
        assert_ne!(Value::Float64(1.5), Value::Number(1.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "<null>");
        assert_eq!(Value::Unknown.to_string(), "<unknown>");
        assert_eq!(Value::string("excepted value").to_string(), "\"excepted value\"");
        assert_eq!(Value::Int32(10).to_string(), "10");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::list(["a", "b"]).to_string(), r#"["a","b"]"#);
        assert_eq!(Value::map([("env", "prod")]).to_string(), r#"{"env":"prod"}"#);
    }

    #[test]
    fn test_unquoted() {
        assert_eq!(Value::string("a b").unquoted(), "a b");
        assert_eq!(Value::Int64(3).unquoted(), "3");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Int32(7).as_i64(), Some(7));
        assert_eq!(Value::Int64(-7).as_i64(), Some(-7));
        assert_eq!(Value::string("x").as_i64(), None);
        assert_eq!(Value::string("x").as_str(), Some("x"));
        assert_eq!(Value::Number(2.5).as_f64(), Some(2.5));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
    }

    #[test]
    fn test_kind() {
        assert_eq!(Value::Null.kind(), None);
        assert_eq!(Value::set([1i64]).kind(), Some(ValueKind::Set));
        assert_eq!(ValueKind::Object.to_string(), "object");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::string("x"));
    }
}
