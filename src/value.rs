use std::borrow::Cow;

/// The subject of a check.
///
/// Values are flat: there are no arrays or objects. Checks receive numbers,
/// booleans and strings as given and decide themselves how to read them.
///
/// # Examples
///
/// ```
/// use pupil::Value;
///
/// let missing = Value::Absent;
/// let empty = Value::from("");
/// let count = Value::from(42);
/// assert_eq!(count.as_text().as_deref(), Some("42"));
/// assert!(missing.as_text().is_none());
/// assert!(empty.is_blank());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value at all, e.g. a field missing from the batch
    #[default]
    Absent,

    /// Explicit null
    Null,

    Boolean(bool),

    Integer(i64),

    Float(f64),

    String(String),
}

impl Value {
    /// True for absent, null and the empty string.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Absent | Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Textual form used by length and pattern checks
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Absent | Value::Null => None,
            Value::Boolean(b) => Some(Cow::Owned(b.to_string())),
            Value::Integer(n) => Some(Cow::Owned(n.to_string())),
            Value::Float(n) => Some(Cow::Owned(n.to_string())),
            Value::String(s) => Some(Cow::Borrowed(s)),
        }
    }

    /// Human-readable type name
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Absent => "absent",
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names() {
        assert_eq!(Value::default().type_name(), "absent");
        assert_eq!(Value::from(None::<bool>).type_name(), "null");
        assert_eq!(Value::from(true).type_name(), "boolean");
        assert_eq!(Value::from(7).type_name(), "integer");
        assert_eq!(Value::from(0.5).type_name(), "float");
        assert_eq!(Value::from("s").type_name(), "string");
    }

    #[test]
    fn only_markers_and_empty_text_are_blank() {
        assert!(Value::Null.is_blank());
        assert!(!Value::from(0).is_blank());
        assert!(!Value::from(" ").is_blank());
    }
}
