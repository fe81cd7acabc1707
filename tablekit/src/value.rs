//! Dynamic cell values and row field access.

use std::cmp::Ordering;
use std::fmt;

/// A dynamically typed value read out of a table cell.
///
/// The engine never interprets row shape directly; everything it compares,
/// filters, or displays goes through `CellValue`. `Null` stands in for a
/// missing field and renders as an empty string.
///
/// # Example
///
/// ```
/// use tablekit::CellValue;
///
/// let name = CellValue::from("Visa Gold");
/// let price = CellValue::from(129.5);
/// let missing = CellValue::Null;
/// assert_eq!(missing.to_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Missing or null field.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// String value.
    Str(String),
}

impl CellValue {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Attempts to coerce this value to a finite number.
    ///
    /// Strings are trimmed and parsed; booleans coerce to 1 and 0. Returns
    /// `None` for null, non-finite floats, and strings that don't parse.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Null => None,
            CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            CellValue::Int(n) => Some(*n as f64),
            CellValue::Float(f) => f.is_finite().then_some(*f),
            CellValue::Str(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
            }
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Float(x) => write!(f, "{x}"),
            CellValue::Str(s) => f.write_str(s),
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int(v as i64)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        CellValue::Int(v as i64)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Str(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Str(v.to_string())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => CellValue::Null,
        }
    }
}

/// Ascending comparison between two cell values.
///
/// Ordering rules, in priority order:
/// - two nulls are equal; a single null sorts before any real value,
/// - if both values coerce to finite numbers, compare numerically,
/// - otherwise compare as lower-cased strings.
///
/// Descending order is obtained by reversing the result, which keeps the
/// null-first rule scaled with the direction.
pub fn compare(a: &CellValue, b: &CellValue) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => {
            if let (Some(na), Some(nb)) = (a.as_f64(), b.as_f64()) {
                na.partial_cmp(&nb).unwrap_or(Ordering::Equal)
            } else {
                let sa = a.to_string().to_lowercase();
                let sb = b.to_string().to_lowercase();
                sa.cmp(&sb)
            }
        }
    }
}

/// String-keyed field access for table rows.
///
/// Rows stay opaque to the engine; implementors map a column key to the
/// matching field. Unknown keys should return [`CellValue::Null`].
pub trait Row {
    /// Look up the raw value of a field by column key.
    fn field(&self, key: &str) -> CellValue;
}
