//! Condition values and broadcast shapes.
//!
//! A [`Value`] is the label assigned to one well for one condition. The
//! compiler never interprets values; it only moves them around, so the enum
//! covers the scalar types a platemap realistically carries.
//!
//! A [`ValueSpec`] describes how values are broadcast across a resolved
//! range. The shape is classified once, structurally, through the explicit
//! constructors; the compiler matches on the tag and never inspects value
//! contents.

use std::fmt;

/// A condition value: an opaque label attached to a well.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
}

impl Value {
    /// Get as boolean if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as float if this is a Float value.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as string reference if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

/// A grid of values: outer index is the row, inner index the column.
pub type Grid = Vec<Vec<Value>>;

/// How a condition's values are broadcast across its resolved range.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueSpec {
    /// One value, assigned to every well in the range.
    Scalar(Value),
    /// One value per well, assigned positionally over the concatenation of
    /// all sub-region coordinate lists (declaration order, each row-major).
    /// The length must equal the total well count.
    Flat(Vec<Value>),
    /// A rows x cols grid, assigned element-wise to each sub-region
    /// independently. Every sub-region's extent must equal the grid's extent.
    Nested(Grid),
    /// One grid per sub-region, matched positionally by declaration order.
    /// Each grid's extent must equal its sub-region's extent.
    PerRegion(Vec<Grid>),
}

impl ValueSpec {
    /// A scalar broadcast.
    pub fn scalar(value: impl Into<Value>) -> Self {
        ValueSpec::Scalar(value.into())
    }

    /// A flat sequence, spooled across the range in row-major order.
    pub fn flat<T>(values: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Value>,
    {
        ValueSpec::Flat(values.into_iter().map(Into::into).collect())
    }

    /// A nested rows x cols grid, applied to each sub-region independently.
    pub fn nested<R, T>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        ValueSpec::Nested(collect_grid(rows))
    }

    /// One nested grid per sub-region, in declaration order.
    pub fn per_region<G, R, T>(grids: impl IntoIterator<Item = G>) -> Self
    where
        G: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        ValueSpec::PerRegion(grids.into_iter().map(collect_grid).collect())
    }
}

fn collect_grid<R, T>(rows: impl IntoIterator<Item = R>) -> Grid
where
    R: IntoIterator<Item = T>,
    T: Into<Value>,
{
    rows.into_iter()
        .map(|row| row.into_iter().map(Into::into).collect())
        .collect()
}

impl From<Value> for ValueSpec {
    fn from(value: Value) -> Self {
        ValueSpec::Scalar(value)
    }
}

impl From<bool> for ValueSpec {
    fn from(b: bool) -> Self {
        ValueSpec::Scalar(b.into())
    }
}

impl From<i64> for ValueSpec {
    fn from(i: i64) -> Self {
        ValueSpec::Scalar(i.into())
    }
}

impl From<i32> for ValueSpec {
    fn from(i: i32) -> Self {
        ValueSpec::Scalar(i.into())
    }
}

impl From<f64> for ValueSpec {
    fn from(f: f64) -> Self {
        ValueSpec::Scalar(f.into())
    }
}

impl From<String> for ValueSpec {
    fn from(s: String) -> Self {
        ValueSpec::Scalar(s.into())
    }
}

impl From<&str> for ValueSpec {
    fn from(s: &str) -> Self {
        ValueSpec::Scalar(s.into())
    }
}
