//! Argument classification.
//!
//! Three independent taxonomies decide, for every possible [`Value`] shape,
//! whether an argument is usable, deliberately absent, or rejected. They are
//! intentionally asymmetric: a whitespace-only string names a table but is
//! not a data payload, and boolean `false` means "no table" while any
//! boolean is an invalid payload. The asymmetry is part of the observable
//! contract; do not "fix" it here.
//!
//! All three functions are pure and total over [`Value`].

use crate::value::{Record, Value};

/// Classification of a table-reference argument.
#[derive(Debug, PartialEq)]
pub enum TableClass<'a> {
    /// A usable table name.
    Present(&'a str),
    /// Nothing supplied; fall back to builder state.
    Absent,
    /// A shape that can never name a table.
    Invalid,
}

/// Classification of a data-payload argument.
#[derive(Debug, PartialEq)]
pub enum PayloadClass<'a> {
    /// One record (possibly empty).
    Single(&'a Record),
    /// A list of non-empty records (possibly zero of them).
    Batch(Vec<&'a Record>),
    /// Nothing supplied; fall back to builder state.
    Absent,
    /// A shape that can never carry row data.
    Invalid,
}

/// Classification of a single field value inside a record.
#[derive(Debug, PartialEq)]
pub enum FieldClass<'a> {
    /// A renderable scalar (int, finite float, string, bool, null).
    Scalar(&'a Value),
    /// No value supplied; the column is skipped.
    Absent,
    /// A type that cannot be rendered as a literal.
    Invalid,
}

/// Classify a table-reference argument.
///
/// Absent covers several sentinels (nothing, null, `false`, NaN) so callers
/// can pass computed optional values without branching. The empty string
/// carries no usable name and is treated as absent as well.
pub fn classify_table(value: &Value) -> TableClass<'_> {
    match value {
        Value::Text(s) if !s.is_empty() => TableClass::Present(s),
        Value::Text(_) => TableClass::Absent,
        Value::Absent | Value::Null | Value::Bool(false) => TableClass::Absent,
        Value::Float(f) if f.is_nan() => TableClass::Absent,
        _ => TableClass::Invalid,
    }
}

/// Classify a data-payload argument.
///
/// A list is a batch only if every element is a non-empty record; one bad
/// element rejects the whole list. The exact empty string means "nothing
/// supplied", but any other string (whitespace included) is invalid.
pub fn classify_payload(value: &Value) -> PayloadClass<'_> {
    match value {
        Value::Record(record) => PayloadClass::Single(record),
        Value::List(items) => {
            let mut records = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Record(record) if !record.is_empty() => records.push(record),
                    _ => return PayloadClass::Invalid,
                }
            }
            PayloadClass::Batch(records)
        }
        Value::Absent | Value::Null => PayloadClass::Absent,
        Value::Text(s) if s.is_empty() => PayloadClass::Absent,
        _ => PayloadClass::Invalid,
    }
}

/// Classify a field value inside a record.
pub fn classify_field(value: &Value) -> FieldClass<'_> {
    match value {
        Value::Int(_) | Value::Text(_) | Value::Bool(_) | Value::Null => FieldClass::Scalar(value),
        Value::Float(f) if f.is_finite() => FieldClass::Scalar(value),
        Value::Absent => FieldClass::Absent,
        _ => FieldClass::Invalid,
    }
}
