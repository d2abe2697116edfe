//! Per-builder query state.
//!
//! The accumulator behind a [`crate::QueryBuilder`]: the table references and
//! column values contributed by prior calls. State persists across terminal
//! calls until [`QueryState::reset`]; generation never clears it implicitly,
//! which is what enables "set columns once, generate against several tables"
//! reuse patterns.
//!
//! No method here validates anything; callers in `builder.rs` classify
//! first and only hand over accepted values.

use crate::value::Record;

/// Mutable accumulator owned by exactly one builder instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    table_refs: Vec<String>,
    column_values: Record,
}

impl QueryState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a table reference. Single-table statements read only the
    /// most recent entry.
    pub fn set_table(&mut self, name: impl Into<String>) {
        self.table_refs.push(name.into());
    }

    /// Merge a record into the column values, preserving first-seen
    /// column order and overwriting existing columns.
    pub fn merge_columns(&mut self, record: &Record) {
        self.column_values.merge(record);
    }

    /// The most recently established table, if any.
    pub fn last_table(&self) -> Option<&str> {
        self.table_refs.last().map(String::as_str)
    }

    pub fn has_table(&self) -> bool {
        !self.table_refs.is_empty()
    }

    /// Accumulated column values.
    pub fn columns(&self) -> &Record {
        &self.column_values
    }

    /// Clear both fields back to the freshly-constructed state.
    pub fn reset(&mut self) {
        self.table_refs.clear();
        self.column_values.clear();
    }
}
