//! The fluent statement builder.
//!
//! Chain calls ([`QueryBuilder::set_table`], [`QueryBuilder::set`],
//! [`QueryBuilder::set_columns`]) accumulate state; terminal calls
//! ([`QueryBuilder::insert`] and friends) validate their direct arguments,
//! merge them with state into a per-call working copy, and render the final
//! statement text. Terminal calls never clear state; [`QueryBuilder::reset`]
//! is explicit.
//!
//! Every entry point classifies its arguments before touching state, so a
//! rejected call leaves the builder exactly as it found it and the caller
//! can retry with corrected arguments.

use crate::classify::{
    FieldClass, PayloadClass, TableClass, classify_field, classify_payload, classify_table,
};
use crate::dialect::{MySqlQuoting, Quoting};
use crate::error::{BuilderError, BuilderResult};
use crate::state::QueryState;
use crate::value::{Record, Value};

/// A fluent SQL statement builder over a quoting dialect.
///
/// # Example
/// ```ignore
/// use sqlforge::{QueryBuilder, record};
///
/// let mut qb = QueryBuilder::mysql();
/// let sql = qb.insert("galaxies", record! { "id" => 3, "name" => "Milky Way" })?;
/// assert_eq!(sql, "INSERT INTO `galaxies` (`id`, `name`) VALUES (3, 'Milky Way')");
/// # Ok::<(), sqlforge::BuilderError>(())
/// ```
#[derive(Debug, Clone)]
pub struct QueryBuilder<Q: Quoting = MySqlQuoting> {
    dialect: Q,
    state: QueryState,
}

impl QueryBuilder<MySqlQuoting> {
    /// Create a builder using the MySQL reference dialect.
    pub fn mysql() -> Self {
        Self::new(MySqlQuoting)
    }
}

impl Default for QueryBuilder<MySqlQuoting> {
    fn default() -> Self {
        Self::mysql()
    }
}

impl<Q: Quoting> QueryBuilder<Q> {
    /// Create a builder with an explicit quoting dialect.
    pub fn new(dialect: Q) -> Self {
        Self {
            dialect,
            state: QueryState::new(),
        }
    }

    /// Read access to the accumulated state.
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Clear the accumulated table references and column values.
    pub fn reset(&mut self) -> &mut Self {
        self.state.reset();
        self
    }

    /// Set the target table.
    ///
    /// Absent sentinels (nothing, null, `false`, NaN, the empty string) are
    /// a no-op; anything that can never name a table is rejected before any
    /// state change.
    pub fn set_table(&mut self, table: impl Into<Value>) -> BuilderResult<&mut Self> {
        let table = table.into();
        match classify_table(&table) {
            TableClass::Present(name) => {
                let name = name.to_string();
                self.state.set_table(name);
                Ok(self)
            }
            TableClass::Absent => Ok(self),
            TableClass::Invalid => Err(BuilderError::invalid_table(table.describe())),
        }
    }

    /// Set a single column value.
    ///
    /// An absent value is a no-op; an unsupported value type is rejected.
    pub fn set(
        &mut self,
        column: impl Into<String>,
        value: impl Into<Value>,
    ) -> BuilderResult<&mut Self> {
        let column = column.into();
        let value = value.into();
        match classify_field(&value) {
            FieldClass::Scalar(_) => {
                let mut record = Record::new();
                record.insert(column, value);
                self.state.merge_columns(&record);
                Ok(self)
            }
            FieldClass::Absent => Ok(self),
            FieldClass::Invalid => Err(BuilderError::invalid_field(column, value.describe())),
        }
    }

    /// Merge a record (or a list of records, left to right) into the
    /// accumulated column values.
    ///
    /// All records are validated before any of them is merged.
    pub fn set_columns(&mut self, payload: impl Into<Value>) -> BuilderResult<&mut Self> {
        let payload = payload.into();
        match classify_payload(&payload) {
            PayloadClass::Single(record) => {
                validate_fields(record)?;
                self.state.merge_columns(&defined_fields(record));
                Ok(self)
            }
            PayloadClass::Batch(records) => {
                for record in &records {
                    validate_fields(record)?;
                }
                for record in records {
                    self.state.merge_columns(&defined_fields(record));
                }
                Ok(self)
            }
            PayloadClass::Absent => Ok(self),
            PayloadClass::Invalid => Err(BuilderError::invalid_payload(payload.describe())),
        }
    }

    /// Generate an `INSERT INTO ...` statement.
    ///
    /// `table` and `data` may each be absent (fall back to builder state).
    /// A list of records expands into one statement with one value group
    /// per record.
    pub fn insert(
        &mut self,
        table: impl Into<Value>,
        data: impl Into<Value>,
    ) -> BuilderResult<String> {
        self.insert_flagged(table, data, None, false)
    }

    /// [`QueryBuilder::insert`] with a raw trailing fragment.
    pub fn insert_suffixed(
        &mut self,
        table: impl Into<Value>,
        data: impl Into<Value>,
        suffix: &str,
    ) -> BuilderResult<String> {
        self.insert_flagged(table, data, Some(suffix), false)
    }

    /// Generate an `INSERT IGNORE INTO ...` statement.
    pub fn insert_ignore(
        &mut self,
        table: impl Into<Value>,
        data: impl Into<Value>,
    ) -> BuilderResult<String> {
        self.insert_flagged(table, data, None, true)
    }

    /// [`QueryBuilder::insert_ignore`] with a raw trailing fragment.
    pub fn insert_ignore_suffixed(
        &mut self,
        table: impl Into<Value>,
        data: impl Into<Value>,
        suffix: &str,
    ) -> BuilderResult<String> {
        self.insert_flagged(table, data, Some(suffix), true)
    }

    /// Generate a multi-row `INSERT`.
    ///
    /// Output is identical to passing the same list to
    /// [`QueryBuilder::insert`]; this entry point exists for callers that
    /// want the batch intent explicit.
    pub fn insert_batch(
        &mut self,
        table: impl Into<Value>,
        records: impl Into<Value>,
    ) -> BuilderResult<String> {
        self.insert_flagged(table, records, None, false)
    }

    /// The shared generation path behind every insert variant.
    ///
    /// Validation order: table shape, then payload shape, then every field
    /// of every record, then table fallback resolution. Only after all of
    /// that does the call mutate state (table set-if-unset) and render.
    pub fn insert_flagged(
        &mut self,
        table: impl Into<Value>,
        data: impl Into<Value>,
        suffix: Option<&str>,
        ignore: bool,
    ) -> BuilderResult<String> {
        let table = table.into();
        let data = data.into();

        let supplied_table = match classify_table(&table) {
            TableClass::Present(name) => Some(name.to_string()),
            TableClass::Absent => None,
            TableClass::Invalid => return Err(BuilderError::invalid_table(table.describe())),
        };

        enum Rows<'a> {
            Single(Option<&'a Record>),
            Batch(Vec<&'a Record>),
        }

        let rows = match classify_payload(&data) {
            PayloadClass::Single(record) => {
                validate_fields(record)?;
                Rows::Single(Some(record))
            }
            // A zero-row batch carries no columns of its own; treat it
            // like an absent payload so accumulated state still applies.
            PayloadClass::Batch(records) if records.is_empty() => Rows::Single(None),
            PayloadClass::Batch(records) => {
                for record in &records {
                    validate_fields(record)?;
                }
                Rows::Batch(records)
            }
            PayloadClass::Absent => Rows::Single(None),
            PayloadClass::Invalid => return Err(BuilderError::invalid_payload(data.describe())),
        };

        // Everything validated; resolve the target table. A supplied table
        // populates state only when no table was set before (set-if-unset).
        let target = match supplied_table {
            Some(name) => {
                if !self.state.has_table() {
                    self.state.set_table(name.clone());
                }
                name
            }
            None => self
                .state
                .last_table()
                .ok_or(BuilderError::MissingTable)?
                .to_string(),
        };

        let sql = match rows {
            Rows::Single(record) => {
                let mut working = self.state.columns().clone();
                if let Some(record) = record {
                    working.merge(&defined_fields(record));
                }
                self.render_single(&target, &working, suffix, ignore)
            }
            Rows::Batch(records) => self.render_batch(&target, &records, suffix, ignore),
        };

        tracing::debug!(sql = %sql, "generated statement");
        Ok(sql)
    }

    fn statement_head(&self, table: &str, columns: &[String], ignore: bool) -> String {
        let mut sql = String::with_capacity(64);
        sql.push_str(if ignore {
            "INSERT IGNORE INTO "
        } else {
            "INSERT INTO "
        });
        sql.push_str(&self.dialect.quote_identifier(table));
        sql.push_str(" (");
        sql.push_str(&columns.join(", "));
        sql.push_str(") VALUES ");
        sql
    }

    fn render_single(
        &self,
        table: &str,
        row: &Record,
        suffix: Option<&str>,
        ignore: bool,
    ) -> String {
        let mut columns = Vec::with_capacity(row.len());
        let mut values = Vec::with_capacity(row.len());
        for (column, value) in row.iter() {
            columns.push(self.dialect.quote_identifier(column));
            values.push(self.dialect.quote_literal(value));
        }

        let mut sql = self.statement_head(table, &columns, ignore);
        sql.push('(');
        sql.push_str(&values.join(", "));
        sql.push(')');
        append_suffix(&mut sql, suffix);
        sql
    }

    fn render_batch(
        &self,
        table: &str,
        records: &[&Record],
        suffix: Option<&str>,
        ignore: bool,
    ) -> String {
        // Columns come from the FIRST record only; later records render
        // positionally, so divergent key sets misalign silently. Known
        // contract, not corrected here.
        let columns: Vec<String> = defined_fields(records[0])
            .keys()
            .map(|c| self.dialect.quote_identifier(c))
            .collect();

        let mut sql = self.statement_head(table, &columns, ignore);
        for (i, record) in records.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push('(');
            let mut first = true;
            for (_, value) in record.iter() {
                if matches!(classify_field(value), FieldClass::Absent) {
                    continue;
                }
                if !first {
                    sql.push_str(", ");
                }
                sql.push_str(&self.dialect.quote_literal(value));
                first = false;
            }
            sql.push(')');
        }
        append_suffix(&mut sql, suffix);
        sql
    }
}

/// Reject a record containing any unrenderable field value.
fn validate_fields(record: &Record) -> BuilderResult<()> {
    for (column, value) in record.iter() {
        if matches!(classify_field(value), FieldClass::Invalid) {
            return Err(BuilderError::invalid_field(column, value.describe()));
        }
    }
    Ok(())
}

/// Copy of `record` without absent-valued fields ("no value supplied").
fn defined_fields(record: &Record) -> Record {
    record
        .iter()
        .filter(|(_, value)| !matches!(classify_field(value), FieldClass::Absent))
        .map(|(column, value)| (column.to_string(), value.clone()))
        .collect()
}

/// Append a raw caller-supplied trailing fragment after one space.
///
/// The fragment is never validated or escaped.
fn append_suffix(sql: &mut String, suffix: Option<&str>) {
    if let Some(suffix) = suffix {
        if !suffix.is_empty() {
            sql.push(' ');
            sql.push_str(suffix);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;

    #[test]
    fn insert_without_columns() {
        let mut qb = QueryBuilder::mysql();
        let sql = qb.insert("galaxies", Value::Absent).unwrap();
        assert_eq!(sql, "INSERT INTO `galaxies` () VALUES ()");
    }

    #[test]
    fn insert_single_record() {
        let mut qb = QueryBuilder::mysql();
        let sql = qb
            .insert(
                "galaxies",
                record! { "id" => 3, "name" => "Milky Way", "type" => "spiral" },
            )
            .unwrap();
        assert_eq!(
            sql,
            "INSERT INTO `galaxies` (`id`, `name`, `type`) VALUES (3, 'Milky Way', 'spiral')"
        );
    }

    #[test]
    fn chained_state_survives_generation() {
        let mut qb = QueryBuilder::mysql();
        qb.set_table("galaxies").unwrap();
        qb.set("id", 3).unwrap();

        let first = qb.insert(Value::Absent, Value::Absent).unwrap();
        let second = qb.insert(Value::Absent, Value::Absent).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "INSERT INTO `galaxies` (`id`) VALUES (3)");
    }

    #[test]
    fn suffix_appended_after_one_space() {
        let mut qb = QueryBuilder::mysql();
        let sql = qb
            .insert_suffixed("galaxies", record! { "id" => 3 }, "ON DUPLICATE KEY UPDATE id = id")
            .unwrap();
        assert_eq!(
            sql,
            "INSERT INTO `galaxies` (`id`) VALUES (3) ON DUPLICATE KEY UPDATE id = id"
        );
    }

    #[test]
    fn empty_suffix_appends_nothing() {
        let mut qb = QueryBuilder::mysql();
        let sql = qb.insert_suffixed("galaxies", record! { "id" => 3 }, "").unwrap();
        assert_eq!(sql, "INSERT INTO `galaxies` (`id`) VALUES (3)");
    }

    #[test]
    fn custom_dialect_is_honored() {
        struct AnsiQuoting;
        impl Quoting for AnsiQuoting {
            fn quote_identifier(&self, name: &str) -> String {
                format!("\"{name}\"")
            }
            fn quote_literal(&self, value: &Value) -> String {
                MySqlQuoting.quote_literal(value)
            }
        }

        let mut qb = QueryBuilder::new(AnsiQuoting);
        let sql = qb.insert("galaxies", record! { "id" => 3 }).unwrap();
        assert_eq!(sql, "INSERT INTO \"galaxies\" (\"id\") VALUES (3)");
    }

    #[test]
    fn absent_field_values_are_skipped() {
        let mut qb = QueryBuilder::mysql();
        let mut record = record! { "id" => 3 };
        record.insert("name", Value::Absent);
        let sql = qb.insert("galaxies", record).unwrap();
        assert_eq!(sql, "INSERT INTO `galaxies` (`id`) VALUES (3)");
    }
}
