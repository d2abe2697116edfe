//! Quoting capability.
//!
//! The generator never hard-codes escaping rules; it delegates identifier
//! quoting and literal escaping to a [`Quoting`] implementation chosen per
//! builder instance. [`MySqlQuoting`] is the reference dialect: backtick
//! identifiers, single-quoted strings with the MySQL escape set, bare
//! numbers, lowercase `true`/`false`, uppercase `NULL`.

use crate::value::Value;

/// Dialect-specific identifier quoting and literal escaping.
pub trait Quoting {
    /// Wrap a table or column name in the dialect's identifier quotes.
    fn quote_identifier(&self, name: &str) -> String;

    /// Render a scalar value as a SQL literal.
    ///
    /// Only scalars reach this method; the builder validates field values
    /// before rendering.
    fn quote_literal(&self, value: &Value) -> String;
}

/// MySQL-flavored quoting: backtick identifiers and `\`-escaped strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlQuoting;

impl Quoting for MySqlQuoting {
    fn quote_identifier(&self, name: &str) -> String {
        let mut out = String::with_capacity(name.len() + 2);
        out.push('`');
        for ch in name.chars() {
            if ch == '`' {
                out.push_str("``");
            } else {
                out.push(ch);
            }
        }
        out.push('`');
        out
    }

    fn quote_literal(&self, value: &Value) -> String {
        match value {
            Value::Null => "NULL".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Text(s) => escape_string(s),
            // Non-scalars never reach the dialect; render NULL rather
            // than emit broken SQL.
            _ => "NULL".to_string(),
        }
    }
}

fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\0' => out.push_str("\\0"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x1a' => out.push_str("\\Z"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}
