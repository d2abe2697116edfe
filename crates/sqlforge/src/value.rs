//! Dynamic value model for builder arguments.
//!
//! Arguments to the builder are dynamically shaped: a table reference may be
//! a string, a sentinel meaning "nothing supplied", or junk; a data payload
//! may be a single record, a list of records, or junk. [`Value`] makes every
//! accepted and rejected shape representable so the classifiers in
//! [`crate::classify`] can be total over their input domain.

/// A dynamically typed argument value.
#[derive(Debug, Clone)]
pub enum Value {
    /// Nothing supplied at all.
    Absent,
    /// SQL NULL.
    Null,
    Bool(bool),
    Int(i64),
    /// May be NaN or infinite; the classifiers decide what that means.
    Float(f64),
    Text(String),
    /// A pattern/regex value. Never valid as a table, payload, or field.
    Pattern(regex::Regex),
    List(Vec<Value>),
    Record(Record),
}

impl Value {
    /// Short human-readable description of the value's shape, used in
    /// error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Absent => "nothing".to_string(),
            Self::Null => "null".to_string(),
            Self::Bool(b) => format!("boolean {b}"),
            Self::Int(n) => format!("number {n}"),
            Self::Float(f) if f.is_nan() => "NaN".to_string(),
            Self::Float(f) if f.is_infinite() => "infinite number".to_string(),
            Self::Float(f) => format!("number {f}"),
            Self::Text(s) => format!("string {s:?}"),
            Self::Pattern(re) => format!("pattern /{}/", re.as_str()),
            Self::List(_) => "an array".to_string(),
            Self::Record(_) => "an object".to_string(),
        }
    }
}

// Regex has no PartialEq; compare patterns textually. Floats compare by
// bit pattern so a state snapshot equals its clone even for odd values.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Absent, Self::Absent) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Record(a), Self::Record(b)) => a == b,
            _ => false,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Self::Float(f.into())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<regex::Regex> for Value {
    fn from(re: regex::Regex) -> Self {
        Self::Pattern(re)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                let mut record = Record::new();
                for (key, value) in map {
                    record.insert(key, Self::from(value));
                }
                Self::Record(record)
            }
        }
    }
}

/// An insertion-ordered column → value map.
///
/// Inserting an existing key overwrites the value in place; new keys append.
/// Iteration order drives column order in generated SQL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    entries: Vec<(String, Value)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a column value, overwriting in place if the column exists.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        let column = column.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == column) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((column, value)),
        }
    }

    /// Look up a column value.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == column)
            .map(|(_, v)| v)
    }

    /// Column names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Column/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merge another record into this one, preserving first-seen order
    /// for new columns.
    pub fn merge(&mut self, other: &Self) {
        for (column, value) in other.iter() {
            self.insert(column, value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}

/// Build a [`Record`] inline.
///
/// # Example
/// ```ignore
/// let galaxy = record! { "id" => 3, "name" => "Milky Way" };
/// ```
#[macro_export]
macro_rules! record {
    () => { $crate::Record::new() };
    ($($column:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::Record::new();
        $( record.insert($column, $crate::Value::from($value)); )+
        record
    }};
}
