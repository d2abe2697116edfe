//! # sqlforge
//!
//! A fluent, dialect-pluggable SQL statement builder.
//!
//! ## Features
//!
//! - **Fluent accumulation**: set a table and column values across calls,
//!   generate many statements from the same state, reset explicitly
//! - **Total input classification**: every argument shape is accepted,
//!   treated as "nothing supplied", or rejected with a typed error before
//!   any state change
//! - **Batch expansion**: a list of records becomes one statement with one
//!   value group per record
//! - **Pluggable quoting**: identifier quoting and literal escaping live
//!   behind the [`Quoting`] trait; [`MySqlQuoting`] is the reference dialect
//! - **Raw suffixes**: trailing fragments (upsert clauses and the like) are
//!   appended verbatim, caller's responsibility
//!
//! ## Usage
//!
//! ```ignore
//! use sqlforge::{QueryBuilder, record};
//!
//! let mut qb = QueryBuilder::mysql();
//!
//! let sql = qb.insert(
//!     "galaxies",
//!     record! { "id" => 3, "name" => "Milky Way", "type" => "spiral" },
//! )?;
//! assert_eq!(
//!     sql,
//!     "INSERT INTO `galaxies` (`id`, `name`, `type`) VALUES (3, 'Milky Way', 'spiral')"
//! );
//!
//! // State persists until reset:
//! qb.set_table("galaxies")?;
//! qb.set("type", "spiral")?;
//! let sql = qb.insert_ignore(sqlforge::Value::Absent, sqlforge::Value::Absent)?;
//! qb.reset();
//! # Ok::<(), sqlforge::BuilderError>(())
//! ```

pub mod builder;
pub mod classify;
pub mod client;
pub mod dialect;
pub mod error;
pub mod state;
pub mod value;

pub use builder::QueryBuilder;
pub use classify::{FieldClass, PayloadClass, TableClass, classify_field, classify_payload, classify_table};
pub use client::{ConnectionStrategy, Driver, Executor, PooledExecutor};
pub use dialect::{MySqlQuoting, Quoting};
pub use error::{BuilderError, BuilderResult};
pub use state::QueryState;
pub use value::{Record, Value};
