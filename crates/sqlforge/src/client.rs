//! Executor boundary contracts.
//!
//! The builder's only product is a statement string; executing it belongs to
//! a driver layer behind these traits. Connection strategies (single
//! connection, pooled, clustered) are alternative implementations of one
//! capability interface selected by explicit configuration, not subclasses
//! of a shared base. The crate ships no driver; it defines the seam drivers
//! plug into and the contract that the generated string reaches
//! [`Executor::execute`] unmodified.

use crate::error::BuilderResult;
use serde::{Deserialize, Serialize};

/// Connection strategy, supplied as an explicit configuration value.
///
/// The recognized options are enumerated here; nothing is read from
/// process-wide state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum ConnectionStrategy {
    /// One dedicated connection.
    #[default]
    Single,
    /// A fixed-size connection pool.
    Pool { max_size: usize },
    /// A set of nodes with driver-side selection.
    Cluster { nodes: Vec<String> },
}

/// A statement executor supplied by a driver.
pub trait Executor: Send {
    /// Establish the underlying connection(s).
    fn connect(&mut self) -> impl std::future::Future<Output = BuilderResult<()>> + Send;

    /// Execute a generated statement and return the affected row count.
    ///
    /// Implementations must consume `sql` exactly as produced by the
    /// builder, without rewriting.
    fn execute(&mut self, sql: &str) -> impl std::future::Future<Output = BuilderResult<u64>> + Send;

    /// Tear down the underlying connection(s).
    fn disconnect(&mut self) -> impl std::future::Future<Output = BuilderResult<()>> + Send;
}

/// A pooled executor that checks connections in and out.
pub trait PooledExecutor: Executor {
    /// Check a connection out of the pool.
    fn acquire(&mut self) -> impl std::future::Future<Output = BuilderResult<()>> + Send;

    /// Return the checked-out connection to the pool.
    fn release(&mut self);
}

/// Factory seam: a driver turns a [`ConnectionStrategy`] into the
/// strategy-appropriate executor.
pub trait Driver {
    type Conn: Executor;

    fn open(&self, strategy: &ConnectionStrategy) -> BuilderResult<Self::Conn>;
}
