//! Repository facts abstraction layer
//!
//! This module provides a trait-based abstraction over the handful of git
//! queries a version derivation needs, allowing a real repository and a
//! mock implementation to be used interchangeably.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations are:
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: a mock implementation for testing
//!
//! # Usage
//!
//! Code should depend on the [Repository] trait rather than concrete
//! implementations.
//!
//! ```rust
//! # use genms_version::git::{ProviderError, Repository};
//! # fn example<R: Repository>(repo: &R) -> Result<(), ProviderError> {
//! let tag = repo.tag()?;
//! let short = repo.committish()?;
//! println!("{} at {}", tag, short);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use thiserror::Error;

/// Failure of a single repository query
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("no tag is reachable from HEAD")]
    NoTag,

    #[error("{0}")]
    Unavailable(String),
}

impl ProviderError {
    /// Create an error for a query that cannot be answered
    pub fn unavailable(msg: impl Into<String>) -> Self {
        ProviderError::Unavailable(msg.into())
    }
}

/// The repository facts a version is derived from
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` to allow safe sharing across threads.
///
/// ## Implementations
///
/// - [Git2Repository](repository::Git2Repository): Real Git implementation using the `git2` crate
/// - [MockRepository](mock::MockRepository): Test implementation with configurable answers
pub trait Repository: Send + Sync {
    /// Branches pointing at the current commit
    ///
    /// The branch HEAD is attached to, if any, comes first. An empty list
    /// means the branch cannot be determined (e.g. a detached checkout).
    fn branches(&self) -> Result<Vec<String>, ProviderError>;

    /// Full hex identifier of the HEAD commit
    fn commit(&self) -> Result<String, ProviderError>;

    /// Abbreviated identifier of the HEAD commit
    fn committish(&self) -> Result<String, ProviderError>;

    /// Most recent tag reachable from HEAD
    ///
    /// Equivalent to `git describe --tags --abbrev=0`. The tag is returned
    /// verbatim; validating its shape is the caller's job.
    fn tag(&self) -> Result<String, ProviderError>;
}
