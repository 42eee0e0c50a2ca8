use std::fmt;

use thiserror::Error;

use crate::git::ProviderError;

/// The four repository queries the version engine depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactQuery {
    Branches,
    Commit,
    Committish,
    Tag,
}

impl fmt::Display for FactQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FactQuery::Branches => "branches",
            FactQuery::Commit => "commit",
            FactQuery::Committish => "committish",
            FactQuery::Tag => "tag",
        };
        f.write_str(name)
    }
}

/// Unified error type for genms-version operations
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("could not resolve {query}: {source}")]
    Provider {
        query: FactQuery,
        #[source]
        source: ProviderError,
    },

    #[error("undetermined branch: no branch points at HEAD and no default branch is set")]
    UndeterminedBranch,

    #[error("malformed tag '{0}': expected v<major>.<minor>.<patch>")]
    MalformedTag(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in genms-version
pub type Result<T> = std::result::Result<T, VersionError>;

impl VersionError {
    /// Wrap a provider failure with the query that produced it
    pub fn provider(query: FactQuery, source: ProviderError) -> Self {
        VersionError::Provider { query, source }
    }

    /// Create a malformed tag error
    pub fn malformed_tag(tag: impl Into<String>) -> Self {
        VersionError::MalformedTag(tag.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionError::Config(msg.into())
    }
}
