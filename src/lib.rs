pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod options;
pub mod ui;
pub mod version;

pub use error::{FactQuery, Result, VersionError};
pub use options::{ResolvedOptions, VersionOptions};
pub use version::Version;
