//! Command-line front end support

pub mod orchestration;

pub use orchestration::{derive_version, run_version_workflow, VersionArgs};
