//! Main version workflow orchestration logic
//!
//! This module holds the pipeline the binary runs, kept apart from clap so
//! it can be driven programmatically and tested without spawning a process.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config;
use crate::domain::Granularity;
use crate::git::{Git2Repository, Repository};
use crate::options::VersionOptions;
use crate::version::Version;

/// Arguments for the version workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionArgs {
    /// Repository to inspect
    pub path: PathBuf,

    /// Path to custom config file
    pub config_path: Option<PathBuf>,

    /// Level the version is printed at
    pub granularity: Granularity,

    /// Bump the version at `granularity` before printing
    pub increment: bool,

    pub branch: bool,
    pub docker: bool,
    pub full: bool,
    pub revision: bool,
    pub semver: bool,

    /// Release branch override
    pub master: Option<String>,

    /// Branch to fall back on when none points at HEAD
    pub default_branch: Option<String>,
}

impl Default for VersionArgs {
    fn default() -> Self {
        VersionArgs {
            path: PathBuf::from("."),
            config_path: None,
            granularity: Granularity::Patch,
            increment: false,
            branch: false,
            docker: false,
            full: false,
            revision: false,
            semver: false,
            master: None,
            default_branch: None,
        }
    }
}

impl VersionArgs {
    /// The option fragment contributed by command-line flags.
    ///
    /// An unset boolean flag cannot be told apart from `false`, so only flags
    /// that were given override earlier fragments. A given `--master` always
    /// overrides, even when empty.
    pub fn flag_options(&self) -> VersionOptions {
        VersionOptions {
            branch: self.branch.then_some(true),
            docker: self.docker.then_some(true),
            full: self.full.then_some(true),
            revision: self.revision.then_some(true),
            semver: self.semver.then_some(true),
            master: self.master.clone(),
            default_branch: self.default_branch.clone().filter(|b| !b.is_empty()),
        }
    }
}

/// Derive the version string for `repo`.
///
/// Constructs the engine from `fragments`, optionally bumps it, and formats
/// it at `granularity`.
pub fn derive_version<R>(
    repo: &R,
    fragments: &[VersionOptions],
    granularity: Granularity,
    increment: bool,
) -> crate::Result<String>
where
    R: Repository + ?Sized,
{
    let mut version = Version::new(repo, fragments)?;
    if increment {
        version.increment(granularity);
        tracing::debug!(?granularity, tag = %version.tag(), "incremented version");
    }
    Ok(version.format(granularity))
}

/// Main version workflow
///
/// 1. Load the config file fragment
/// 2. Open the git repository
/// 3. Merge config and flag fragments, resolve facts
/// 4. Optionally increment, then format
pub fn run_version_workflow(args: &VersionArgs) -> Result<String> {
    let file_options =
        config::load_config(args.config_path.as_deref()).context("could not load config")?;

    let repo = Git2Repository::open(&args.path).context("could not open repo")?;

    let fragments = [file_options, args.flag_options()];
    derive_version(&repo, &fragments, args.granularity, args.increment)
        .context("problem with repo")
}
