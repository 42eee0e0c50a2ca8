//! Option fragments and their left-to-right fold into resolved options.

use serde::{Deserialize, Serialize};

/// Release branch name used when no fragment overrides it.
pub const DEFAULT_MASTER: &str = "master";

/// A partial set of formatting options.
///
/// Every field is optional; `None` means "leave whatever an earlier fragment
/// set". Fragments deserialize straight from a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VersionOptions {
    /// Append the branch name after the version
    #[serde(default)]
    pub branch: Option<bool>,

    /// Use `-` instead of `+` before the commit hash
    #[serde(default)]
    pub docker: Option<bool>,

    /// Always print major.minor.patch
    #[serde(default)]
    pub full: Option<bool>,

    /// Append the abbreviated commit hash
    #[serde(default)]
    pub revision: Option<bool>,

    /// Format as semver even off the release branch
    #[serde(default)]
    pub semver: Option<bool>,

    /// Name of the release branch
    #[serde(default)]
    pub master: Option<String>,

    /// Branch to assume when none points at HEAD
    #[serde(default)]
    pub default_branch: Option<String>,
}

impl VersionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_branch(mut self, branch: bool) -> Self {
        self.branch = Some(branch);
        self
    }

    pub fn with_docker(mut self, docker: bool) -> Self {
        self.docker = Some(docker);
        self
    }

    pub fn with_full(mut self, full: bool) -> Self {
        self.full = Some(full);
        self
    }

    pub fn with_revision(mut self, revision: bool) -> Self {
        self.revision = Some(revision);
        self
    }

    pub fn with_semver(mut self, semver: bool) -> Self {
        self.semver = Some(semver);
        self
    }

    pub fn with_master(mut self, master: impl Into<String>) -> Self {
        self.master = Some(master.into());
        self
    }

    pub fn with_default_branch(mut self, default_branch: impl Into<String>) -> Self {
        self.default_branch = Some(default_branch.into());
        self
    }
}

/// The effective options after every fragment has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub branch: bool,
    pub docker: bool,
    pub full: bool,
    pub revision: bool,
    pub semver: bool,
    pub master: String,
    pub default_branch: Option<String>,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        ResolvedOptions {
            branch: false,
            docker: false,
            full: false,
            revision: false,
            semver: false,
            master: DEFAULT_MASTER.to_string(),
            default_branch: None,
        }
    }
}

impl ResolvedOptions {
    /// Fold fragments left to right; later fragments win field by field.
    pub fn merge<'a, I>(fragments: I) -> Self
    where
        I: IntoIterator<Item = &'a VersionOptions>,
    {
        fragments
            .into_iter()
            .fold(ResolvedOptions::default(), |mut acc, fragment| {
                acc.apply(fragment);
                acc
            })
    }

    /// Overlay a single fragment onto these options
    pub fn apply(&mut self, fragment: &VersionOptions) {
        if let Some(branch) = fragment.branch {
            self.branch = branch;
        }
        if let Some(docker) = fragment.docker {
            self.docker = docker;
        }
        if let Some(full) = fragment.full {
            self.full = full;
        }
        if let Some(revision) = fragment.revision {
            self.revision = revision;
        }
        if let Some(semver) = fragment.semver {
            self.semver = semver;
        }
        if let Some(master) = &fragment.master {
            self.master = master.clone();
        }
        // an empty default branch never clears a configured one
        if let Some(default_branch) = fragment.default_branch.as_ref().filter(|b| !b.is_empty()) {
            self.default_branch = Some(default_branch.clone());
        }
    }
}
