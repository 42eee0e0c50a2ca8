//! The version engine: resolves repository facts once and formats them.

use crate::domain::{BranchContext, Granularity, TagVersion};
use crate::error::{FactQuery, Result, VersionError};
use crate::git::Repository;
use crate::options::{ResolvedOptions, VersionOptions};

/// A version derived from repository facts and formatting options.
///
/// Facts are queried eagerly in [`Version::new`]; afterwards the accessors
/// are pure string formatting over the held state. The only mutation is
/// through the `inc_*` methods, which never touch the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    options: ResolvedOptions,
    branch: String,
    commit: String,
    committish: String,
    tag: TagVersion,
}

impl Version {
    /// Resolve the facts of `repo` under the merged `opts`.
    ///
    /// Fragments are applied in order, later ones winning per field. Any
    /// failing query aborts construction.
    pub fn new<R>(repo: &R, opts: &[VersionOptions]) -> Result<Self>
    where
        R: Repository + ?Sized,
    {
        let options = ResolvedOptions::merge(opts);

        let branches = repo
            .branches()
            .map_err(|e| VersionError::provider(FactQuery::Branches, e))?;
        let commit = repo
            .commit()
            .map_err(|e| VersionError::provider(FactQuery::Commit, e))?;
        let committish = repo
            .committish()
            .map_err(|e| VersionError::provider(FactQuery::Committish, e))?;
        let raw_tag = repo
            .tag()
            .map_err(|e| VersionError::provider(FactQuery::Tag, e))?;

        let branch = match branches.into_iter().next() {
            Some(branch) => branch,
            None => match &options.default_branch {
                Some(default_branch) => {
                    tracing::debug!(branch = %default_branch, "no branch at HEAD, using default");
                    default_branch.clone()
                }
                None => return Err(VersionError::UndeterminedBranch),
            },
        };

        let tag = TagVersion::parse(&raw_tag)?;

        tracing::debug!(
            branch = %branch,
            commit = %commit,
            committish = %committish,
            tag = %tag,
            master = %options.master,
            "resolved repository facts"
        );

        Ok(Version {
            options,
            branch,
            commit,
            committish,
            tag,
        })
    }

    /// Major version, e.g. `v1`
    pub fn major(&self) -> String {
        self.format(Granularity::Major)
    }

    /// Minor version, e.g. `v1.2`
    pub fn minor(&self) -> String {
        self.format(Granularity::Minor)
    }

    /// Patch version, e.g. `v1.2.3`
    pub fn patch(&self) -> String {
        self.format(Granularity::Patch)
    }

    /// Format the version at the given granularity.
    ///
    /// Off the release branch, without `semver`, this is just the branch
    /// name. Otherwise it is the numeric version followed by an optional
    /// `-<branch>{+|-}<committish>` block.
    pub fn format(&self, granularity: Granularity) -> String {
        let context = BranchContext::new(self.branch.as_str(), &self.options.master);
        if context.reports_name_only(self.options.semver) {
            return context.name;
        }

        let level = if self.options.full {
            Granularity::Patch
        } else {
            granularity
        };
        let mut version = self.tag.render(level);

        if self.options.branch || self.options.revision {
            version.push('-');
        }
        if self.options.branch {
            version.push_str(&self.branch);
        }
        if self.options.revision {
            version.push(if self.options.docker { '-' } else { '+' });
            version.push_str(&self.committish);
        }

        version
    }

    /// Increment major, resetting minor and patch
    pub fn inc_major(&mut self) {
        self.tag.bump(Granularity::Major);
    }

    /// Increment minor, resetting patch
    pub fn inc_minor(&mut self) {
        self.tag.bump(Granularity::Minor);
    }

    /// Increment patch
    pub fn inc_patch(&mut self) {
        self.tag.bump(Granularity::Patch);
    }

    /// Increment the component at `granularity`
    pub fn increment(&mut self, granularity: Granularity) {
        self.tag.bump(granularity);
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn commit(&self) -> &str {
        &self.commit
    }

    pub fn committish(&self) -> &str {
        &self.committish
    }

    pub fn tag(&self) -> TagVersion {
        self.tag
    }

    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;

    const COMMIT: &str = "d28fbcea1e82ef9bd117fa07a7664032df8437b1";

    fn fixture() -> MockRepository {
        MockRepository::with_facts("master", COMMIT, "d28fbce", "v1.2.3")
    }

    #[test]
    fn test_default_options() {
        let v = Version::new(&fixture(), &[]).unwrap();
        assert_eq!(v.major(), "v1");
        assert_eq!(v.minor(), "v1.2");
        assert_eq!(v.patch(), "v1.2.3");
        assert_eq!(v.branch(), "master");
        assert_eq!(v.commit(), COMMIT);
        assert_eq!(v.committish(), "d28fbce");
        assert_eq!(v.tag(), TagVersion::new(1, 2, 3));
    }

    #[test]
    fn test_options_reflect_merged_fragments() {
        let opts = [
            VersionOptions::new().with_master("main").with_branch(true),
            VersionOptions::new().with_branch(false).with_default_branch(""),
        ];
        let v = Version::new(&fixture(), &opts).unwrap();
        assert_eq!(v.options().master, "main");
        assert!(!v.options().branch);
        assert_eq!(v.options().default_branch, None);
    }

    #[test]
    fn test_accessors_are_idempotent() {
        let opts = [VersionOptions::new().with_branch(true).with_revision(true)];
        let v = Version::new(&fixture(), &opts).unwrap();
        assert_eq!(v.patch(), v.patch());
        assert_eq!(v.patch(), "v1.2.3-master+d28fbce");
    }

    #[test]
    fn test_revision_only_suffix() {
        let opts = [VersionOptions::new().with_revision(true)];
        let v = Version::new(&fixture(), &opts).unwrap();
        assert_eq!(v.patch(), "v1.2.3-+d28fbce");

        let opts = [VersionOptions::new().with_revision(true).with_docker(true)];
        let v = Version::new(&fixture(), &opts).unwrap();
        assert_eq!(v.patch(), "v1.2.3--d28fbce");
    }

    #[test]
    fn test_docker_without_revision_has_no_effect() {
        let opts = [VersionOptions::new().with_branch(true).with_docker(true)];
        let v = Version::new(&fixture(), &opts).unwrap();
        assert_eq!(v.minor(), "v1.2-master");
    }

    #[test]
    fn test_full_prints_stored_components() {
        let opts = [VersionOptions::new().with_full(true)];
        let v = Version::new(&fixture(), &opts).unwrap();
        assert_eq!(v.major(), "v1.2.3");
        assert_eq!(v.minor(), "v1.2.3");
        assert_eq!(v.patch(), "v1.2.3");
    }

    #[test]
    fn test_increment_dispatch() {
        let mut v = Version::new(&fixture(), &[]).unwrap();
        v.increment(Granularity::Minor);
        assert_eq!(v.tag(), TagVersion::new(1, 3, 0));
        v.increment(Granularity::Patch);
        assert_eq!(v.tag(), TagVersion::new(1, 3, 1));
        v.increment(Granularity::Major);
        assert_eq!(v.tag(), TagVersion::new(2, 0, 0));
    }

    #[test]
    fn test_increment_does_not_requery() {
        let mut repo = fixture();
        let mut v = Version::new(&repo, &[]).unwrap();
        repo.set_tag("v9.9.9");
        v.inc_patch();
        assert_eq!(v.patch(), "v1.2.4");
    }
}
