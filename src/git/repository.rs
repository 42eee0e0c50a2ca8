use crate::git::ProviderError;
use git2::{BranchType, DescribeFormatOptions, DescribeOptions, ErrorClass, ErrorCode};
use git2::{Repository as Git2Repo, Oid};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Mutex<Git2Repo>,
}

impl Git2Repository {
    /// Open or discover a git repository at or above `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ProviderError> {
        let repo = Git2Repo::discover(path)?;
        tracing::debug!(path = %repo.path().display(), "opened repository");

        Ok(Git2Repository::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository {
            repo: Mutex::new(repo),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Git2Repo>, ProviderError> {
        self.repo
            .lock()
            .map_err(|_| ProviderError::unavailable("repository lock poisoned"))
    }

    fn head_oid(repo: &Git2Repo) -> Result<Oid, ProviderError> {
        Ok(repo.head()?.peel_to_commit()?.id())
    }
}

impl super::Repository for Git2Repository {
    fn branches(&self) -> Result<Vec<String>, ProviderError> {
        let repo = self.lock()?;
        let head = repo.head()?;
        let head_oid = head.peel_to_commit()?.id();

        let mut names: Vec<String> = Vec::new();
        let mut push = |name: &str| {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        };

        if head.is_branch() {
            if let Some(name) = head.shorthand() {
                push(name);
            }
        }

        for entry in repo.branches(Some(BranchType::Local))? {
            let (branch, _) = entry?;
            if branch.get().target() != Some(head_oid) {
                continue;
            }
            if let Some(name) = branch.name()? {
                push(name);
            }
        }

        // remote-tracking branches count too, which covers detached CI checkouts
        for entry in repo.branches(Some(BranchType::Remote))? {
            let (branch, _) = entry?;
            if branch.get().target() != Some(head_oid) {
                continue;
            }
            let Some(full_name) = branch.name()? else {
                continue;
            };
            match full_name.split_once('/') {
                Some((_, "HEAD")) | None => {}
                Some((_, name)) => push(name),
            }
        }

        Ok(names)
    }

    fn commit(&self) -> Result<String, ProviderError> {
        let repo = self.lock()?;
        Ok(Self::head_oid(&repo)?.to_string())
    }

    fn committish(&self) -> Result<String, ProviderError> {
        let repo = self.lock()?;
        let commit = repo.head()?.peel_to_commit()?;
        let short = commit.as_object().short_id()?;

        short
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ProviderError::unavailable("abbreviated commit id is not valid UTF-8"))
    }

    fn tag(&self) -> Result<String, ProviderError> {
        let repo = self.lock()?;

        let mut options = DescribeOptions::new();
        options.describe_tags();

        let describe = match repo.describe(&options) {
            Ok(describe) => describe,
            // libgit2 reports "nothing to describe" as a generic describe-class error
            Err(e) if e.code() == ErrorCode::NotFound || e.class() == ErrorClass::Describe => {
                return Err(ProviderError::NoTag)
            }
            Err(e) => return Err(e.into()),
        };

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);
        let tag = describe.format(Some(&format))?;

        Ok(tag)
    }
}
