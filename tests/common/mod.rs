// Helpers for building throwaway git repositories.
#![allow(dead_code)]

use git2::{Oid, Repository, RepositoryInitOptions, Signature};
use tempfile::TempDir;

pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Initialise an empty repository whose unborn HEAD points at `branch`
    pub fn init(branch: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = RepositoryInitOptions::new();
        opts.initial_head(branch);
        let repo = Repository::init_opts(dir.path(), &opts).unwrap();
        TestRepo { dir, repo }
    }

    /// Commit the current index on top of HEAD
    pub fn commit(&self, message: &str) -> Oid {
        let sig = Signature::now("Test Author", "test@example.com").unwrap();
        let tree_id = self.repo.index().unwrap().write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    pub fn tag_lightweight(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).unwrap();
        self.repo.tag_lightweight(name, &object, false).unwrap();
    }

    pub fn tag_annotated(&self, name: &str, oid: Oid) {
        let sig = Signature::now("Test Author", "test@example.com").unwrap();
        let object = self.repo.find_object(oid, None).unwrap();
        self.repo
            .tag(name, &object, &sig, &format!("release {}", name), false)
            .unwrap();
    }

    pub fn branch(&self, name: &str, oid: Oid) {
        let commit = self.repo.find_commit(oid).unwrap();
        self.repo.branch(name, &commit, false).unwrap();
    }

    pub fn checkout_branch(&self, name: &str) {
        self.repo.set_head(&format!("refs/heads/{}", name)).unwrap();
    }

    pub fn detach(&self, oid: Oid) {
        self.repo.set_head_detached(oid).unwrap();
    }
}
