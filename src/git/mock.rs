use crate::error::FactQuery;
use crate::git::{ProviderError, Repository};
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    branches: Vec<String>,
    commit: String,
    committish: String,
    tag: String,
    failures: HashMap<FactQuery, String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock answering every query from the given facts
    pub fn with_facts(
        branch: impl Into<String>,
        commit: impl Into<String>,
        committish: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        MockRepository {
            branches: vec![branch.into()],
            commit: commit.into(),
            committish: committish.into(),
            tag: tag.into(),
            failures: HashMap::new(),
        }
    }

    /// Replace the branches pointing at HEAD
    pub fn set_branches<I, S>(&mut self, branches: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.branches = branches.into_iter().map(Into::into).collect();
    }

    /// Set the full HEAD commit id
    pub fn set_commit(&mut self, commit: impl Into<String>) {
        self.commit = commit.into();
    }

    /// Set the abbreviated HEAD commit id
    pub fn set_committish(&mut self, committish: impl Into<String>) {
        self.committish = committish.into();
    }

    /// Set the most recent tag
    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    /// Make a query fail with the given message
    pub fn fail(&mut self, query: FactQuery, message: impl Into<String>) {
        self.failures.insert(query, message.into());
    }

    fn answer(&self, query: FactQuery, value: &str) -> Result<String, ProviderError> {
        match self.failures.get(&query) {
            Some(message) => Err(ProviderError::unavailable(message.clone())),
            None => Ok(value.to_string()),
        }
    }
}

impl Repository for MockRepository {
    fn branches(&self) -> Result<Vec<String>, ProviderError> {
        match self.failures.get(&FactQuery::Branches) {
            Some(message) => Err(ProviderError::unavailable(message.clone())),
            None => Ok(self.branches.clone()),
        }
    }

    fn commit(&self) -> Result<String, ProviderError> {
        self.answer(FactQuery::Commit, &self.commit)
    }

    fn committish(&self) -> Result<String, ProviderError> {
        self.answer(FactQuery::Committish, &self.committish)
    }

    fn tag(&self) -> Result<String, ProviderError> {
        self.answer(FactQuery::Tag, &self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_facts() {
        let repo = MockRepository::with_facts("master", "d28fbcea", "d28fbce", "v1.2.3");

        assert_eq!(repo.branches().unwrap(), vec!["master".to_string()]);
        assert_eq!(repo.commit().unwrap(), "d28fbcea");
        assert_eq!(repo.committish().unwrap(), "d28fbce");
        assert_eq!(repo.tag().unwrap(), "v1.2.3");
    }

    #[test]
    fn test_mock_repository_failures() {
        let mut repo = MockRepository::with_facts("master", "d28fbcea", "d28fbce", "v1.2.3");
        repo.fail(FactQuery::Tag, "no tags");

        assert!(repo.commit().is_ok());
        let err = repo.tag().unwrap_err();
        assert_eq!(err.to_string(), "no tags");
    }

    #[test]
    fn test_mock_repository_default() {
        let mut repo = MockRepository::new();
        assert!(repo.branches().unwrap().is_empty());
        assert_eq!(repo.commit().unwrap(), "");

        repo.set_branches(["develop", "feature"]);
        repo.set_commit("0123456789abcdef");
        repo.set_committish("0123456");
        repo.set_tag("v0.1.0");
        assert_eq!(repo.branches().unwrap(), vec!["develop", "feature"]);
        assert_eq!(repo.commit().unwrap(), "0123456789abcdef");
        assert_eq!(repo.committish().unwrap(), "0123456");
        assert_eq!(repo.tag().unwrap(), "v0.1.0");
    }
}
