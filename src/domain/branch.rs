/// The branch a version is being derived on, relative to the release branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub name: String,
    pub is_release: bool,
}

impl BranchContext {
    /// Create a branch context against the configured release branch name
    pub fn new(name: impl Into<String>, master: &str) -> Self {
        let name = name.into();
        let is_release = name == master;

        BranchContext { name, is_release }
    }

    /// Whether the version should collapse to the bare branch name
    ///
    /// Off the release branch only the branch name is reported, unless the
    /// caller explicitly asked for semver output.
    pub fn reports_name_only(&self, semver: bool) -> bool {
        !self.is_release && !semver
    }
}
