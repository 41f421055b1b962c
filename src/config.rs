//! Repository configuration resolved once at startup.
//!
//! Values come from CLI options backed by environment variables (see `main.rs`),
//! optionally seeded from a `.env` file. Missing values fall back to empty strings,
//! which yields a degenerate but non-fatal configuration.

use std::path::PathBuf;

/// Environment variable holding the repository base URL.
pub const REPO_BASE_ENV_VAR: &str = "REPO_BASE";

/// Environment variable holding the branch path segment (e.g. `/branches/feature-x`).
pub const BRANCH_PATH_ENV_VAR: &str = "BRANCH_PATH";

/// Environment variable holding the local checkout root.
pub const LOCAL_REPO_PATH_ENV_VAR: &str = "LOCAL_REPO_PATH";

/// Environment variable overriding how many revisions are fetched.
pub const LOG_LIMIT_ENV_VAR: &str = "SVN_MERGE_LOG_LIMIT";

/// Number of revisions fetched from `svn log` by default.
pub const DEFAULT_LOG_LIMIT: usize = 10;

/// Which line of development a command operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Trunk,
    Branch,
}

/// Trunk/branch locations for one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub repo_base: String,
    pub branch_path: String,
    pub local_repo_path: String,
    pub log_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo_base: String::new(),
            branch_path: String::new(),
            local_repo_path: String::new(),
            log_limit: DEFAULT_LOG_LIMIT,
        }
    }
}

impl Config {
    pub fn new(
        repo_base: impl Into<String>,
        branch_path: impl Into<String>,
        local_repo_path: impl Into<String>,
    ) -> Self {
        Self {
            repo_base: repo_base.into(),
            branch_path: branch_path.into(),
            local_repo_path: local_repo_path.into(),
            log_limit: DEFAULT_LOG_LIMIT,
        }
    }

    pub fn with_log_limit(mut self, log_limit: usize) -> Self {
        self.log_limit = log_limit;
        self
    }

    /// Repository URL of trunk.
    pub fn trunk_url(&self) -> String {
        format!("{}/trunk", self.repo_base)
    }

    /// Repository URL of the tracked branch.
    pub fn branch_url(&self) -> String {
        format!("{}{}", self.repo_base, self.branch_path)
    }

    /// Local working copy of trunk.
    pub fn local_trunk_path(&self) -> PathBuf {
        PathBuf::from(format!("{}/trunk", self.local_repo_path))
    }

    /// Local working copy of the tracked branch.
    pub fn local_branch_path(&self) -> PathBuf {
        PathBuf::from(format!("{}{}", self.local_repo_path, self.branch_path))
    }

    /// Branch name as it appears in commit messages, used verbatim.
    pub fn branch_label(&self) -> &str {
        &self.branch_path
    }

    pub fn url(&self, side: Side) -> String {
        match side {
            Side::Trunk => self.trunk_url(),
            Side::Branch => self.branch_url(),
        }
    }

    pub fn local_path(&self, side: Side) -> PathBuf {
        match side {
            Side::Trunk => self.local_trunk_path(),
            Side::Branch => self.local_branch_path(),
        }
    }
}
