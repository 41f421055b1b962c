//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use svn_merge::{SvnError, SvnExecutor};

/// Get the path to test fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Get the path to an `svn log` output fixture.
pub fn log_fixture(name: &str) -> PathBuf {
    fixtures_dir().join("logs").join(name)
}

/// Read a fixture file as a string.
pub fn read_fixture(path: PathBuf) -> String {
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {:?}: {}", path, e))
}

/// One call received by [`FakeSvn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvnCall {
    Update(PathBuf),
    Log(PathBuf, usize),
    PrintLog(PathBuf, usize),
    PrintRemoteLog(String, usize),
    Merge(PathBuf, String),
    Status(PathBuf),
    Commit(PathBuf, String),
}

/// In-memory `svn` that serves a canned log and records every call.
pub struct FakeSvn {
    log_output: String,
    fail_update: bool,
    fail_commit: bool,
    calls: RefCell<Vec<SvnCall>>,
}

impl FakeSvn {
    pub fn with_log(log_output: impl Into<String>) -> Self {
        Self {
            log_output: log_output.into(),
            fail_update: false,
            fail_commit: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing_update(mut self) -> Self {
        self.fail_update = true;
        self
    }

    pub fn failing_commit(mut self) -> Self {
        self.fail_commit = true;
        self
    }

    pub fn calls(&self) -> Vec<SvnCall> {
        self.calls.borrow().clone()
    }

    pub fn commits(&self) -> Vec<(PathBuf, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SvnCall::Commit(dir, message) => Some((dir, message)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: SvnCall) {
        self.calls.borrow_mut().push(call);
    }

    fn failure(operation: &str) -> SvnError {
        SvnError::NonZeroExit {
            operation: operation.to_string(),
            code: Some(1),
            stderr: format!("svn: E000000: simulated {operation} failure"),
        }
    }
}

impl SvnExecutor for FakeSvn {
    fn update(&self, path: &Path) -> Result<(), SvnError> {
        self.record(SvnCall::Update(path.to_path_buf()));
        if self.fail_update {
            return Err(Self::failure("update"));
        }
        Ok(())
    }

    fn log(&self, path: &Path, limit: usize) -> Result<String, SvnError> {
        self.record(SvnCall::Log(path.to_path_buf(), limit));
        Ok(self.log_output.clone())
    }

    fn print_log(&self, path: &Path, limit: usize) -> Result<(), SvnError> {
        self.record(SvnCall::PrintLog(path.to_path_buf(), limit));
        Ok(())
    }

    fn print_remote_log(&self, url: &str, limit: usize) -> Result<(), SvnError> {
        self.record(SvnCall::PrintRemoteLog(url.to_string(), limit));
        Ok(())
    }

    fn merge(&self, target_dir: &Path, source_url: &str) -> Result<(), SvnError> {
        self.record(SvnCall::Merge(target_dir.to_path_buf(), source_url.to_string()));
        Ok(())
    }

    fn status(&self, target_dir: &Path) -> Result<(), SvnError> {
        self.record(SvnCall::Status(target_dir.to_path_buf()));
        Ok(())
    }

    fn commit(&self, target_dir: &Path, message: &str) -> Result<(), SvnError> {
        self.record(SvnCall::Commit(target_dir.to_path_buf(), message.to_string()));
        if self.fail_commit {
            return Err(Self::failure("commit"));
        }
        Ok(())
    }
}
