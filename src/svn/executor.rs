//! Invocations of the external `svn` client.
//!
//! All operations use `std::process::Command` to shell out to the system `svn`
//! binary, inheriting the user's existing credentials and config. Commands that
//! modify a working copy stream their output straight to the terminal; only
//! `svn log` is captured, so it can be parsed.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::SvnError;

/// Boundary to the Subversion client.
///
/// This abstraction allows mocking the `svn` subprocess in tests.
#[cfg_attr(test, mockall::automock)]
pub trait SvnExecutor {
    /// `svn update <path>`.
    fn update(&self, path: &Path) -> Result<(), SvnError>;

    /// `svn log -l <limit>` run inside `path`, returning the captured output.
    fn log(&self, path: &Path, limit: usize) -> Result<String, SvnError>;

    /// `svn log -l <limit> --verbose` run inside `path`.
    fn print_log(&self, path: &Path, limit: usize) -> Result<(), SvnError>;

    /// `svn log -l <limit> --verbose <url>` against the repository itself.
    fn print_remote_log(&self, url: &str, limit: usize) -> Result<(), SvnError>;

    /// `svn merge <source_url>` run inside `target_dir`.
    fn merge(&self, target_dir: &Path, source_url: &str) -> Result<(), SvnError>;

    /// `svn status` run inside `target_dir`.
    fn status(&self, target_dir: &Path) -> Result<(), SvnError>;

    /// `svn commit -m <message>` run inside `target_dir`.
    fn commit(&self, target_dir: &Path, message: &str) -> Result<(), SvnError>;
}

/// Executor that calls the real `svn` CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSvn;

impl SvnExecutor for SystemSvn {
    fn update(&self, path: &Path) -> Result<(), SvnError> {
        let path_arg = path.to_string_lossy();
        run_svn_streaming(&["update", &path_arg], None, "update")
    }

    fn log(&self, path: &Path, limit: usize) -> Result<String, SvnError> {
        let limit = limit.to_string();
        run_svn_captured(&["log", "-l", &limit], Some(path), "log")
    }

    fn print_log(&self, path: &Path, limit: usize) -> Result<(), SvnError> {
        let limit = limit.to_string();
        run_svn_streaming(&["log", "-l", &limit, "--verbose"], Some(path), "log")
    }

    fn print_remote_log(&self, url: &str, limit: usize) -> Result<(), SvnError> {
        let limit = limit.to_string();
        run_svn_streaming(&["log", "-l", &limit, "--verbose", url], None, "log")
    }

    fn merge(&self, target_dir: &Path, source_url: &str) -> Result<(), SvnError> {
        run_svn_streaming(&["merge", source_url], Some(target_dir), "merge")
    }

    fn status(&self, target_dir: &Path) -> Result<(), SvnError> {
        run_svn_streaming(&["status"], Some(target_dir), "status")
    }

    fn commit(&self, target_dir: &Path, message: &str) -> Result<(), SvnError> {
        run_svn_streaming(&["commit", "-m", message], Some(target_dir), "commit")
    }
}

/// Check that the Subversion CLI is installed and accessible.
///
/// Uses the `which` crate for cross-platform executable detection.
pub fn check_svn_installed() -> Result<(), SvnError> {
    which::which("svn").map_err(|_| SvnError::NotInstalled)?;
    Ok(())
}

/// Build an `svn` command, rejecting a working directory that does not exist
/// before anything is spawned.
fn svn_command(args: &[&str], working_dir: Option<&Path>) -> Result<Command, SvnError> {
    let mut command = Command::new("svn");
    command.args(args);

    if let Some(dir) = working_dir {
        if !dir.is_dir() {
            return Err(SvnError::DirectoryNotFound(dir.to_path_buf()));
        }
        command.current_dir(dir);
    }

    debug!("Running svn {} (cwd: {:?})", args.join(" "), working_dir);
    Ok(command)
}

/// Run svn with stdout/stderr inherited from this process.
fn run_svn_streaming(
    args: &[&str],
    working_dir: Option<&Path>,
    operation: &str,
) -> Result<(), SvnError> {
    let status = svn_command(args, working_dir)?
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| SvnError::SpawnFailed {
            operation: operation.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(SvnError::NonZeroExit {
            operation: operation.to_string(),
            code: status.code(),
            stderr: String::new(),
        });
    }

    Ok(())
}

/// Run svn and return its stdout.
fn run_svn_captured(
    args: &[&str],
    working_dir: Option<&Path>,
    operation: &str,
) -> Result<String, SvnError> {
    let output = svn_command(args, working_dir)?
        .output()
        .map_err(|source| SvnError::SpawnFailed {
            operation: operation.to_string(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(SvnError::NonZeroExit {
            operation: operation.to_string(),
            code: output.status.code(),
            stderr,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
