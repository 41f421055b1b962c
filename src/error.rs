//! Error types for svn-merge modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from invoking the external `svn` client.
#[derive(Error, Debug)]
pub enum SvnError {
    #[error("Subversion CLI (svn) not found. Install a Subversion command-line client and make sure it is on PATH")]
    NotInstalled,

    #[error("Failed to change to directory {}: directory does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Failed to run svn {operation}: {source}")]
    SpawnFailed {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("svn {operation} failed with {}{}",
             code.map_or("unknown status".to_string(), |c| format!("exit code {c}")),
             if stderr.is_empty() { String::new() } else { format!(": {stderr}") })]
    NonZeroExit {
        operation: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// Errors from the interactive and merge workflows.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("No revisions found in {}", .0.display())]
    NoRevisions(PathBuf),

    #[error("Failed to get revisions: {0}")]
    HistoryFailed(#[source] SvnError),

    #[error(transparent)]
    Svn(#[from] SvnError),

    #[error("Failed to read input: {0}")]
    Input(#[source] std::io::Error),

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}
