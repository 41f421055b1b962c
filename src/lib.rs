//! svn-merge - A CLI tool for merging between an SVN trunk and a tracked branch.
//!
//! # Overview
//!
//! svn-merge runs the merge in either direction, then lets the user pick one or
//! two recent revisions from the `svn log` history and turns them, together with
//! the merge direction and a task id, into a consistent commit message.

pub mod commit;
pub mod config;
pub mod error;
pub mod svn;
pub mod workflow;

// Re-export commonly used types
pub use commit::{Direction, Mode, SelectionResult, generate_commit_message};
pub use config::{Config, Side};
pub use error::{SvnError, WorkflowError};
pub use svn::{RevisionRecord, SvnExecutor, SystemSvn, parse_log};
pub use workflow::CommitOutcome;
