//! Orchestration of the svn-merge commands.
//!
//! Sequences history fetching, revision selection and message generation with
//! the external `svn` client, and gates the commit behind a confirmation.

pub mod history;
pub mod merge;

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::commit::{Direction, LineSource, SelectionFlow, display_revisions};
use crate::config::Config;
use crate::error::WorkflowError;
use crate::svn::{RevisionRecord, SvnExecutor, parse_log};

pub use history::{show_remote_revisions, show_revisions};
pub use merge::merge;

/// How an interactive commit ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed { message: String, target_dir: PathBuf },
    Declined { message: String },
}

impl CommitOutcome {
    pub fn message(&self) -> &str {
        match self {
            Self::Committed { message, .. } | Self::Declined { message } => message,
        }
    }
}

/// Working copy the merge result is committed from.
pub fn commit_target(config: &Config, direction: Direction) -> PathBuf {
    match direction {
        Direction::BranchToTrunk => config.local_trunk_path(),
        Direction::TrunkToBranch => config.local_branch_path(),
    }
}

/// Working copy whose history the merged revisions come from.
pub fn history_source(config: &Config, direction: Direction) -> PathBuf {
    match direction {
        Direction::BranchToTrunk => config.local_branch_path(),
        Direction::TrunkToBranch => config.local_trunk_path(),
    }
}

/// Update `path` and return its most recent revisions.
///
/// A failed update only produces a warning; the log is read from whatever the
/// working copy already has.
pub fn fetch_recent_history<S: SvnExecutor, W: Write>(
    svn: &S,
    path: &Path,
    limit: usize,
    out: &mut W,
) -> Result<Vec<RevisionRecord>, WorkflowError> {
    say(out, &format!("Updating local repository: {}", path.display()))?;
    if let Err(e) = svn.update(path) {
        warn!("svn update of {} failed: {}", path.display(), e);
        say(out, &format!("Warning: Failed to update local repo: {e}"))?;
    }

    let log = svn.log(path, limit).map_err(WorkflowError::HistoryFailed)?;
    let revisions = parse_log(&log);
    debug!(
        "Parsed {} revisions from {} bytes of svn log output",
        revisions.len(),
        log.len()
    );
    Ok(revisions)
}

/// Interactive commit message generation and commit.
///
/// Asks for the merge direction, shows the recent history of the merge source,
/// lets the user pick revisions and a task id, then commits in the merge target
/// once confirmed. Declining prints the equivalent manual command and is not an
/// error.
pub fn generate_commit<S, L, W>(
    config: &Config,
    svn: &S,
    input: &mut L,
    out: &mut W,
) -> Result<CommitOutcome, WorkflowError>
where
    S: SvnExecutor,
    L: LineSource,
    W: Write,
{
    say(out, "=== Generate Commit Message ===")?;

    let direction = SelectionFlow::new(input, out).select_direction()?;

    let source = history_source(config, direction);
    match direction {
        Direction::TrunkToBranch => say(out, "Getting trunk revisions...")?,
        Direction::BranchToTrunk => say(out, "Getting branch revisions...")?,
    }

    let revisions = fetch_recent_history(svn, &source, config.log_limit, out)?;
    if revisions.is_empty() {
        return Err(WorkflowError::NoRevisions(source));
    }

    display_revisions(out, &revisions).map_err(WorkflowError::Output)?;

    let mut flow = SelectionFlow::new(input, out);
    let selection = flow.complete(direction, &revisions)?;
    let message = selection.commit_message(config.branch_label());
    debug!("Generated commit message for {:?}: {}", selection, message);

    flow.say(&format!("\nGenerated commit message:\n\"{message}\"\n"))?;

    if !flow.confirm_commit()? {
        flow.say("Commit cancelled. You can commit manually later with:")?;
        flow.say(&format!("svn commit -m \"{message}\""))?;
        return Ok(CommitOutcome::Declined { message });
    }

    let target_dir = commit_target(config, direction);
    match direction {
        Direction::BranchToTrunk => flow.say(&format!(
            "Committing changes in trunk directory: {}",
            target_dir.display()
        ))?,
        Direction::TrunkToBranch => flow.say(&format!(
            "Committing changes in branch directory: {}",
            target_dir.display()
        ))?,
    }

    svn.commit(&target_dir, &message)?;
    flow.say("Commit successful!")?;

    Ok(CommitOutcome::Committed { message, target_dir })
}

pub(crate) fn say<W: Write>(out: &mut W, line: &str) -> Result<(), WorkflowError> {
    writeln!(out, "{line}").map_err(WorkflowError::Output)
}
