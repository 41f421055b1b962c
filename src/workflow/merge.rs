//! Merging between trunk and the tracked branch.

use std::io::Write;

use tracing::warn;

use crate::commit::Direction;
use crate::config::Config;
use crate::error::WorkflowError;
use crate::svn::SvnExecutor;

use super::{commit_target, say};

/// Update both working copies and merge the source line into the target.
///
/// Updates are fatal here: merging into a stale working copy is never wanted.
/// The trailing `svn status` is informational only.
pub fn merge<S: SvnExecutor, W: Write>(
    config: &Config,
    svn: &S,
    direction: Direction,
    out: &mut W,
) -> Result<(), WorkflowError> {
    let target_dir = commit_target(config, direction);
    let (source_dir, source_url, heading, action) = match direction {
        Direction::BranchToTrunk => (
            config.local_branch_path(),
            config.branch_url(),
            "=== Starting merge of branch to trunk ===",
            "Merging branch to trunk...",
        ),
        Direction::TrunkToBranch => (
            config.local_trunk_path(),
            config.trunk_url(),
            "=== Starting merge of trunk to branch ===",
            "Merging trunk to branch...",
        ),
    };

    say(out, heading)?;

    for path in [&target_dir, &source_dir] {
        say(out, &format!("Updating local repo at: {}", path.display()))?;
        svn.update(path)?;
        say(out, "Update successful")?;
    }

    say(out, action)?;
    svn.merge(&target_dir, &source_url)?;
    say(out, "Merge successful!")?;

    say(out, "\n=== Checking merge status ===")?;
    if let Err(e) = svn.status(&target_dir) {
        warn!("svn status in {} failed: {}", target_dir.display(), e);
    }

    say(out, "\nMerge completed! To commit, run:")?;
    say(out, "svn-merge generate-commit")?;

    Ok(())
}
