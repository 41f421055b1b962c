//! Merge commit message generation.

use std::fmt;

/// Message used when the selection does not describe a supported merge.
pub const FALLBACK_MESSAGE: &str = "Merge commit";

/// Which way changes flow between trunk and the tracked branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    BranchToTrunk,
    TrunkToBranch,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BranchToTrunk => "branch-to-trunk",
            Self::TrunkToBranch => "trunk-to-branch",
        }
    }

    /// A branch-to-trunk commit must reference a tracking task.
    pub fn requires_task_id(&self) -> bool {
        matches!(self, Self::BranchToTrunk)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the message names one revision or a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Single,
    Range,
}

/// Everything the interactive flow collected for one commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    pub direction: Direction,
    pub mode: Mode,
    pub first: String,
    pub second: Option<String>,
    pub task_id: Option<String>,
}

impl SelectionResult {
    /// Render the commit message for this selection.
    pub fn commit_message(&self, branch_label: &str) -> String {
        generate_commit_message(
            self.mode,
            self.direction,
            &self.first,
            self.second.as_deref(),
            self.task_id.as_deref(),
            branch_label,
        )
    }
}

/// Build the merge commit message.
///
/// ```text
/// Merged r10 from trunk to /branches/feature-x
/// Merged r10 from /branches/feature-x to trunk (T555)
/// Merged branches r10 - r12 from trunk to /branches/feature-x
/// Merged branches r10 - r12 from /branches/feature-x to trunk (T555)
/// ```
///
/// A range without a second revision falls back to [`FALLBACK_MESSAGE`]. The
/// interactive flow never produces one.
pub fn generate_commit_message(
    mode: Mode,
    direction: Direction,
    first: &str,
    second: Option<&str>,
    task_id: Option<&str>,
    branch_label: &str,
) -> String {
    let task_id = task_id.unwrap_or_default();

    match (mode, direction, second) {
        (Mode::Single, Direction::TrunkToBranch, _) => {
            format!("Merged {first} from trunk to {branch_label}")
        }
        (Mode::Single, Direction::BranchToTrunk, _) => {
            format!("Merged {first} from {branch_label} to trunk ({task_id})")
        }
        (Mode::Range, Direction::TrunkToBranch, Some(second)) => {
            format!("Merged branches {first} - {second} from trunk to {branch_label}")
        }
        (Mode::Range, Direction::BranchToTrunk, Some(second)) => {
            format!("Merged branches {first} - {second} from {branch_label} to trunk ({task_id})")
        }
        (Mode::Range, _, None) => FALLBACK_MESSAGE.to_string(),
    }
}
