//! Interactive selection of merge direction, message mode, revisions and task id.
//!
//! Each step re-prompts until it gets a valid answer; there is no retry limit.
//! Only a failing or exhausted input source ends the flow early.

use std::io::Write;

use crate::commit::input::LineSource;
use crate::commit::message::{Direction, Mode, SelectionResult};
use crate::error::WorkflowError;
use crate::svn::RevisionRecord;

const CHOICE_PROMPT: &str = "Enter choice (1 or 2)";
const INVALID_CHOICE: &str = "Invalid choice. Please enter 1 or 2.";

/// Drives the prompts against an input source, echoing to `out`.
pub struct SelectionFlow<'a, L, W> {
    input: &'a mut L,
    out: &'a mut W,
}

impl<'a, L: LineSource, W: Write> SelectionFlow<'a, L, W> {
    pub fn new(input: &'a mut L, out: &'a mut W) -> Self {
        Self { input, out }
    }

    /// Ask which way the merge went.
    pub fn select_direction(&mut self) -> Result<Direction, WorkflowError> {
        self.say("Please specify merge direction:")?;
        self.say("1. Branch to Trunk")?;
        self.say("2. Trunk to Branch")?;

        let direction = match self.choose_one_or_two()? {
            1 => Direction::BranchToTrunk,
            _ => Direction::TrunkToBranch,
        };
        self.say(&format!("Merge direction: {direction}"))?;
        Ok(direction)
    }

    /// Ask whether the message names one revision or a range of two.
    pub fn select_mode(&mut self) -> Result<Mode, WorkflowError> {
        self.say("Select commit message type:")?;
        self.say("1. Single revision")?;
        self.say("2. Revision range (2 revisions)")?;

        Ok(match self.choose_one_or_two()? {
            1 => Mode::Single,
            _ => Mode::Range,
        })
    }

    /// Pick the revision(s) for `mode`. In range mode FIRST and SECOND are taken
    /// as given: the same revision twice, or in any order.
    pub fn select_revisions(
        &mut self,
        mode: Mode,
        revisions: &[RevisionRecord],
    ) -> Result<(String, Option<String>), WorkflowError> {
        let count = revisions.len();
        match mode {
            Mode::Single => {
                let selected =
                    self.choose_revision(revisions, &format!("Select revision number (1-{count})"))?;
                self.say(&format!("Selected: {} - {}", selected.number, selected.message))?;
                Ok((selected.number.clone(), None))
            }
            Mode::Range => {
                let prompt = format!("Enter number (1-{count})");

                self.say("Select FIRST revision:")?;
                let first = self.choose_revision(revisions, &prompt)?;
                self.say(&format!("First: {} - {}", first.number, first.message))?;

                self.say("\nSelect SECOND revision:")?;
                let second = self.choose_revision(revisions, &prompt)?;
                self.say(&format!("Second: {} - {}", second.number, second.message))?;

                Ok((first.number.clone(), Some(second.number.clone())))
            }
        }
    }

    /// Free-text task identifier, not validated.
    pub fn capture_task_id(&mut self) -> Result<String, WorkflowError> {
        self.say("Branch to trunk required. Please insert your task number e.g, T123456.")?;
        self.ask("Enter task number")
    }

    /// Mode, revisions and (for branch-to-trunk) task id for an already chosen
    /// direction.
    pub fn complete(
        &mut self,
        direction: Direction,
        revisions: &[RevisionRecord],
    ) -> Result<SelectionResult, WorkflowError> {
        let mode = self.select_mode()?;
        let (first, second) = self.select_revisions(mode, revisions)?;
        let task_id = if direction.requires_task_id() {
            Some(self.capture_task_id()?)
        } else {
            None
        };

        Ok(SelectionResult {
            direction,
            mode,
            first,
            second,
            task_id,
        })
    }

    /// `y` or `yes` in any case confirms; anything else declines.
    pub fn confirm_commit(&mut self) -> Result<bool, WorkflowError> {
        let answer = self.ask("Do you want to commit with this message? (y/N)")?;
        Ok(is_affirmative(&answer))
    }

    /// Write one line of output.
    pub fn say(&mut self, line: &str) -> Result<(), WorkflowError> {
        writeln!(self.out, "{line}").map_err(WorkflowError::Output)
    }

    fn ask(&mut self, prompt: &str) -> Result<String, WorkflowError> {
        self.out.flush().map_err(WorkflowError::Output)?;
        let line = self.input.read_line(prompt).map_err(WorkflowError::Input)?;
        Ok(line.trim().to_string())
    }

    fn choose_one_or_two(&mut self) -> Result<u8, WorkflowError> {
        loop {
            match self.ask(CHOICE_PROMPT)?.as_str() {
                "1" => return Ok(1),
                "2" => return Ok(2),
                _ => self.say(INVALID_CHOICE)?,
            }
        }
    }

    fn choose_revision<'r>(
        &mut self,
        revisions: &'r [RevisionRecord],
        prompt: &str,
    ) -> Result<&'r RevisionRecord, WorkflowError> {
        loop {
            let answer = self.ask(prompt)?;
            if let Some(index) = parse_index(&answer, revisions.len()) {
                return Ok(&revisions[index]);
            }
            self.say(&format!(
                "Invalid choice. Please enter a number between 1 and {}.",
                revisions.len()
            ))?;
        }
    }
}

/// Convert a 1-based answer into a 0-based index below `count`.
pub fn parse_index(answer: &str, count: usize) -> Option<usize> {
    let choice: usize = answer.trim().parse().ok()?;
    (1..=count).contains(&choice).then(|| choice - 1)
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
