//! Revision selection and merge commit message generation.

pub mod display;
pub mod input;
pub mod message;
pub mod selection;

pub use display::display_revisions;
pub use input::{LineSource, ScriptedInput, TerminalInput};
pub use message::{Direction, FALLBACK_MESSAGE, Mode, SelectionResult, generate_commit_message};
pub use selection::SelectionFlow;
