//! Line-oriented input sources for the interactive flow.

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;

/// Source of user answers, one line per prompt.
pub trait LineSource {
    /// Show `prompt` and return the next line of input, without its line ending.
    ///
    /// Returns an `UnexpectedEof` error once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Reads answers from the terminal.
///
/// Uses dialoguer when stdin is a terminal and plain line reads otherwise, so
/// answers can also be piped in.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl LineSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        if io::stdin().is_terminal() {
            return Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .map_err(io::Error::other);
        }

        let mut stdout = io::stdout();
        write!(stdout, "{prompt}: ")?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Feeds a fixed sequence of answers, recording every prompt it was asked.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Number of answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "scripted input exhausted")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_replays_answers_in_order() {
        let mut input = ScriptedInput::new(["1", "two"]);
        assert_eq!(input.read_line("first").unwrap(), "1");
        assert_eq!(input.read_line("second").unwrap(), "two");
        assert_eq!(input.prompts(), ["first", "second"]);
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_scripted_input_reports_eof_when_exhausted() {
        let mut input = ScriptedInput::new(Vec::<String>::new());
        let err = input.read_line("anything").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
