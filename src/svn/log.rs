//! Parsing of the default `svn log` output into revision records.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Line separating entries in `svn log` output.
pub const LOG_DIVIDER: &str =
    "------------------------------------------------------------------------";

/// Maximum stored length of a revision message, in characters.
pub const MAX_MESSAGE_LEN: usize = 60;

const ELLIPSIS: &str = "...";

/// Header line of a log entry: `r<rev> | <author> | <date> | <n> line(s)`.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^r(\d+)\s*\|\s*([^|]+)\s*\|\s*([^|]+)\s*\|\s*\d+\s*lines?\s*$")
        .expect("log header pattern is valid")
});

/// One entry of `svn log` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionRecord {
    /// Revision identifier including the `r` prefix, e.g. `r1024`.
    pub number: String,
    pub author: String,
    /// Date exactly as printed by svn.
    pub date: String,
    /// Message collapsed to a single line and capped at [`MAX_MESSAGE_LEN`].
    pub message: String,
}

/// Parse `svn log` output into records, newest first as svn prints them.
///
/// Parsing is best-effort: entries without a recognizable header or without a
/// body line are dropped.
pub fn parse_log(log_output: &str) -> Vec<RevisionRecord> {
    log_output
        .split(LOG_DIVIDER)
        .filter_map(parse_entry)
        .collect()
}

fn parse_entry(entry: &str) -> Option<RevisionRecord> {
    let entry = entry.trim();
    if entry.is_empty() {
        return None;
    }

    let lines: Vec<&str> = entry.lines().collect();
    if lines.len() < 2 {
        return None;
    }

    let caps = HEADER_RE.captures(lines[0].trim())?;

    let message = lines[1..]
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    Some(RevisionRecord {
        number: format!("r{}", &caps[1]),
        author: caps[2].trim().to_string(),
        date: caps[3].trim().to_string(),
        message: truncate_with_ellipsis(&message, MAX_MESSAGE_LEN),
    })
}

/// Cap `text` at `max_chars` characters, replacing the tail with `...` when it
/// is longer.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
