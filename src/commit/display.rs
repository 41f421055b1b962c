//! Tabular display of recent revisions.

use std::io::{self, Write};

use crate::svn::RevisionRecord;
use crate::svn::log::truncate_with_ellipsis;

/// Widest author name shown before it is shortened with `...`.
pub const MAX_AUTHOR_DISPLAY_LEN: usize = 15;

/// Write the numbered revision table. Row numbers are 1-based and follow the
/// order of `revisions`.
pub fn display_revisions<W: Write>(out: &mut W, revisions: &[RevisionRecord]) -> io::Result<()> {
    writeln!(out, "\n=== Available Revisions ===")?;
    writeln!(
        out,
        "{:<3} | {:<8} | {:<15} | {}",
        "No.", "Revision", "Author", "Message"
    )?;
    writeln!(
        out,
        "----+----------+-----------------+----------------------------------------"
    )?;

    for (i, rev) in revisions.iter().enumerate() {
        writeln!(
            out,
            "{:<3} | {:<8} | {:<15} | {}",
            i + 1,
            rev.number,
            display_author(&rev.author),
            rev.message
        )?;
    }
    writeln!(out)
}

/// Author as shown in the table: at most 15 characters.
pub fn display_author(author: &str) -> String {
    truncate_with_ellipsis(author, MAX_AUTHOR_DISPLAY_LEN)
}
