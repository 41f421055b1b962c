//! Verbose revision listings for trunk or branch.

use std::io::Write;

use tracing::warn;

use crate::config::{Config, Side};
use crate::error::WorkflowError;
use crate::svn::SvnExecutor;

use super::say;

/// Update the side's working copy, then print its verbose log.
pub fn show_revisions<S: SvnExecutor, W: Write>(
    config: &Config,
    svn: &S,
    side: Side,
    out: &mut W,
) -> Result<(), WorkflowError> {
    let path = config.local_path(side);
    say(
        out,
        &format!("=== Getting recent revisions for: {} ===", config.url(side)),
    )?;

    say(out, &format!("Updating local repository: {}", path.display()))?;
    if let Err(e) = svn.update(&path) {
        warn!("svn update of {} failed: {}", path.display(), e);
        say(out, &format!("Warning: Failed to update local repo: {e}"))?;
    }

    svn.print_log(&path, config.log_limit)
        .map_err(WorkflowError::HistoryFailed)
}

/// Print the verbose log straight from the repository URL.
pub fn show_remote_revisions<S: SvnExecutor, W: Write>(
    config: &Config,
    svn: &S,
    side: Side,
    out: &mut W,
) -> Result<(), WorkflowError> {
    let url = config.url(side);
    say(
        out,
        &format!("=== Getting latest revisions directly from remote: {url} ==="),
    )?;

    svn.print_remote_log(&url, config.log_limit)
        .map_err(WorkflowError::HistoryFailed)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use mockall::predicate::eq;

    use super::*;
    use crate::error::SvnError;
    use crate::svn::executor::MockSvnExecutor;

    fn config() -> Config {
        Config::new("svn://host/repo", "/branches/feature-x", "/work").with_log_limit(5)
    }

    #[test]
    fn test_show_revisions_tolerates_update_failure() {
        let mut svn = MockSvnExecutor::new();
        svn.expect_update()
            .with(eq(Path::new("/work/trunk")))
            .returning(|_| Err(SvnError::NotInstalled));
        svn.expect_print_log()
            .with(eq(Path::new("/work/trunk")), eq(5))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut out = Vec::new();
        show_revisions(&config(), &svn, Side::Trunk, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("=== Getting recent revisions for: svn://host/repo/trunk ==="));
        assert!(text.contains("Warning: Failed to update local repo"));
    }

    #[test]
    fn test_show_revisions_log_failure_is_fatal() {
        let mut svn = MockSvnExecutor::new();
        svn.expect_update().returning(|_| Ok(()));
        svn.expect_print_log()
            .returning(|path, _| Err(SvnError::DirectoryNotFound(path.to_path_buf())));

        let mut out = Vec::new();
        let result = show_revisions(&config(), &svn, Side::Branch, &mut out);
        assert!(matches!(result, Err(WorkflowError::HistoryFailed(_))));
    }

    #[test]
    fn test_show_remote_revisions_uses_url() {
        let mut svn = MockSvnExecutor::new();
        svn.expect_update().never();
        svn.expect_print_remote_log()
            .with(eq("svn://host/repo/branches/feature-x"), eq(5))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut out = Vec::new();
        show_remote_revisions(&config(), &svn, Side::Branch, &mut out).unwrap();
    }
}
