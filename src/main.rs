//! svn-merge - CLI entry point.

use std::io;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use svn_merge::commit::TerminalInput;
use svn_merge::config::{
    BRANCH_PATH_ENV_VAR, Config, DEFAULT_LOG_LIMIT, LOCAL_REPO_PATH_ENV_VAR, LOG_LIMIT_ENV_VAR,
    REPO_BASE_ENV_VAR, Side,
};
use svn_merge::svn::{SystemSvn, check_svn_installed};
use svn_merge::workflow::{self, CommitOutcome};
use svn_merge::Direction;

/// Merge between an SVN trunk and branch and generate the commit message.
#[derive(Parser, Debug)]
#[command(name = "svn-merge")]
#[command(about = "Merge between an SVN trunk and branch and generate the commit message")]
#[command(version)]
#[command(after_help = "Workflow:\n  1. svn-merge branch-to-trunk    # Do the merge\n  2. svn-merge generate-commit    # Generate commit message")]
struct Cli {
    #[command(flatten)]
    repo: RepoArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct RepoArgs {
    /// Repository base URL (trunk is <base>/trunk)
    #[arg(long, global = true, env = REPO_BASE_ENV_VAR, default_value = "")]
    repo_base: String,

    /// Branch path below the repository base, e.g. /branches/feature-x
    #[arg(long, global = true, env = BRANCH_PATH_ENV_VAR, default_value = "")]
    branch_path: String,

    /// Local checkout root holding trunk and the branch
    #[arg(long, global = true, env = LOCAL_REPO_PATH_ENV_VAR, default_value = "")]
    local_repo_path: String,

    /// Number of revisions to fetch
    #[arg(long, global = true, env = LOG_LIMIT_ENV_VAR, default_value_t = DEFAULT_LOG_LIMIT)]
    limit: usize,
}

impl From<RepoArgs> for Config {
    fn from(args: RepoArgs) -> Self {
        Config::new(args.repo_base, args.branch_path, args.local_repo_path)
            .with_log_limit(args.limit)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Merge branch to trunk (merge only)
    #[command(visible_alias = "btt")]
    BranchToTrunk,

    /// Merge trunk to branch (merge only)
    #[command(visible_alias = "ttb")]
    TrunkToBranch,

    /// Generate commit message and commit
    #[command(visible_alias = "gc")]
    GenerateCommit,

    /// Show the last revisions for trunk
    #[command(visible_alias = "rt")]
    RevisionsTrunk(RevisionArgs),

    /// Show the last revisions for the branch
    #[command(visible_alias = "rb")]
    RevisionsBranch(RevisionArgs),
}

#[derive(Args, Debug)]
struct RevisionArgs {
    /// Read the log straight from the repository URL instead of the working copy
    #[arg(long)]
    remote: bool,
}

fn main() -> Result<()> {
    init_tracing();

    if let Err(e) = dotenvy::dotenv() {
        debug!("No .env file loaded: {}", e);
    }

    let cli = Cli::parse();
    let config = Config::from(cli.repo);
    debug!("Configuration: {:?}", config);

    check_svn_installed().context("Subversion CLI is required")?;

    let svn = SystemSvn;
    let mut out = io::stdout();

    match cli.command {
        Command::BranchToTrunk => {
            workflow::merge(&config, &svn, Direction::BranchToTrunk, &mut out)
                .context("Merge of branch to trunk failed")?;
        }
        Command::TrunkToBranch => {
            workflow::merge(&config, &svn, Direction::TrunkToBranch, &mut out)
                .context("Merge of trunk to branch failed")?;
        }
        Command::GenerateCommit => {
            let outcome = workflow::generate_commit(&config, &svn, &mut TerminalInput, &mut out)
                .context("Failed to generate commit")?;
            if let CommitOutcome::Committed { target_dir, .. } = &outcome {
                debug!("Committed in {}", target_dir.display());
            }
        }
        Command::RevisionsTrunk(args) => show_revisions(&config, &svn, Side::Trunk, args)?,
        Command::RevisionsBranch(args) => show_revisions(&config, &svn, Side::Branch, args)?,
    }

    Ok(())
}

fn show_revisions(config: &Config, svn: &SystemSvn, side: Side, args: RevisionArgs) -> Result<()> {
    let mut out = io::stdout();
    if args.remote {
        workflow::show_remote_revisions(config, svn, side, &mut out)
            .context("Failed to get remote revisions")
    } else {
        workflow::show_revisions(config, svn, side, &mut out).context("Failed to get revisions")
    }
}

/// Log to stderr so diagnostics never interleave with the revision table.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "svn_merge=warn".into()),
        )
        .with_writer(io::stderr)
        .without_time()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VARS: [&str; 4] = [
        REPO_BASE_ENV_VAR,
        BRANCH_PATH_ENV_VAR,
        LOCAL_REPO_PATH_ENV_VAR,
        LOG_LIMIT_ENV_VAR,
    ];

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_aliases_resolve_to_commands() {
        temp_env::with_vars_unset(ALL_VARS, || {
            let cli = Cli::try_parse_from(["svn-merge", "btt"]).unwrap();
            assert!(matches!(cli.command, Command::BranchToTrunk));
            let cli = Cli::try_parse_from(["svn-merge", "ttb"]).unwrap();
            assert!(matches!(cli.command, Command::TrunkToBranch));
            let cli = Cli::try_parse_from(["svn-merge", "gc"]).unwrap();
            assert!(matches!(cli.command, Command::GenerateCommit));
            let cli = Cli::try_parse_from(["svn-merge", "rt", "--remote"]).unwrap();
            assert!(matches!(cli.command, Command::RevisionsTrunk(RevisionArgs { remote: true })));
            let cli = Cli::try_parse_from(["svn-merge", "rb"]).unwrap();
            assert!(matches!(cli.command, Command::RevisionsBranch(RevisionArgs { remote: false })));
        });
    }

    #[test]
    fn test_missing_or_unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["svn-merge"]).is_err());
        assert!(Cli::try_parse_from(["svn-merge", "frobnicate"]).is_err());
    }

    #[test]
    fn test_config_defaults_to_empty() {
        temp_env::with_vars_unset(ALL_VARS, || {
            let cli = Cli::try_parse_from(["svn-merge", "gc"]).unwrap();
            assert_eq!(Config::from(cli.repo), Config::default());
        });
    }

    #[test]
    fn test_config_from_env() {
        temp_env::with_vars(
            [
                (REPO_BASE_ENV_VAR, Some("https://svn.example.com/repo")),
                (BRANCH_PATH_ENV_VAR, Some("/branches/feature-x")),
                (LOCAL_REPO_PATH_ENV_VAR, Some("/home/dev/repo")),
                (LOG_LIMIT_ENV_VAR, Some("25")),
            ],
            || {
                let cli = Cli::try_parse_from(["svn-merge", "gc"]).unwrap();
                let config = Config::from(cli.repo);
                assert_eq!(config.branch_url(), "https://svn.example.com/repo/branches/feature-x");
                assert_eq!(config.local_repo_path, "/home/dev/repo");
                assert_eq!(config.log_limit, 25);
            },
        );
    }

    #[test]
    fn test_flags_override_env() {
        temp_env::with_vars(
            [
                (REPO_BASE_ENV_VAR, Some("https://env.example.com")),
                (BRANCH_PATH_ENV_VAR, None),
                (LOCAL_REPO_PATH_ENV_VAR, None),
                (LOG_LIMIT_ENV_VAR, None),
            ],
            || {
                let cli = Cli::try_parse_from([
                    "svn-merge",
                    "rt",
                    "--repo-base",
                    "https://flag.example.com",
                ])
                .unwrap();
                assert_eq!(cli.repo.repo_base, "https://flag.example.com");
            },
        );
    }
}
