//! Subversion client boundary and log parsing.

pub mod executor;
pub mod log;

pub use executor::{SvnExecutor, SystemSvn, check_svn_installed};
pub use log::{RevisionRecord, parse_log};
