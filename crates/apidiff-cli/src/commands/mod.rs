//! One module per subcommand; each exposes an `execute` entry point.

pub mod completions;
pub mod config;
pub mod diff;
pub mod init;
pub mod tree;
