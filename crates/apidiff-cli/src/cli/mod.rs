//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "apidiff",
    bin_name = "apidiff",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Public API surface diffs from SourceKitten dumps",
    long_about = "apidiff compares the public symbols of two `sourcekitten doc` \
                  dumps and reports which are stable, missing or changed, and new.",
    after_help = "EXAMPLES:\n\
        \x20 apidiff diff old_api.json new_api.json\n\
        \x20 sourcekitten doc -- -scheme App | apidiff diff old_api.json -\n\
        \x20 apidiff tree new_api.json --public-only\n\
        \x20 apidiff completions bash > /usr/share/bash-completion/completions/apidiff",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Diff the public API of two dumps.
    #[command(
        visible_alias = "d",
        about = "Diff the public API of two dumps",
        after_help = "EXAMPLES:\n\
            \x20 apidiff diff .old_api.json .new_api.json\n\
            \x20 apidiff diff old.json new.json --hide-stable --no-usr\n\
            \x20 apidiff --output-format json diff old.json new.json > report.json"
    )]
    Diff(DiffArgs),

    /// Print the symbol tree of one dump.
    #[command(
        visible_alias = "t",
        about = "Print the symbol tree of a dump",
        after_help = "EXAMPLES:\n\
            \x20 apidiff tree api.json\n\
            \x20 apidiff tree api.json --public-only"
    )]
    Tree(TreeArgs),

    /// Initialise an apidiff configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 apidiff init          # default location\n\
            \x20 apidiff init --force  # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 apidiff completions bash > ~/.local/share/bash-completion/completions/apidiff\n\
            \x20 apidiff completions zsh  > ~/.zfunc/_apidiff\n\
            \x20 apidiff completions fish > ~/.config/fish/completions/apidiff.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the apidiff configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 apidiff config get diff.show_usr\n\
            \x20 apidiff config list\n\
            \x20 apidiff config path"
    )]
    Config(ConfigCommands),
}

// ── diff ──────────────────────────────────────────────────────────────────────

/// Arguments for `apidiff diff`.
#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Dump of the old revision (`-` for stdin).
    #[arg(value_name = "OLD", help = "Dump of the old revision (`-` for stdin)")]
    pub old: PathBuf,

    /// Dump of the new revision (`-` for stdin).
    #[arg(value_name = "NEW", help = "Dump of the new revision (`-` for stdin)")]
    pub new: PathBuf,

    /// Do not list stable symbols.
    #[arg(long = "hide-stable", help = "Do not list stable symbols")]
    pub hide_stable: bool,

    /// Print names only, without USRs.
    #[arg(long = "no-usr", help = "Print names only, without USRs")]
    pub no_usr: bool,
}

// ── tree ──────────────────────────────────────────────────────────────────────

/// Arguments for `apidiff tree`.
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Dump to print (`-` for stdin).
    #[arg(value_name = "FILE", help = "Dump to print (`-` for stdin)")]
    pub file: PathBuf,

    /// Only print public symbols.
    #[arg(long = "public-only", help = "Only print public symbols")]
    pub public_only: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `apidiff init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `apidiff completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `apidiff config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `diff.show_usr`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
