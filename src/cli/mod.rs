//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod context;
pub mod credits;
pub mod init;
pub mod org;
pub mod repo;
pub mod status;

pub use args::{GlobalOptions, OutputFormat, PageArgs};
pub use context::CommandContext;

/// cirrusop - terminal companion for the Cirrus CI dashboard
#[derive(Parser, Debug)]
#[command(name = "cirrusop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        value_enum,
        env = "CIRRUSOP_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override default organization
    #[arg(long, global = true, env = "CIRRUSOP_ORG", hide_env = true)]
    pub org: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "CIRRUSOP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "CIRRUSOP_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Custom API host (development/testing)
    #[arg(long, global = true, env = "CIRRUSOP_API_HOST", hide = true)]
    pub api_host: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize cirrusop configuration
    Init,

    /// Show authentication and configuration status
    Status,

    /// Display version information
    Version,

    /// Organization settings and marketplace plan
    #[command(subcommand)]
    Org(OrgCommands),

    /// Compute credits balance and transactions
    #[command(subcommand)]
    Credits(CreditsCommands),

    /// Repository builds
    #[command(subcommand)]
    Repo(RepoCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   cirrusop completion bash > /etc/bash_completion.d/cirrusop
  zsh:    cirrusop completion zsh > \"${fpath[1]}/_cirrusop\"
  fish:   cirrusop completion fish > ~/.config/fish/completions/cirrusop.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Organization subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// Set default organization
    Set {
        /// GitHub organization login
        organization: String,
    },

    /// Show marketplace plan, trial and seats
    #[command(
        visible_alias = "get",
        after_help = "EXAMPLES:\n  \
            cirrusop org settings                    # Default organization\n  \
            cirrusop org settings --org acme         # Another organization\n  \
            cirrusop org settings --format json | jq '.data.plan'"
    )]
    Settings,
}

/// Compute credits subcommands
#[derive(Subcommand, Debug)]
pub enum CreditsCommands {
    /// Show balance, pricing and the first page of transactions
    Show,

    /// List compute credit transactions
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            cirrusop credits transactions                     # First page\n  \
            cirrusop credits transactions --page-size 20      # Smaller pages\n  \
            cirrusop credits transactions --after <CURSOR>    # Next page\n  \
            cirrusop credits transactions --all               # Everything\n  \
            cirrusop credits transactions --limit 250 --format json"
    )]
    Transactions {
        #[command(flatten)]
        pagination: PageArgs,
    },
}

/// Repository subcommands
#[derive(Subcommand, Debug)]
pub enum RepoCommands {
    /// List the latest builds of a repository
    Builds {
        /// Repository ID
        repository_id: String,

        /// Number of builds to fetch
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
        last: u32,
    },
}
