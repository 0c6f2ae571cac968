//! cirrusop - terminal companion for the Cirrus CI dashboard

use clap::{CommandFactory, Parser};
use log::{LevelFilter, debug};

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;

use cli::{Cli, Commands, CreditsCommands, GlobalOptions, OrgCommands, RepoCommands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);
    debug!("{:?}", opts);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("cirrusop version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Org(org_cmd) => match org_cmd {
            OrgCommands::Set { organization } => cli::org::set(&opts, &organization).await,
            OrgCommands::Settings => cli::org::settings(&opts).await,
        },
        Commands::Credits(credits_cmd) => match credits_cmd {
            CreditsCommands::Show => cli::credits::show(&opts).await,
            CreditsCommands::Transactions { pagination } => {
                cli::credits::transactions(&opts, &pagination).await
            }
        },
        Commands::Repo(repo_cmd) => match repo_cmd {
            RepoCommands::Builds {
                repository_id,
                last,
            } => cli::repo::builds(&opts, &repository_id, last).await,
        },
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "cirrusop", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// `--debug` forces debug level; otherwise `RUST_LOG`, defaulting to warn.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}
