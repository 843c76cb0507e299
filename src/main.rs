use anyhow::Result;
use clap::Parser;
use colored::*;
use gh_client::cli::{Cli, Commands};
use gh_client::commands::*;
use gh_client::config::{self, ClientConfig};
use gh_client::github::{GitHubClient, GitHubError};
use gh_client::output::OutputOptions;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        report_error(&e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Dotenv values must be in the environment before the config is resolved
    config::load_env_file(cli.env_file.as_deref())?;

    let mut client_config = ClientConfig::from_env().with_timeout(cli.timeout);
    if let Some(token) = cli.token {
        client_config = client_config.with_token(token);
    }
    if !client_config.is_authenticated() {
        tracing::info!("no GitHub token configured, using unauthenticated requests");
    }

    let client = GitHubClient::with_config(client_config)?;
    let output = OutputOptions {
        color: colored::control::SHOULD_COLORIZE.should_colorize(),
    };
    let context = CommandContext::new(client, output);

    match cli.command {
        Commands::Me => MeCommand.execute(&context).await,
        Commands::User { username } => UserCommand { username }.execute(&context).await,
        Commands::Repos {
            username,
            per_page,
            summary,
        } => {
            ReposCommand {
                username,
                per_page,
                summary,
            }
            .execute(&context)
            .await
        }
        Commands::Issues { owner, repo, state } => {
            IssuesCommand { owner, repo, state }
                .execute(&context)
                .await
        }
    }
}

fn report_error(err: &anyhow::Error) {
    match err.downcast_ref::<GitHubError>() {
        Some(gh_err) => eprintln!("{} {}", "[GitHubError]".red().bold(), gh_err),
        None => eprintln!("{}", format!("Error: {:#}", err).red()),
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG wins over -v when set
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
