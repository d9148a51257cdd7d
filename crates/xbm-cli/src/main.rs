//! CLI entry point - the composition root.
//!
//! Environment is loaded from `./.env` and then `<data root>/.env`; values
//! already set in the process take precedence.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use xbm_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers, open_session};

fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Before tracing so RUST_LOG from a .env file applies.
    dotenvy::dotenv().ok();
    if let Ok(path) = xbm_core::env_file_path() {
        dotenvy::from_path(path).ok();
    }
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = CliError::classify(&err).map_or(1, |e| e.exit_code());
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    if matches!(command, Commands::Paths) {
        return handlers::paths::execute();
    }

    let config = CliConfig::from_env()?;
    if matches!(command, Commands::Logout) {
        let session = open_session(&config, &xbm_core::database_path()?).await?;
        return handlers::logout::execute(session.as_ref()).await;
    }
    let ctx = bootstrap(config).await?;

    match command {
        Commands::Init => handlers::init::execute(&ctx).await,
        Commands::List { search, tag } => handlers::list::execute(&ctx, search, tag).await,
        Commands::Add { url, tags } => handlers::add::execute(&ctx, url, tags).await,
        Commands::Retag { id, tags } => handlers::retag::execute(&ctx, &id, tags).await,
        Commands::Remove { id } => handlers::remove::execute(&ctx, &id).await,
        Commands::Tags => handlers::tags::list(&ctx).await,
        Commands::TagAdd { name } => handlers::tags::add(&ctx, &name).await,
        Commands::TagDelete { name } => handlers::tags::delete(&ctx, &name).await,
        // Run before bootstrap.
        Commands::Logout | Commands::Paths => Ok(()),
    }
}
