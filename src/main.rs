//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use cartola::{
    cli::{types::OutputOptions, Cartola, Commands},
    commands::{market::handle_market, matches::handle_matches, scores::handle_scores},
    ApiClient,
};
use tracing::{subscriber, trace, Level};
use tracing_subscriber::FmtSubscriber;

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let my_subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    subscriber::set_global_default(my_subscriber)?;
    Ok(())
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Cartola::parse();
    init_logging(app.verbose)?;
    trace!("command line input recorded: {app:?}");

    let client = match &app.base_url {
        Some(url) => ApiClient::with_base_url(url.as_str())?,
        None => ApiClient::from_env()?,
    };
    let output = OutputOptions {
        format: app.format,
        path: app.output,
    };

    match app.command {
        Commands::Scores { round } => handle_scores(&client, &round, &output).await?,
        Commands::Market { info } => handle_market(&client, info, &output).await?,
        Commands::Matches => handle_matches(&client, &output).await?,
    }

    Ok(())
}
