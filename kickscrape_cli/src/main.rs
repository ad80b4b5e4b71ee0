mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kickscrape")]
#[command(about = "Scrape Kickstarter technology projects into a JSON file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Discover projects on the listing and extract every project page
    Scrape(commands::scrape::ScrapeArgs),
    /// Discover project links only and print them as JSON
    Links(commands::links::LinksArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kickscrape_lib=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Scrape(args) => commands::scrape::run(args).await?,
        Commands::Links(args) => commands::links::run(args).await?,
    }

    Ok(())
}
