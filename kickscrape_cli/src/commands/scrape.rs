//! The `scrape` subcommand: discover projects, extract every page, write JSON.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use kickscrape_lib::config::DEFAULT_OUTPUT;
use kickscrape_lib::{output, ExtractOptions, HttpRenderer, ProjectCollector, Renderer, ScrapeConfig};

use super::session::{RendererKind, SessionArgs};

/// Arguments for the `scrape` subcommand.
#[derive(Args)]
pub struct ScrapeArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Output file; replaced if it exists
    #[arg(long, short, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Store each project page's full markup under `Text`
    #[arg(long)]
    pub capture_text: bool,

    /// Store the funding model label under `AllOrNothing`
    #[arg(long)]
    pub funding_model: bool,
}

impl ScrapeArgs {
    fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            capture_full_text: self.capture_text,
            include_funding_model: self.funding_model,
        }
    }
}

pub async fn run(args: &ScrapeArgs) -> Result<()> {
    let config = args.session.config(args.extract_options())?;
    eprintln!(
        "Start scraping {} (target: {} projects)",
        config.listing_url, config.target_count
    );

    match args.session.renderer {
        RendererKind::Http => execute(HttpRenderer::new()?, config, &args.output).await,
        #[cfg(feature = "browser")]
        RendererKind::Chrome => {
            let renderer = args.session.launch_chrome().await?;
            execute(renderer, config, &args.output).await
        }
        #[cfg(not(feature = "browser"))]
        RendererKind::Chrome => anyhow::bail!(
            "kickscrape was built without the `browser` feature; use --renderer http"
        ),
    }
}

async fn execute<R: Renderer>(renderer: R, config: ScrapeConfig, path: &Path) -> Result<()> {
    let collector = ProjectCollector::new(renderer, config)?;

    let pb = ProgressBar::new(0);
    pb.set_style(ProgressStyle::with_template(
        "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} ({eta}) {msg}",
    )?);
    pb.set_message("extracting project pages...");

    let result = collector
        .run(|progress| {
            pb.set_length(progress.discovered as u64);
            pb.set_position(progress.completed as u64);
        })
        .await;
    pb.finish_and_clear();
    let outcome = result?;

    output::write_json(path, &outcome.collection)?;
    eprintln!(
        "Finished scraping: {} projects written to {}",
        outcome.collection.len(),
        path.display()
    );
    if !outcome.failed_pages.is_empty() {
        eprintln!(
            "{} project pages failed to render and have empty fields:",
            outcome.failed_pages.len()
        );
        for url in &outcome.failed_pages {
            eprintln!("  {}", url);
        }
    }
    Ok(())
}
