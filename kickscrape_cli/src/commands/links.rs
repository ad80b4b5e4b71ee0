//! The `links` subcommand: run listing discovery only.

use anyhow::Result;
use clap::Args;
use kickscrape_lib::{ExtractOptions, HttpRenderer, ProjectCollector, Renderer, ScrapeConfig};

use super::session::{RendererKind, SessionArgs};

/// Arguments for the `links` subcommand.
#[derive(Args)]
pub struct LinksArgs {
    #[command(flatten)]
    pub session: SessionArgs,
}

pub async fn run(args: &LinksArgs) -> Result<()> {
    let config = args.session.config(ExtractOptions::default())?;

    let links = match args.session.renderer {
        RendererKind::Http => discover(HttpRenderer::new()?, config).await?,
        #[cfg(feature = "browser")]
        RendererKind::Chrome => discover(args.session.launch_chrome().await?, config).await?,
        #[cfg(not(feature = "browser"))]
        RendererKind::Chrome => anyhow::bail!(
            "kickscrape was built without the `browser` feature; use --renderer http"
        ),
    };

    println!("{}", serde_json::to_string_pretty(&links)?);
    eprintln!("Discovered {} project links", links.len());
    Ok(())
}

async fn discover<R: Renderer>(renderer: R, config: ScrapeConfig) -> Result<Vec<String>> {
    let links = ProjectCollector::new(renderer, config)?.links().await?;
    Ok(links.into_vec())
}
