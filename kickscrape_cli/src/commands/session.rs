//! Arguments shared by every subcommand that opens a renderer session.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Args, ValueEnum};
use kickscrape_lib::{ExtractOptions, ScrapeConfig};

#[cfg(feature = "browser")]
const DEFAULT_RENDERER: &str = "chrome";
#[cfg(not(feature = "browser"))]
const DEFAULT_RENDERER: &str = "http";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RendererKind {
    /// Headless Chromium; runs the page's scripts
    Chrome,
    /// Plain HTTP; follows load-more links without running scripts
    Http,
}

/// Listing and renderer options. Unset flags fall back to `KICKSCRAPE_*`
/// environment variables, then to built-in defaults.
#[derive(Args)]
pub struct SessionArgs {
    /// Page renderer to drive
    #[arg(long, value_enum, default_value = DEFAULT_RENDERER)]
    pub renderer: RendererKind,

    /// Listing page to discover projects on
    #[arg(long)]
    pub listing_url: Option<String>,

    /// Number of projects to load on the listing (1-5000)
    #[arg(long)]
    pub target_count: Option<usize>,

    /// Projects added by each load-more click (1-100)
    #[arg(long)]
    pub items_per_page: Option<usize>,

    /// Pause before each page interaction in milliseconds
    #[arg(long)]
    pub settle_ms: Option<u64>,

    /// Show the browser window (chrome renderer only)
    #[arg(long)]
    pub headful: bool,

    /// Chrome/Chromium executable (chrome renderer only)
    #[arg(long)]
    pub chrome_path: Option<PathBuf>,
}

impl SessionArgs {
    pub fn config(&self, extract: ExtractOptions) -> Result<ScrapeConfig> {
        let mut config = ScrapeConfig::from_env().with_extract(extract);
        if let Some(ref url) = self.listing_url {
            config = config.with_listing_url(url.trim());
        }
        if let Some(count) = self.target_count {
            config = config.with_target_count(count);
        }
        if let Some(size) = self.items_per_page {
            config = config.with_items_per_page(size);
        }
        if let Some(ms) = self.settle_ms {
            config = config.with_settle(Duration::from_millis(ms));
        }
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "browser")]
    pub async fn launch_chrome(&self) -> Result<kickscrape_lib::ChromeRenderer> {
        tracing::info!("Launching Chromium");
        let options = kickscrape_lib::ChromeOptions {
            headful: self.headful,
            executable: self.chrome_path.clone(),
        };
        Ok(kickscrape_lib::ChromeRenderer::launch(options).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        session: SessionArgs,
    }

    #[test]
    fn flags_override_config() {
        let cli = TestCli::parse_from([
            "test",
            "--renderer",
            "http",
            "--listing-url",
            "http://localhost:8080/listing",
            "--target-count",
            "36",
            "--settle-ms",
            "0",
        ]);
        assert_eq!(cli.session.renderer, RendererKind::Http);
        let config = cli.session.config(ExtractOptions::default()).unwrap();
        assert_eq!(config.listing_url, "http://localhost:8080/listing");
        assert_eq!(config.target_count, 36);
        assert_eq!(config.clicks_required(), 3);
        assert_eq!(config.settle, Duration::ZERO);
    }

    #[test]
    fn invalid_flags_are_rejected() {
        let cli = TestCli::parse_from(["test", "--target-count", "0"]);
        assert!(cli.session.config(ExtractOptions::default()).is_err());
    }
}
