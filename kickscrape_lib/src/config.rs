//! Run configuration: constants, environment overrides and validation.

use std::time::Duration;

use crate::error::ScrapeError;
use crate::extract::ExtractOptions;
use crate::selector::Locator;
use crate::site;
use crate::validation;

pub const DEFAULT_PROJECT_AMOUNT: usize = 300;
pub const PROJECTS_PER_PAGE: usize = 12;
pub const WAITING_TIME: Duration = Duration::from_secs(2);
pub const DEFAULT_OUTPUT: &str = "results.json";

/// Everything a run needs besides the renderer itself.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub listing_url: String,
    /// Number of projects to load on the listing before harvesting links.
    pub target_count: usize,
    pub items_per_page: usize,
    /// Pause before each interaction so client-side content can settle.
    pub settle: Duration,
    pub load_more: Locator,
    pub project_link: Locator,
    pub extract: ExtractOptions,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            listing_url: site::KICKSTARTER_URL.to_string(),
            target_count: DEFAULT_PROJECT_AMOUNT,
            items_per_page: PROJECTS_PER_PAGE,
            settle: WAITING_TIME,
            load_more: site::load_more_button(),
            project_link: site::project_link(),
            extract: ExtractOptions::default(),
        }
    }
}

impl ScrapeConfig {
    /// Defaults overridden by `KICKSCRAPE_*` environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            listing_url: std::env::var("KICKSCRAPE_LISTING_URL").unwrap_or(defaults.listing_url),
            target_count: env_usize("KICKSCRAPE_TARGET_COUNT", defaults.target_count),
            items_per_page: env_usize("KICKSCRAPE_ITEMS_PER_PAGE", defaults.items_per_page),
            settle: Duration::from_millis(env_u64(
                "KICKSCRAPE_SETTLE_MS",
                defaults.settle.as_millis() as u64,
            )),
            ..defaults
        }
    }

    pub fn with_listing_url(mut self, url: impl Into<String>) -> Self {
        self.listing_url = url.into();
        self
    }

    pub fn with_target_count(mut self, count: usize) -> Self {
        self.target_count = count;
        self
    }

    pub fn with_items_per_page(mut self, size: usize) -> Self {
        self.items_per_page = size;
        self
    }

    pub fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    pub fn with_extract(mut self, options: ExtractOptions) -> Self {
        self.extract = options;
        self
    }

    pub fn validate(&self) -> Result<(), ScrapeError> {
        validation::validate_listing_url(&self.listing_url)?;
        validation::validate_target_count(self.target_count)?;
        validation::validate_items_per_page(self.items_per_page)?;
        self.load_more.compile()?;
        self.project_link.compile()?;
        Ok(())
    }

    /// Load-more clicks needed for `target_count` items to be rendered.
    pub fn clicks_required(&self) -> usize {
        clicks_required(self.target_count, self.items_per_page)
    }
}

pub fn clicks_required(target_count: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    target_count.div_ceil(items_per_page)
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(default)
}
