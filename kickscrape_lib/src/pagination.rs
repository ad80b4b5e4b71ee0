//! Incremental-load pagination over the project listing.

use scraper::Selector;
use tokio::time::sleep;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::render::Renderer;
use crate::selector::{Document, Locator};
use crate::types::ProjectLinks;

/// Loads the listing until `config.target_count` projects are rendered, then
/// harvests every project link on the page.
///
/// The load-more control is clicked `ceil(target / items_per_page)` times,
/// each after a settle pause. If the control is gone before the first click
/// the listing is unusable and discovery fails; if it disappears later the
/// listing is exhausted and the remaining clicks are skipped.
pub async fn discover_links<R: Renderer>(
    renderer: &mut R,
    config: &ScrapeConfig,
) -> Result<ProjectLinks, ScrapeError> {
    let base = Url::parse(&config.listing_url).map_err(|e| {
        ScrapeError::InvalidInput(format!("invalid listing url '{}': {}", config.listing_url, e))
    })?;
    let anchor = Locator::css("a[href]").compile()?;

    info!("Collecting links from {}", config.listing_url);
    renderer
        .navigate(&config.listing_url)
        .await
        .map_err(|source| ScrapeError::ListingUnreachable {
            url: config.listing_url.clone(),
            source,
        })?;

    let clicks = config.clicks_required();
    let mut clicked = 0;
    for attempt in 0..clicks {
        sleep(config.settle).await;
        match renderer.find_one(&config.load_more).await? {
            Some(button) => {
                renderer.click(&button).await?;
                clicked += 1;
            }
            None if attempt == 0 => {
                return Err(ScrapeError::LoadMoreMissing {
                    url: config.listing_url.clone(),
                });
            }
            None => {
                info!(
                    "Listing exhausted after {} of {} load-more clicks",
                    clicked, clicks
                );
                break;
            }
        }
    }
    if clicked > 0 {
        sleep(config.settle).await;
    }

    let containers = renderer.find_all(&config.project_link).await?;
    debug!("Found {} project link containers", containers.len());

    let mut links = ProjectLinks::new();
    for container in &containers {
        let inner = renderer.inner_html(container).await?;
        let href = match anchor_href(&inner, &anchor) {
            Some(href) => Some(href),
            None => renderer.attribute(container, "href").await?,
        };
        let Some(href) = href else {
            debug!("Skipping project container without a link");
            continue;
        };
        match base.join(href.trim()) {
            Ok(link) => {
                if !links.insert(link.to_string()) {
                    debug!("Duplicate project link {}", link);
                }
            }
            Err(e) => warn!("Skipping unparseable project link '{}': {}", href, e),
        }
    }

    info!("Finished collecting {} links", links.len());
    Ok(links)
}

fn anchor_href(inner_html: &str, anchor: &Selector) -> Option<String> {
    Document::fragment(inner_html).first_attr(anchor, "href")
}
