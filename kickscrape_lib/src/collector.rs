//! Orchestration of a full run: discover links, then render and extract each.

use std::fmt;

use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::ScrapeConfig;
use crate::error::{RenderError, ScrapeError};
use crate::extract::FieldExtractor;
use crate::pagination::discover_links;
use crate::render::Renderer;
use crate::types::{ProjectCollection, ProjectLinks};

/// Reported after each record is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub discovered: usize,
    pub target: usize,
}

/// Result of a completed run.
#[derive(Debug, Clone, Default)]
pub struct CollectOutcome {
    pub collection: ProjectCollection,
    /// Project pages that could not be rendered; their records carry no fields.
    pub failed_pages: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    LinksDiscovered(usize),
    Extracting(usize),
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::LinksDiscovered(n) => write!(f, "links discovered ({})", n),
            Phase::Extracting(i) => write!(f, "extracting #{}", i),
            Phase::Done => write!(f, "done"),
        }
    }
}

/// Owns the renderer session for one run and releases it when the run ends,
/// whether it completed or aborted.
pub struct ProjectCollector<R: Renderer> {
    renderer: R,
    config: ScrapeConfig,
    extractor: FieldExtractor,
    phase: Phase,
}

impl<R: Renderer> ProjectCollector<R> {
    pub fn new(renderer: R, config: ScrapeConfig) -> Result<Self, ScrapeError> {
        config.validate()?;
        let extractor = FieldExtractor::new(config.extract)?;
        Ok(Self {
            renderer,
            config,
            extractor,
            phase: Phase::Idle,
        })
    }

    /// Runs link discovery only, then closes the session.
    pub async fn links(mut self) -> Result<ProjectLinks, ScrapeError> {
        let result = self.discover().await;
        self.shutdown().await;
        result
    }

    /// Runs discovery and extraction, then closes the session.
    pub async fn run<F>(mut self, mut on_progress: F) -> Result<CollectOutcome, ScrapeError>
    where
        F: FnMut(Progress),
    {
        let result = match self.discover().await {
            Ok(links) => Ok(self.collect(links, &mut on_progress).await),
            Err(e) => Err(e),
        };
        self.shutdown().await;
        result
    }

    async fn discover(&mut self) -> Result<ProjectLinks, ScrapeError> {
        let links = discover_links(&mut self.renderer, &self.config).await?;
        self.advance(Phase::LinksDiscovered(links.len()));
        Ok(links)
    }

    async fn collect(
        &mut self,
        links: ProjectLinks,
        on_progress: &mut impl FnMut(Progress),
    ) -> CollectOutcome {
        info!("Creating projects dictionary...");
        let discovered = links.len();
        let mut outcome = CollectOutcome::default();

        for (idx, url) in links.into_iter().enumerate() {
            let id = idx + 1;
            self.advance(Phase::Extracting(id));
            sleep(self.config.settle).await;

            let html = match self.render(&url).await {
                Ok(html) => html,
                Err(e) => {
                    warn!("Project page {} failed to render: {}", url, e);
                    outcome.failed_pages.push(url.clone());
                    String::new()
                }
            };
            let record = self.extractor.extract(&html, id, &url);
            debug!("Project {} has {} of 6 fields", id, record.found_fields());
            outcome.collection.projects.push(record);

            info!(
                "Created a record for project {} out of {}",
                id, self.config.target_count
            );
            on_progress(Progress {
                completed: id,
                discovered,
                target: self.config.target_count,
            });
        }

        self.advance(Phase::Done);
        info!("Finished creating {} project records", outcome.collection.len());
        outcome
    }

    async fn render(&mut self, url: &str) -> Result<String, RenderError> {
        self.renderer.navigate(url).await?;
        sleep(self.config.settle).await;
        self.renderer.current_markup().await
    }

    async fn shutdown(&mut self) {
        if let Err(e) = self.renderer.close().await {
            warn!("Failed to close renderer session: {}", e);
        }
    }

    fn advance(&mut self, next: Phase) {
        debug!("Collector {} -> {}", self.phase, next);
        self.phase = next;
    }
}
