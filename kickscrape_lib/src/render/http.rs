//! Static renderer over plain HTTP.
//!
//! No script runs, so "load more" controls only work when they are links:
//! clicking one fetches its target and appends that page to the document,
//! the way an infinite-scroll listing grows in a browser. A followed control
//! disappears from later queries.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

use super::Renderer;
use crate::error::RenderError;
use crate::selector::Locator;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

struct LoadedPage {
    url: Url,
    markup: String,
}

/// Snapshot of a matched element.
#[derive(Debug, Clone)]
pub struct StaticElement {
    page: usize,
    inner_html: String,
    attrs: Vec<(String, String)>,
}

impl StaticElement {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

pub struct HttpRenderer {
    http: reqwest::Client,
    pages: Vec<LoadedPage>,
    followed: HashSet<String>,
}

impl HttpRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            pages: Vec::new(),
            followed: HashSet::new(),
        })
    }

    async fn fetch_html(&self, url: &Url) -> Result<String, RenderError> {
        let resp = self
            .http
            .get(url.clone())
            .header("accept", "text/html,application/xhtml+xml")
            .header("accept-language", "en-US,en;q=0.9")
            .header("upgrade-insecure-requests", "1")
            .header("cache-control", "no-cache")
            .header("pragma", "no-cache")
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(RenderError::HttpStatus {
                url: url.to_string(),
                status: resp.status(),
            });
        }

        Ok(resp.text().await?)
    }

    fn select(&self, locator: &Locator) -> Result<Vec<StaticElement>, RenderError> {
        let selector = Selector::parse(locator.as_str())
            .map_err(|_| RenderError::InvalidLocator(locator.to_string()))?;
        let mut found = Vec::new();
        for (idx, page) in self.pages.iter().enumerate() {
            let html = Html::parse_document(&page.markup);
            for el in html.select(&selector) {
                let element = StaticElement {
                    page: idx,
                    inner_html: el.inner_html(),
                    attrs: el
                        .value()
                        .attrs()
                        .map(|(key, value)| (key.to_string(), value.to_string()))
                        .collect(),
                };
                if !self.was_followed(&element) {
                    found.push(element);
                }
            }
        }
        Ok(found)
    }

    fn link_target(&self, element: &StaticElement) -> Option<Url> {
        let href = element.attr("href")?;
        self.pages.get(element.page)?.url.join(href.trim()).ok()
    }

    fn was_followed(&self, element: &StaticElement) -> bool {
        self.link_target(element)
            .is_some_and(|target| self.followed.contains(target.as_str()))
    }
}

#[async_trait]
impl Renderer for HttpRenderer {
    type Element = StaticElement;

    async fn navigate(&mut self, url: &str) -> Result<(), RenderError> {
        let parsed = Url::parse(url).map_err(|source| RenderError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let markup = self.fetch_html(&parsed).await?;
        self.pages = vec![LoadedPage {
            url: parsed,
            markup,
        }];
        self.followed.clear();
        Ok(())
    }

    async fn current_markup(&mut self) -> Result<String, RenderError> {
        if self.pages.is_empty() {
            return Err(RenderError::NoPage);
        }
        let parts: Vec<&str> = self.pages.iter().map(|p| p.markup.as_str()).collect();
        Ok(parts.join("\n"))
    }

    async fn find_one(&mut self, locator: &Locator) -> Result<Option<StaticElement>, RenderError> {
        Ok(self.select(locator)?.into_iter().next())
    }

    async fn find_all(&mut self, locator: &Locator) -> Result<Vec<StaticElement>, RenderError> {
        self.select(locator)
    }

    async fn click(&mut self, element: &StaticElement) -> Result<(), RenderError> {
        let target = self.link_target(element).ok_or_else(|| {
            RenderError::Unsupported("static pages can only follow link controls".into())
        })?;
        if !self.followed.insert(target.to_string()) {
            return Ok(());
        }
        let markup = self.fetch_html(&target).await?;
        debug!("Appended {} to the current document", target);
        self.pages.push(LoadedPage {
            url: target,
            markup,
        });
        Ok(())
    }

    async fn inner_html(&mut self, element: &StaticElement) -> Result<String, RenderError> {
        Ok(element.inner_html.clone())
    }

    async fn attribute(
        &mut self,
        element: &StaticElement,
        name: &str,
    ) -> Result<Option<String>, RenderError> {
        Ok(element.attr(name).map(str::to_string))
    }

    async fn close(&mut self) -> Result<(), RenderError> {
        self.pages.clear();
        self.followed.clear();
        Ok(())
    }
}
