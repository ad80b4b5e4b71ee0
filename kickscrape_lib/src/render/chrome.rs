//! Headless Chromium renderer driven over CDP.

use std::path::PathBuf;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::Renderer;
use crate::error::RenderError;
use crate::selector::Locator;

#[derive(Debug, Clone, Default)]
pub struct ChromeOptions {
    /// Show the browser window instead of running headless.
    pub headful: bool,
    /// Chrome/Chromium binary; auto-detected when `None`.
    pub executable: Option<PathBuf>,
}

/// One browser with a single tab, reused for every navigation.
pub struct ChromeRenderer {
    browser: Browser,
    page: Page,
    handler: Option<JoinHandle<()>>,
}

fn browser_err(e: impl std::fmt::Display) -> RenderError {
    RenderError::Browser(e.to_string())
}

impl ChromeRenderer {
    pub async fn launch(options: ChromeOptions) -> Result<Self, RenderError> {
        let mut builder = BrowserConfig::builder();
        if options.headful {
            builder = builder.with_head();
        }
        if let Some(path) = options.executable {
            builder = builder.chrome_executable(path);
        }
        let config = builder.build().map_err(RenderError::Browser)?;

        let (browser, mut handler) = Browser::launch(config).await.map_err(browser_err)?;
        let handle = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                handle.abort();
                return Err(browser_err(e));
            }
        };
        debug!("Chromium session started");

        Ok(Self {
            browser,
            page,
            handler: Some(handle),
        })
    }
}

#[async_trait]
impl Renderer for ChromeRenderer {
    type Element = Element;

    async fn navigate(&mut self, url: &str) -> Result<(), RenderError> {
        self.page.goto(url).await.map_err(|e| RenderError::Navigation {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    async fn current_markup(&mut self) -> Result<String, RenderError> {
        self.page.content().await.map_err(browser_err)
    }

    async fn find_one(&mut self, locator: &Locator) -> Result<Option<Element>, RenderError> {
        Ok(self.find_all(locator).await?.into_iter().next())
    }

    async fn find_all(&mut self, locator: &Locator) -> Result<Vec<Element>, RenderError> {
        self.page
            .find_elements(locator.as_str())
            .await
            .map_err(browser_err)
    }

    async fn click(&mut self, element: &Element) -> Result<(), RenderError> {
        element.click().await.map_err(browser_err)?;
        Ok(())
    }

    async fn inner_html(&mut self, element: &Element) -> Result<String, RenderError> {
        Ok(element
            .inner_html()
            .await
            .map_err(browser_err)?
            .unwrap_or_default())
    }

    async fn attribute(
        &mut self,
        element: &Element,
        name: &str,
    ) -> Result<Option<String>, RenderError> {
        element.attribute(name).await.map_err(browser_err)
    }

    async fn close(&mut self) -> Result<(), RenderError> {
        let Some(handle) = self.handler.take() else {
            return Ok(());
        };
        let closed = self.browser.close().await.map(|_| ()).map_err(browser_err);
        if let Err(e) = self.browser.wait().await {
            warn!("Chromium did not exit cleanly: {}", e);
        }
        handle.abort();
        closed
    }
}
