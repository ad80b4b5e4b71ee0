//! Renderer abstraction over a controllable page session.
//!
//! The collector owns exactly one [`Renderer`] for a whole run and drives it
//! sequentially: listing discovery first, then every project page.

#[cfg(feature = "browser")]
pub mod chrome;
pub mod http;

use async_trait::async_trait;

use crate::error::RenderError;
use crate::selector::Locator;

#[cfg(feature = "browser")]
pub use chrome::{ChromeOptions, ChromeRenderer};
pub use http::{HttpRenderer, StaticElement};

/// A page session that can navigate, expose markup and interact with elements.
#[async_trait]
pub trait Renderer: Send {
    /// Handle to an element of the current page.
    type Element: Send + Sync;

    /// Loads `url`, replacing the current page.
    async fn navigate(&mut self, url: &str) -> Result<(), RenderError>;

    /// Markup of the current page after client-side rendering.
    async fn current_markup(&mut self) -> Result<String, RenderError>;

    /// First element matching `locator`, if any.
    async fn find_one(&mut self, locator: &Locator) -> Result<Option<Self::Element>, RenderError>;

    async fn find_all(&mut self, locator: &Locator) -> Result<Vec<Self::Element>, RenderError>;

    async fn click(&mut self, element: &Self::Element) -> Result<(), RenderError>;

    async fn inner_html(&mut self, element: &Self::Element) -> Result<String, RenderError>;

    async fn attribute(
        &mut self,
        element: &Self::Element,
        name: &str,
    ) -> Result<Option<String>, RenderError>;

    /// Releases the session. Calling it more than once is a no-op.
    async fn close(&mut self) -> Result<(), RenderError>;
}
