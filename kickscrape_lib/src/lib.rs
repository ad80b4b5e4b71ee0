//! Library layer for kickscrape: crawls the Kickstarter discover listing,
//! loads more projects through the page's own "load more" control, and
//! extracts each project page into a JSON-ready record.
//!
//! A [`ProjectCollector`] owns one [`Renderer`] session for the whole run and
//! closes it when the run ends.

pub mod collector;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod pagination;
pub mod render;
pub mod selector;
pub mod site;
pub mod types;
pub mod validation;

pub use collector::{CollectOutcome, ProjectCollector, Progress};
pub use config::ScrapeConfig;
pub use error::{RenderError, ScrapeError};
pub use extract::{ExtractOptions, FieldExtractor};
pub use render::{HttpRenderer, Renderer};
#[cfg(feature = "browser")]
pub use render::{ChromeOptions, ChromeRenderer};
pub use selector::Locator;
pub use types::{ProjectCollection, ProjectLinks, ProjectRecord};
