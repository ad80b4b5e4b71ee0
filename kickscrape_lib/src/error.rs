//! Error types for the scraping pipeline.

use reqwest::StatusCode;

/// Errors raised by a [`Renderer`](crate::render::Renderer) session.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} for {url}")]
    HttpStatus { url: String, status: StatusCode },
    #[error("invalid url `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },
    #[error("invalid locator `{0}`")]
    InvalidLocator(String),
    #[error("unsupported interaction: {0}")]
    Unsupported(String),
    #[error("browser error: {0}")]
    Browser(String),
    #[error("no page loaded")]
    NoPage,
}

/// Errors that abort a scrape run or reject its configuration.
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    #[error("listing page {url} unreachable: {source}")]
    ListingUnreachable {
        url: String,
        #[source]
        source: RenderError,
    },
    #[error("load-more control not found on listing page {url}")]
    LoadMoreMissing { url: String },
    #[error("render error: {0}")]
    Render(#[from] RenderError),
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
