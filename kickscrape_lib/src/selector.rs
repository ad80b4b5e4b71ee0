//! Declarative location rules over rendered markup.
//!
//! A [`Locator`] is a CSS selector string. Site rules are written as exact
//! `class` attribute matches (`[class="type-14 bold"]`), optionally followed
//! by a child step (`[class="..."] > span`), so a rule matches the same
//! nodes whether it is evaluated by a live browser or by [`Document`].

use std::fmt;

use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;

/// A declarative, CSS-based location rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator(String);

impl Locator {
    pub fn css(selector: impl Into<String>) -> Self {
        Self(selector.into())
    }

    /// Matches elements whose `class` attribute equals `classes` exactly.
    pub fn class(classes: &str) -> Self {
        Self(format!("[class=\"{}\"]", classes))
    }

    /// Narrows this locator to direct `tag` children of its matches.
    pub fn child(&self, tag: &str) -> Self {
        Self(format!("{} > {}", self.0, tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn compile(&self) -> Result<Selector, ScrapeError> {
        Selector::parse(&self.0).map_err(|e| ScrapeError::InvalidSelector {
            selector: self.0.clone(),
            reason: e.to_string(),
        })
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parsed markup that rules are evaluated against.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Parses a markup fragment, such as an element's inner HTML.
    pub fn fragment(markup: &str) -> Self {
        Self {
            html: Html::parse_fragment(markup),
        }
    }

    /// Returns the first non-blank direct text node among all matches, in
    /// document order, trimmed. Text nested in child elements is ignored.
    pub fn first_text(&self, selector: &Selector) -> Option<String> {
        self.html.select(selector).find_map(own_text)
    }

    /// Returns the first non-blank value of attribute `name` among all matches.
    pub fn first_attr(&self, selector: &Selector, name: &str) -> Option<String> {
        self.html
            .select(selector)
            .filter_map(|el| el.value().attr(name))
            .map(str::trim)
            .find(|value| !value.is_empty())
            .map(str::to_string)
    }

    pub fn count(&self, selector: &Selector) -> usize {
        self.html.select(selector).count()
    }
}

fn own_text(element: ElementRef<'_>) -> Option<String> {
    element
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|text| text.trim())
        .find(|text| !text.is_empty())
        .map(str::to_string)
}
