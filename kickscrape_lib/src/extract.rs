//! Field extraction for one rendered project page.

use scraper::Selector;
use tracing::warn;

use crate::error::ScrapeError;
use crate::selector::Document;
use crate::site;
use crate::types::ProjectRecord;

const HOURS_IN_DAY: f64 = 24.0;

/// Optional fields added to every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Store the full rendered markup under `Text`.
    pub capture_full_text: bool,
    /// Store the funding-model label under `AllOrNothing`.
    pub include_funding_model: bool,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DerivationError {
    #[error("cannot convert `{raw}` hours to days")]
    NonNumericHours { raw: String },
}

struct FieldRules {
    creator: Selector,
    title: Selector,
    dollars_pledged: Selector,
    dollars_goal: Selector,
    num_backers: Selector,
    time_left: Selector,
    time_units: Selector,
    funding_label: Selector,
    funding_qualifier: Selector,
}

/// Turns rendered project pages into [`ProjectRecord`]s.
///
/// Every field is located independently. A field whose element is absent,
/// or whose derivation fails, is stored as `None`; extraction itself never
/// fails.
pub struct FieldExtractor {
    options: ExtractOptions,
    rules: FieldRules,
}

impl FieldExtractor {
    pub fn new(options: ExtractOptions) -> Result<Self, ScrapeError> {
        let rules = FieldRules {
            creator: site::creator().compile()?,
            title: site::title().compile()?,
            dollars_pledged: site::dollars_pledged().compile()?,
            dollars_goal: site::dollars_goal().compile()?,
            num_backers: site::num_backers().compile()?,
            time_left: site::time_left().compile()?,
            time_units: site::time_units().compile()?,
            funding_label: site::funding_label().compile()?,
            funding_qualifier: site::funding_qualifier().compile()?,
        };
        Ok(Self { options, rules })
    }

    pub fn options(&self) -> ExtractOptions {
        self.options
    }

    pub fn extract(&self, html: &str, id: usize, url: &str) -> ProjectRecord {
        let doc = Document::parse(html);
        let rules = &self.rules;
        let numeric = |selector: &Selector| doc.first_text(selector).map(|v| restore_delimiters(&v));

        ProjectRecord {
            id,
            url: url.to_string(),
            creator: doc.first_text(&rules.creator),
            title: doc.first_text(&rules.title),
            text: self.options.capture_full_text.then(|| html.to_string()),
            dollars_pledged: numeric(&rules.dollars_pledged),
            dollars_goal: numeric(&rules.dollars_goal),
            num_backers: numeric(&rules.num_backers),
            days_to_go: self.days_to_go(&doc, url),
            all_or_nothing: self
                .options
                .include_funding_model
                .then(|| self.funding_model(&doc)),
        }
    }

    fn days_to_go(&self, doc: &Document, url: &str) -> Option<String> {
        let raw = doc.first_text(&self.rules.time_left)?;
        let units = doc.first_text(&self.rules.time_units);
        match normalize_days(&raw, units.as_deref()) {
            Ok(days) => Some(restore_delimiters(&days)),
            Err(e) => {
                warn!("DaysToGo dropped for {}: {}", url, e);
                None
            }
        }
    }

    fn funding_model(&self, doc: &Document) -> String {
        let label = doc.first_text(&self.rules.funding_label).unwrap_or_default();
        let qualifier = doc
            .first_text(&self.rules.funding_qualifier)
            .unwrap_or_default();
        format!("{} {}", label, qualifier)
    }
}

/// Replaces the thousands-separator placeholder with a comma.
pub fn restore_delimiters(value: &str) -> String {
    value.replace(site::DELIMITER_PLACEHOLDER, ",")
}

/// Converts a remaining-time value to days when `units` starts with `hours`;
/// any other value passes through unchanged.
pub fn normalize_days(raw: &str, units: Option<&str>) -> Result<String, DerivationError> {
    match units {
        Some(units) if units.starts_with("hours") => {
            let hours: f64 = raw
                .trim()
                .parse()
                .map_err(|_| DerivationError::NonNumericHours {
                    raw: raw.to_string(),
                })?;
            Ok(format_decimal(hours / HOURS_IN_DAY))
        }
        _ => Ok(raw.to_string()),
    }
}

/// Shortest round-trip decimal form, keeping a `.0` on integral values.
fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
