use url::Url;

use crate::error::ScrapeError;

pub const MAX_TARGET_COUNT: usize = 5000;
pub const MAX_ITEMS_PER_PAGE: usize = 100;

/// Validates the number of projects to load (1-5000).
pub fn validate_target_count(count: usize) -> Result<usize, ScrapeError> {
    if count == 0 || count > MAX_TARGET_COUNT {
        return Err(ScrapeError::InvalidInput(format!(
            "target count must be between 1 and {}, got {}",
            MAX_TARGET_COUNT, count
        )));
    }
    Ok(count)
}

/// Validates the listing page size (1-100).
pub fn validate_items_per_page(size: usize) -> Result<usize, ScrapeError> {
    if size == 0 || size > MAX_ITEMS_PER_PAGE {
        return Err(ScrapeError::InvalidInput(format!(
            "items per page must be between 1 and {}, got {}",
            MAX_ITEMS_PER_PAGE, size
        )));
    }
    Ok(size)
}

/// Validates that the listing URL is an absolute http(s) URL.
pub fn validate_listing_url(input: &str) -> Result<Url, ScrapeError> {
    let trimmed = input.trim();
    let url = Url::parse(trimmed).map_err(|e| {
        ScrapeError::InvalidInput(format!("invalid listing url '{}': {}", trimmed, e))
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ScrapeError::InvalidInput(format!(
            "listing url must use http or https, got '{}'",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_count_bounds() {
        assert_eq!(validate_target_count(1).unwrap(), 1);
        assert_eq!(validate_target_count(300).unwrap(), 300);
        assert_eq!(validate_target_count(MAX_TARGET_COUNT).unwrap(), MAX_TARGET_COUNT);
        assert!(validate_target_count(0).is_err());
        assert!(validate_target_count(MAX_TARGET_COUNT + 1).is_err());
    }

    #[test]
    fn items_per_page_bounds() {
        assert_eq!(validate_items_per_page(12).unwrap(), 12);
        assert!(validate_items_per_page(0).is_err());
        assert!(validate_items_per_page(101).is_err());
    }

    #[test]
    fn listing_url_accepts_http_and_https() {
        assert!(validate_listing_url("https://www.kickstarter.com/discover").is_ok());
        assert!(validate_listing_url("  http://127.0.0.1:8080/listing ").is_ok());
    }

    #[test]
    fn listing_url_rejects_relative_and_other_schemes() {
        assert!(validate_listing_url("/discover/categories/technology").is_err());
        assert!(validate_listing_url("ftp://example.com/listing").is_err());
        assert!(validate_listing_url("").is_err());
    }
}
