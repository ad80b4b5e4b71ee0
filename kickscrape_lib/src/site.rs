//! Page layout of the Kickstarter discover listing and project pages.

use crate::selector::Locator;

pub const KICKSTARTER_URL: &str = "https://www.kickstarter.com/discover/categories/technology";

/// Marker the page uses in place of thousands separators in some numbers.
pub const DELIMITER_PLACEHOLDER: &str = "Delimiter";

const LOAD_MORE_BUTTON: &str = "bttn bttn-green bttn-medium";
const PROJECT_LINK: &str = "clamp-5 navy-500 mb3 hover-target";
const CREATOR: &str = "type-14 bold";
const TITLE: &str = "type-28 type-24-md soft-black mb1 project-name";
const DOLLARS_PLEDGED: &str = "ksr-green-500";
const DOLLARS_GOAL: &str = "money";
const STAT_BLOCK: &str = "block type-16 type-28-md bold dark-grey-500";
const TIME_UNITS: &str = "block navy-600 type-12 type-14-md lh3-lg";
const FUNDING_LABEL: &str = "link-soft-black medium";
const FUNDING_QUALIFIER: &str = "type-12 medium navy-700";

pub fn load_more_button() -> Locator {
    Locator::class(LOAD_MORE_BUTTON)
}

/// Container wrapping each project card's anchor on the listing page.
pub fn project_link() -> Locator {
    Locator::class(PROJECT_LINK)
}

pub fn creator() -> Locator {
    Locator::class(CREATOR)
}

pub fn title() -> Locator {
    Locator::class(TITLE)
}

pub fn dollars_pledged() -> Locator {
    Locator::class(DOLLARS_PLEDGED)
}

pub fn dollars_goal() -> Locator {
    Locator::class(DOLLARS_GOAL)
}

/// The backer count sits in a `span` inside the first stat block.
pub fn num_backers() -> Locator {
    Locator::class(STAT_BLOCK).child("span")
}

/// Own text of the stat blocks; the backers block has none, so the first
/// hit is the remaining-time value.
pub fn time_left() -> Locator {
    Locator::class(STAT_BLOCK)
}

pub fn time_units() -> Locator {
    Locator::class(TIME_UNITS)
}

pub fn funding_label() -> Locator {
    Locator::class(FUNDING_LABEL)
}

pub fn funding_qualifier() -> Locator {
    Locator::class(FUNDING_QUALIFIER)
}
