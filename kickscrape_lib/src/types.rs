//! Records produced by a scrape run.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Project detail-page links in first-seen order, without duplicates.
#[derive(Debug, Clone, Default)]
pub struct ProjectLinks {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl ProjectLinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `link` unless already present. Returns whether it was new.
    pub fn insert(&mut self, link: String) -> bool {
        if self.seen.contains(&link) {
            return false;
        }
        self.seen.insert(link.clone());
        self.ordered.push(link);
        true
    }

    pub fn contains(&self, link: &str) -> bool {
        self.seen.contains(link)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.ordered.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

impl IntoIterator for ProjectLinks {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.ordered.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProjectLinks {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.ordered.iter()
    }
}

impl FromIterator<String> for ProjectLinks {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut links = Self::new();
        for link in iter {
            links.insert(link);
        }
        links
    }
}

/// One project's extracted fields. Missing values serialize as `null`;
/// `Text` and `AllOrNothing` are omitted unless enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: usize,
    pub url: String,
    #[serde(rename = "Creator")]
    pub creator: Option<String>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Text", default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "DollarsPledged")]
    pub dollars_pledged: Option<String>,
    #[serde(rename = "DollarsGoal")]
    pub dollars_goal: Option<String>,
    #[serde(rename = "NumBackers")]
    pub num_backers: Option<String>,
    #[serde(rename = "DaysToGo")]
    pub days_to_go: Option<String>,
    #[serde(rename = "AllOrNothing", default, skip_serializing_if = "Option::is_none")]
    pub all_or_nothing: Option<String>,
}

impl ProjectRecord {
    /// Number of core fields (creator through days to go) that were found.
    pub fn found_fields(&self) -> usize {
        [
            &self.creator,
            &self.title,
            &self.dollars_pledged,
            &self.dollars_goal,
            &self.num_backers,
            &self.days_to_go,
        ]
        .iter()
        .filter(|field| field.is_some())
        .count()
    }
}

/// The serialized document: `{ "projects": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectCollection {
    pub projects: Vec<ProjectRecord>,
}

impl ProjectCollection {
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: usize) -> ProjectRecord {
        ProjectRecord {
            id,
            url: format!("https://www.kickstarter.com/projects/maker/p{}", id),
            creator: Some("Maker".into()),
            title: None,
            text: None,
            dollars_pledged: Some("$1,000".into()),
            dollars_goal: None,
            num_backers: None,
            days_to_go: None,
            all_or_nothing: None,
        }
    }

    #[test]
    fn duplicate_links_collapse() {
        let mut links = ProjectLinks::new();
        assert!(links.insert("https://a/1".into()));
        assert!(!links.insert("https://a/1".into()));
        assert!(links.insert("https://a/2".into()));
        assert_eq!(links.len(), 2);
        assert!(links.contains("https://a/1"));
    }

    #[test]
    fn links_keep_first_seen_order() {
        let links: ProjectLinks = ["c", "a", "c", "b", "a"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(links.into_vec(), vec!["c", "a", "b"]);
    }

    #[test]
    fn record_serializes_missing_as_null_and_omits_optional_extras() {
        let value = serde_json::to_value(record(1)).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["id"], 1);
        assert!(obj["Title"].is_null());
        assert!(obj["DaysToGo"].is_null());
        assert!(!obj.contains_key("Text"));
        assert!(!obj.contains_key("AllOrNothing"));
    }

    #[test]
    fn record_keys_follow_field_order() {
        let mut rec = record(3);
        rec.text = Some("<html></html>".into());
        rec.all_or_nothing = Some("All or nothing. ".into());
        let json = serde_json::to_string(&rec).unwrap();
        let keys = [
            "\"id\"",
            "\"url\"",
            "\"Creator\"",
            "\"Title\"",
            "\"Text\"",
            "\"DollarsPledged\"",
            "\"DollarsGoal\"",
            "\"NumBackers\"",
            "\"DaysToGo\"",
            "\"AllOrNothing\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn found_fields_counts_core_values() {
        assert_eq!(record(1).found_fields(), 2);
    }
}
