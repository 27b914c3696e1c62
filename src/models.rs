use crate::types::SearchItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest page GitHub's search API will serve.
pub const MAX_PAGE_SIZE: u32 = 100;

pub const UNKNOWN: &str = "unknown";
pub const NO_DESCRIPTION: &str = "No description";

/// Normalized repository summary, one per search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub html_url: String,
    pub stars: u64,
    pub owner: String,
    pub description: String,
}

impl From<SearchItem> for Repository {
    fn from(item: SearchItem) -> Self {
        let present = |value: Option<String>| value.filter(|s| !s.is_empty());

        Repository {
            name: present(item.name).unwrap_or_else(|| UNKNOWN.to_string()),
            html_url: item.html_url.unwrap_or_default(),
            stars: item.stargazers_count.unwrap_or(0),
            owner: present(item.owner.and_then(|o| o.login))
                .unwrap_or_else(|| UNKNOWN.to_string()),
            description: present(item.description)
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for one search run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub language: String,
    pub minimum_stars: u64,
    pub total: u32,
    pub order: SortOrder,
    pub page_size: u32,
}

impl SearchParams {
    /// Search expression sent as the `q` parameter
    pub fn query(&self) -> String {
        format!("language:{} stars:>={}", self.language, self.minimum_stars)
    }

    /// Page size clamped to `[1, min(100, total)]`
    pub fn effective_page_size(&self) -> u32 {
        let upper = MAX_PAGE_SIZE.min(self.total).max(1);
        self.page_size.clamp(1, upper)
    }

    /// Number of pages needed to collect `total` records, at least one
    pub fn page_count(&self) -> u32 {
        self.total.div_ceil(self.effective_page_size()).max(1)
    }
}

/// Rate limit state reported by the last response
#[derive(Debug, Clone)]
pub struct RateLimitState {
    pub remaining: u32,
    pub limit: u32,
    pub reset_time: Option<DateTime<Utc>>,
    pub is_limited: bool,
}
