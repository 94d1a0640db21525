use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One entry pulled from an RSS/Atom feed. Immutable once fetched; `link`
/// is the canonical identity of the article everywhere in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub description: String,
    /// `YYYY-MM-DD`, or empty when the feed carried no usable date.
    #[serde(default)]
    pub published_date: String,
    pub source: String,
    #[serde(default)]
    pub image: String,
}

/// Which pipeline stage produced a description. Kept internal for
/// diagnostics and tests; not serialized over the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionOrigin {
    LocalSummary,
    LocalMetaDescription,
    LocalFullText,
    RemoteFallback,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub description: String,
    pub origin: DescriptionOrigin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionStatus {
    Accepted,
    Rejected,
    Pending,
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionStatus::Accepted => write!(f, "Accepted"),
            DecisionStatus::Rejected => write!(f, "Rejected"),
            DecisionStatus::Pending => write!(f, "Pending"),
        }
    }
}

impl FromStr for DecisionStatus {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Accepted" => Ok(DecisionStatus::Accepted),
            "Rejected" => Ok(DecisionStatus::Rejected),
            "Pending" => Ok(DecisionStatus::Pending),
            other => Err(crate::Error::Parse(format!(
                "unknown decision status: {}",
                other
            ))),
        }
    }
}

/// A curator decision persisted to the document store, one per `link`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub title: String,
    pub description: String,
    pub published_date: String,
    pub source: String,
    pub link: String,
    pub status: DecisionStatus,
    pub saved_at: DateTime<Utc>,
}

impl DecisionRecord {
    pub fn from_item(item: &FeedItem, status: DecisionStatus) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            published_date: item.published_date.clone(),
            source: item.source.clone(),
            link: item.link.clone(),
            status,
            saved_at: Utc::now(),
        }
    }
}

/// Query over stored decisions: status, `saved_at` date range, and a
/// case-insensitive keyword over title + description.
#[derive(Debug, Clone, Default)]
pub struct DecisionFilter {
    pub status: Option<DecisionStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub keyword: Option<String>,
}

impl DecisionFilter {
    pub fn matches(&self, record: &DecisionRecord) -> bool {
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        let saved_on = record.saved_at.date_naive();
        if let Some(start) = self.start_date {
            if saved_on < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if saved_on > end {
                return false;
            }
        }
        if let Some(keyword) = &self.keyword {
            let keyword = keyword.to_lowercase();
            if !keyword.is_empty() {
                let text = format!("{}{}", record.title, record.description).to_lowercase();
                if !text.contains(&keyword) {
                    return false;
                }
            }
        }
        true
    }
}
