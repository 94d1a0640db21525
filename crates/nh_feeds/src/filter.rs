use chrono::NaiveDate;
use nh_core::FeedItem;

/// Date-window + keyword filter applied to freshly fetched items. Items
/// without a parseable published date are dropped; the curator only works
/// with dateable news.
#[derive(Debug, Clone)]
pub struct ItemFilter {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub keyword: Option<String>,
}

impl ItemFilter {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            keyword: None,
        }
    }

    pub fn with_keyword(mut self, keyword: Option<String>) -> Self {
        self.keyword = keyword.filter(|k| !k.trim().is_empty());
        self
    }

    pub fn matches(&self, item: &FeedItem) -> bool {
        let Ok(published) = NaiveDate::parse_from_str(&item.published_date, "%Y-%m-%d") else {
            return false;
        };
        if published < self.start_date || published > self.end_date {
            return false;
        }
        if let Some(keyword) = &self.keyword {
            let text = format!("{}{}", item.title, item.description).to_lowercase();
            if !text.contains(&keyword.to_lowercase()) {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, items: Vec<FeedItem>) -> Vec<FeedItem> {
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}
