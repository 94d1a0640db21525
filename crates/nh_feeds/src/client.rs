use crate::sources::FeedSource;
use chrono::DateTime;
use nh_core::{text, Error, FeedItem, Result};
use std::time::Duration;

const FEED_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = "newshub/0.1 (+https://github.com/newshub)";

pub struct FeedClient {
    client: reqwest::Client,
}

impl FeedClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(FEED_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }

    /// Fetch and parse one feed.
    pub async fn fetch(&self, source: &FeedSource) -> Result<Vec<FeedItem>> {
        let response = self.client.get(&source.url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Feed(format!(
                "{} returned {}",
                source.url,
                response.status()
            )));
        }
        let content = response.bytes().await?;
        parse_feed(&content, &source.name)
    }

    /// Fetch every source; a failing feed is logged and skipped so one dead
    /// source never hides the others.
    pub async fn fetch_all(&self, sources: &[FeedSource]) -> Vec<FeedItem> {
        let mut items = Vec::new();
        for source in sources {
            match self.fetch(source).await {
                Ok(mut fetched) => {
                    tracing::info!("fetched {} items from {}", fetched.len(), source.name);
                    items.append(&mut fetched);
                }
                Err(e) => {
                    tracing::warn!("failed to fetch feed {}: {}", source.name, e);
                }
            }
        }
        items
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse raw feed bytes as RSS, then Atom.
pub fn parse_feed(content: &[u8], source_name: &str) -> Result<Vec<FeedItem>> {
    if let Ok(channel) = rss::Channel::read_from(content) {
        return Ok(parse_rss_channel(&channel, source_name));
    }
    if let Ok(feed) = atom_syndication::Feed::read_from(content) {
        return Ok(parse_atom_feed(&feed, source_name));
    }
    Err(Error::Feed(format!(
        "{}: content is neither RSS nor Atom",
        source_name
    )))
}

fn parse_rss_channel(channel: &rss::Channel, source_name: &str) -> Vec<FeedItem> {
    channel
        .items()
        .iter()
        .filter_map(|item| {
            let title = item.title()?.to_string();
            let link = item.link()?.to_string();
            let description = text::normalize(item.description().unwrap_or_default());
            let published_date = item
                .pub_date()
                .map(normalize_date)
                .unwrap_or_default();
            Some(FeedItem {
                title,
                link,
                description,
                published_date,
                source: source_name.to_string(),
                image: rss_item_image(item),
            })
        })
        .collect()
}

fn parse_atom_feed(feed: &atom_syndication::Feed, source_name: &str) -> Vec<FeedItem> {
    feed.entries()
        .iter()
        .filter_map(|entry| {
            let link = entry.links().first().map(|l| l.href().to_string())?;
            let raw_summary = entry
                .summary()
                .map(|s| s.as_str().to_string())
                .or_else(|| {
                    entry
                        .content()
                        .and_then(|c| c.value())
                        .map(|v| v.to_string())
                })
                .unwrap_or_default();
            let published_date = entry
                .published()
                .unwrap_or_else(|| entry.updated())
                .format("%Y-%m-%d")
                .to_string();
            Some(FeedItem {
                title: entry.title().to_string(),
                link,
                description: text::normalize(&raw_summary),
                published_date,
                source: source_name.to_string(),
                image: String::new(),
            })
        })
        .collect()
}

/// Feed dates arrive in whatever format the publisher chose; reduce them
/// all to `YYYY-MM-DD`, or empty when unparseable.
fn normalize_date(raw: &str) -> String {
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// First usable thumbnail: media:content, then media:thumbnail, then an
/// image enclosure.
fn rss_item_image(item: &rss::Item) -> String {
    if let Some(media) = item.extensions().get("media") {
        for key in ["content", "thumbnail"] {
            if let Some(url) = media
                .get(key)
                .and_then(|exts| exts.first())
                .and_then(|ext| ext.attrs().get("url"))
            {
                return url.clone();
            }
        }
    }
    item.enclosure()
        .filter(|enclosure| enclosure.mime_type().starts_with("image/"))
        .map(|enclosure| enclosure.url().to_string())
        .unwrap_or_default()
}
