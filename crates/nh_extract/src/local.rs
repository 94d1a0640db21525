use async_trait::async_trait;
use nh_core::text;
use nh_core::{DescriptionOrigin, Error, Result};
use scraper::{Html, Selector};
use std::time::Duration;
use url::Url;

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);
const USER_AGENT: &str = "newshub/0.1 (+https://github.com/newshub)";

/// Seam for the article page download, so the pipeline can be exercised
/// without a network.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let parsed =
            Url::parse(url).map_err(|e| Error::Fetch(format!("invalid URL {}: {}", url, e)))?;
        let response = self.client.get(parsed).send().await?;
        if !response.status().is_success() {
            return Err(Error::Fetch(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }
        Ok(response.text().await?)
    }
}

/// Structured view of an article page: the title plus the three description
/// candidates, in priority order.
#[derive(Debug, Clone)]
pub struct ArticlePage {
    pub title: String,
    pub summary: String,
    pub meta_description: String,
    pub body: String,
}

impl ArticlePage {
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);

        let title = select_text(&document, "h1")
            .or_else(|| select_text(&document, "title"))
            .unwrap_or_default();

        // The publisher-authored summary; og:description is the closest
        // thing an arbitrary page has to one.
        let summary = select_attr(&document, "meta[property='og:description']", "content")
            .unwrap_or_default();

        let meta_description =
            select_attr(&document, "meta[name='description']", "content").unwrap_or_default();

        let body = select_paragraphs(&document, "article p")
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| select_paragraphs(&document, "p").unwrap_or_default());

        Self {
            title: text::collapse_whitespace(&title),
            summary,
            meta_description,
            body,
        }
    }

    /// Whitespace-normalized candidates in priority order, empties dropped.
    pub fn candidates(&self) -> Vec<(DescriptionOrigin, String)> {
        [
            (DescriptionOrigin::LocalSummary, &self.summary),
            (DescriptionOrigin::LocalMetaDescription, &self.meta_description),
            (DescriptionOrigin::LocalFullText, &self.body),
        ]
        .into_iter()
        .map(|(origin, raw)| (origin, text::collapse_whitespace(raw)))
        .filter(|(_, candidate)| !candidate.is_empty())
        .collect()
    }
}

fn select_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

fn select_attr(document: &Html, selector: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn select_paragraphs(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    Some(
        document
            .select(&selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n"),
    )
}
