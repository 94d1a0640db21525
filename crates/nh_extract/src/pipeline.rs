use crate::cache::DescriptionCache;
use crate::filter;
use crate::local::{ArticlePage, HttpFetcher, PageFetcher};
use nh_core::ExtractionResult;
use nh_inference::RemoteFallback;
use std::sync::Arc;

/// Outcome of the local stage: either an accepted candidate or a normal
/// transition to the remote fallback. Download and parse failures collapse
/// into `NoCandidate`; they are not errors at this level.
enum LocalOutcome {
    Accepted(ExtractionResult),
    NoCandidate,
}

/// Sequences cache check, local extraction, quality filtering, and the
/// remote fallback. `extract_description` always returns a usable string;
/// nothing in the pipeline is fatal.
///
/// The cache is injected rather than global so hosts control its lifetime,
/// and sentinel results are cached like any other (clear the cache to
/// retry).
pub struct DescriptionPipeline {
    fetcher: Arc<dyn PageFetcher>,
    fallback: RemoteFallback,
    cache: Arc<DescriptionCache>,
}

impl DescriptionPipeline {
    pub fn new(fallback: RemoteFallback) -> Self {
        Self {
            fetcher: Arc::new(HttpFetcher::new()),
            fallback,
            cache: Arc::new(DescriptionCache::new()),
        }
    }

    pub fn with_fetcher(mut self, fetcher: Arc<dyn PageFetcher>) -> Self {
        self.fetcher = fetcher;
        self
    }

    pub fn with_cache(mut self, cache: Arc<DescriptionCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn cache(&self) -> &Arc<DescriptionCache> {
        &self.cache
    }

    /// The single public entry point: a description for `url`, from cache,
    /// local extraction, or the remote fallback, in that order.
    pub async fn extract_description(&self, url: &str) -> String {
        self.extract(url).await.description
    }

    /// Like [`extract_description`](Self::extract_description) but keeps
    /// the origin tag, for diagnostics and tests.
    pub async fn extract(&self, url: &str) -> ExtractionResult {
        let cell = self.cache.entry(url).await;
        cell.get_or_init(|| self.compute(url)).await.clone()
    }

    async fn compute(&self, url: &str) -> ExtractionResult {
        match self.local_extraction(url).await {
            LocalOutcome::Accepted(result) => {
                tracing::debug!("local extraction for {} via {:?}", url, result.origin);
                result
            }
            LocalOutcome::NoCandidate => {
                tracing::debug!("no local candidate for {}, using remote fallback", url);
                self.fallback.describe(url).await
            }
        }
    }

    async fn local_extraction(&self, url: &str) -> LocalOutcome {
        let html = match self.fetcher.fetch(url).await {
            Ok(html) => html,
            Err(e) => {
                tracing::debug!("article fetch failed for {}: {}", url, e);
                return LocalOutcome::NoCandidate;
            }
        };

        let page = ArticlePage::parse(&html);
        for (origin, candidate) in page.candidates() {
            if filter::is_acceptable(&candidate, &page.title) {
                return LocalOutcome::Accepted(ExtractionResult {
                    description: filter::truncate(&candidate),
                    origin,
                });
            }
        }
        LocalOutcome::NoCandidate
    }
}
