use nh_core::ExtractionResult;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};

const DEFAULT_CAPACITY: usize = 4096;

/// Per-process memo of final descriptions, keyed by the raw article URL
/// (no normalization of scheme, query strings, or trailing slashes).
///
/// Each key maps to a once-cell, so concurrent first requests for the same
/// URL collapse into a single computation: the first caller initializes the
/// cell, the rest await it. Capacity is bounded; inserting past it evicts
/// the oldest key. An evicted in-flight cell stays alive for the callers
/// already holding it, and the next request for that URL recomputes.
pub struct DescriptionCache {
    capacity: usize,
    inner: Mutex<CacheInner>,
}

struct CacheInner {
    entries: HashMap<String, Arc<OnceCell<ExtractionResult>>>,
    order: VecDeque<String>,
}

impl DescriptionCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: Mutex::new(CacheInner {
                entries: HashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    /// The cell for `url`, creating (and possibly evicting) as needed.
    pub async fn entry(&self, url: &str) -> Arc<OnceCell<ExtractionResult>> {
        let mut inner = self.inner.lock().await;
        if let Some(cell) = inner.entries.get(url) {
            return cell.clone();
        }
        while inner.entries.len() >= self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.entries.remove(&oldest);
            } else {
                break;
            }
        }
        let cell = Arc::new(OnceCell::new());
        inner.entries.insert(url.to_string(), cell.clone());
        inner.order.push_back(url.to_string());
        cell
    }

    /// A completed result for `url`, if one has been computed.
    pub async fn get(&self, url: &str) -> Option<ExtractionResult> {
        let inner = self.inner.lock().await;
        inner.entries.get(url).and_then(|cell| cell.get().cloned())
    }

    /// Number of keys present, including in-flight ones.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drop every entry. Hosts call this to force re-extraction, e.g. after
    /// a sentinel description was cached for a URL that has since become
    /// reachable.
    pub async fn clear(&self) {
        let mut inner = self.inner.lock().await;
        inner.entries.clear();
        inner.order.clear();
    }
}

impl Default for DescriptionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nh_core::DescriptionOrigin;

    fn result(text: &str) -> ExtractionResult {
        ExtractionResult {
            description: text.to_string(),
            origin: DescriptionOrigin::LocalFullText,
        }
    }

    #[tokio::test]
    async fn test_entry_is_stable_per_url() {
        let cache = DescriptionCache::new();
        let cell = cache.entry("https://example.com/a").await;
        cell.set(result("first")).unwrap();

        let again = cache.entry("https://example.com/a").await;
        assert_eq!(again.get().unwrap().description, "first");
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_ignores_in_flight_entries() {
        let cache = DescriptionCache::new();
        let _cell = cache.entry("https://example.com/a").await;
        assert!(cache.get("https://example.com/a").await.is_none());
    }

    #[tokio::test]
    async fn test_urls_are_not_normalized() {
        let cache = DescriptionCache::new();
        cache
            .entry("https://example.com/a")
            .await
            .set(result("plain"))
            .unwrap();
        assert!(cache.get("https://example.com/a/").await.is_none());
        assert!(cache.get("https://example.com/a?x=1").await.is_none());
    }

    #[tokio::test]
    async fn test_eviction_drops_oldest() {
        let cache = DescriptionCache::with_capacity(2);
        cache.entry("a").await.set(result("a")).unwrap();
        cache.entry("b").await.set(result("b")).unwrap();
        cache.entry("c").await.set(result("c")).unwrap();

        assert_eq!(cache.len().await, 2);
        assert!(cache.get("a").await.is_none());
        assert!(cache.get("b").await.is_some());
        assert!(cache.get("c").await.is_some());
    }

    #[tokio::test]
    async fn test_clear() {
        let cache = DescriptionCache::new();
        cache.entry("a").await.set(result("a")).unwrap();
        cache.clear().await;
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_concurrent_misses_share_one_computation() {
        let cache = Arc::new(DescriptionCache::new());
        let computations = Arc::new(std::sync::atomic::AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = cache.clone();
            let computations = computations.clone();
            handles.push(tokio::spawn(async move {
                let cell = cache.entry("https://example.com/a").await;
                cell.get_or_init(|| async {
                    computations.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                    result("computed")
                })
                .await
                .clone()
            }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap().description, "computed");
        }
        assert_eq!(computations.load(std::sync::atomic::Ordering::SeqCst), 1);
    }
}
