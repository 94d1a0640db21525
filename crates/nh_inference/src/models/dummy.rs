use async_trait::async_trait;
use nh_core::{Result, SummaryModel};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Canned-response model for tests and offline runs.
pub struct DummyModel {
    response: String,
    calls: AtomicUsize,
}

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel")
            .field("response", &self.response)
            .finish()
    }
}

impl DummyModel {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// How many times `summarize_url` has been invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SummaryModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn summarize_url(&self, _url: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}
