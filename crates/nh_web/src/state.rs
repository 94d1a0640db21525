use nh_core::DecisionStore;
use nh_extract::DescriptionPipeline;
use nh_feeds::{FeedClient, FeedSource};
use std::sync::Arc;

pub struct AppState {
    pub pipeline: DescriptionPipeline,
    pub feeds: FeedClient,
    pub sources: Vec<FeedSource>,
    pub store: Arc<dyn DecisionStore>,
}

impl AppState {
    pub fn new(pipeline: DescriptionPipeline, store: Arc<dyn DecisionStore>) -> Self {
        Self {
            pipeline,
            feeds: FeedClient::new(),
            sources: nh_feeds::builtin_sources(),
            store,
        }
    }

    pub fn with_sources(mut self, sources: Vec<FeedSource>) -> Self {
        self.sources = sources;
        self
    }
}
