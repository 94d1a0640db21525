use crate::Result;
use async_trait::async_trait;
use std::fmt;

#[async_trait]
pub trait SummaryModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Summarize the article behind `url` via the remote service.
    async fn summarize_url(&self, url: &str) -> Result<String>;
}
