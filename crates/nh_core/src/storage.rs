use crate::types::{DecisionFilter, DecisionRecord};
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait DecisionStore: Send + Sync {
    /// Insert or update the decision for `record.link`. At most one record
    /// exists per link; the incoming record's fields win on update.
    async fn save_decision(&self, record: &DecisionRecord) -> Result<()>;

    /// Stored decisions matching `filter`, newest `saved_at` first.
    async fn list_decisions(&self, filter: &DecisionFilter) -> Result<Vec<DecisionRecord>>;

    /// Look up the decision for a single link.
    async fn get_by_link(&self, link: &str) -> Result<Option<DecisionRecord>>;
}
