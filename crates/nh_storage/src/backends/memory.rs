use async_trait::async_trait;
use nh_core::{DecisionFilter, DecisionRecord, DecisionStore, Result};
use tokio::sync::RwLock;

/// In-memory decision store. Upsert key is the article link: at most one
/// record exists per link, and a later save replaces the whole record.
pub struct MemoryDecisionStore {
    records: RwLock<Vec<DecisionRecord>>,
}

impl MemoryDecisionStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryDecisionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DecisionStore for MemoryDecisionStore {
    async fn save_decision(&self, record: &DecisionRecord) -> Result<()> {
        let mut records = self.records.write().await;
        if let Some(existing) = records.iter_mut().find(|r| r.link == record.link) {
            *existing = record.clone();
        } else {
            records.push(record.clone());
        }
        Ok(())
    }

    async fn list_decisions(&self, filter: &DecisionFilter) -> Result<Vec<DecisionRecord>> {
        let records = self.records.read().await;
        let mut matched: Vec<DecisionRecord> = records
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(matched)
    }

    async fn get_by_link(&self, link: &str) -> Result<Option<DecisionRecord>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.link == link).cloned())
    }
}
