//! In-memory plan store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use questforge_domain::PlanRecord;
use tokio::sync::RwLock;

use crate::infrastructure::ports::{PlanStore, RepoError};

/// Plans kept in a process-local map, keyed by name.
#[derive(Default)]
pub struct InMemoryPlanStore {
    plans: RwLock<BTreeMap<String, PlanRecord>>,
}

impl InMemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlanStore for InMemoryPlanStore {
    async fn save(&self, record: &PlanRecord) -> Result<(), RepoError> {
        self.plans
            .write()
            .await
            .insert(record.name().to_string(), record.clone());
        Ok(())
    }

    async fn load(&self, name: &str) -> Result<Option<PlanRecord>, RepoError> {
        Ok(self.plans.read().await.get(name).cloned())
    }

    async fn list(&self) -> Result<Vec<String>, RepoError> {
        Ok(self.plans.read().await.keys().cloned().collect())
    }

    async fn delete(&self, name: &str) -> Result<bool, RepoError> {
        Ok(self.plans.write().await.remove(name).is_some())
    }
}
