//! Saved plan operations.

use std::sync::Arc;

use questforge_domain::{CompletionPlan, PlanRecord};

use crate::infrastructure::ports::{ClockPort, PlanStore, RepoError};

/// Named plan persistence with timestamps.
pub struct Plans {
    store: Arc<dyn PlanStore>,
    clock: Arc<dyn ClockPort>,
}

impl Plans {
    pub fn new(store: Arc<dyn PlanStore>, clock: Arc<dyn ClockPort>) -> Self {
        Self { store, clock }
    }

    /// Save `plan` under `name`, replacing any plan already there.
    ///
    /// A replaced plan keeps its id and creation time.
    pub async fn save(&self, name: &str, plan: CompletionPlan) -> Result<PlanRecord, RepoError> {
        let now = self.clock.now();
        let record = match self.store.load(name).await? {
            Some(mut existing) => {
                existing.replace_plan(plan, now);
                existing
            }
            None => PlanRecord::new(name, plan, now),
        };
        self.store.save(&record).await?;
        Ok(record)
    }

    /// Store a complete record as-is, timestamps included.
    pub async fn put_record(&self, record: &PlanRecord) -> Result<(), RepoError> {
        self.store.save(record).await
    }

    pub async fn load(&self, name: &str) -> Result<Option<PlanRecord>, RepoError> {
        self.store.load(name).await
    }

    pub async fn list(&self) -> Result<Vec<String>, RepoError> {
        self.store.list().await
    }

    pub async fn delete(&self, name: &str) -> Result<bool, RepoError> {
        self.store.delete(name).await
    }

    pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.clock.now()
    }
}
