//! PlanRecord - A completion plan saved under a name

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CompletionPlan, PlanId};

/// A named, persisted completion plan.
///
/// This is also the unit of plan export and import, so every field is
/// required when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRecord {
    id: PlanId,
    name: String,
    plan: CompletionPlan,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PlanRecord {
    pub fn new(name: impl Into<String>, plan: CompletionPlan, now: DateTime<Utc>) -> Self {
        Self {
            id: PlanId::new(),
            name: name.into(),
            plan,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> PlanId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn plan(&self) -> &CompletionPlan {
        &self.plan
    }

    /// The same record stored under another name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replace the stored plan wholesale, keeping identity and creation time.
    pub fn replace_plan(&mut self, plan: CompletionPlan, now: DateTime<Utc>) {
        self.plan = plan;
        self.updated_at = now;
    }
}
