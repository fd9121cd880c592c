//! Quest catalog access.

use std::sync::Arc;

use questforge_domain::{DomainError, Priority, QuestId};

use crate::infrastructure::ports::QuestCatalog;
use crate::use_cases::dependency::PrerequisiteAnalyzer;

/// Read-only quest catalog operations.
pub struct Catalog {
    catalog: Arc<dyn QuestCatalog>,
}

impl Catalog {
    pub fn new(catalog: Arc<dyn QuestCatalog>) -> Self {
        Self { catalog }
    }

    /// Ids of the quests tagged with `location`, in catalog order.
    pub fn ids_at_location(&self, location: &str) -> Vec<QuestId> {
        self.catalog
            .quests_by_location(location)
            .iter()
            .map(|quest| quest.id().clone())
            .collect()
    }

    /// Ids of the quests in the `priority` tier, in catalog order.
    pub fn ids_with_priority(&self, priority: Priority) -> Vec<QuestId> {
        self.catalog
            .quests_by_priority(priority)
            .iter()
            .map(|quest| quest.id().clone())
            .collect()
    }

    /// Snapshot the catalog into a fresh analyzer.
    ///
    /// Fails when the snapshot references an unknown prerequisite or repeats
    /// an id.
    pub fn analyzer(&self, minutes_per_quest: u32) -> Result<PrerequisiteAnalyzer, DomainError> {
        PrerequisiteAnalyzer::from_catalog(self.catalog.as_ref(), minutes_per_quest)
    }
}
