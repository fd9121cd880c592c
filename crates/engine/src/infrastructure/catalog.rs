//! In-memory quest catalog.
//!
//! Reference implementation of [`QuestCatalog`] for hosts that load their
//! catalog up front (from JSON, a game save, a test fixture). Insertion order
//! is preserved and reported by `all_quests`, which keeps planner tie-breaks
//! deterministic.

use dashmap::DashMap;
use questforge_domain::{DomainError, Priority, Quest, QuestId, QuestRecord, QuestStatus};

use crate::infrastructure::ports::QuestCatalog;

pub struct InMemoryCatalog {
    order: Vec<QuestId>,
    quests: DashMap<QuestId, Quest>,
}

impl InMemoryCatalog {
    /// Build a catalog, rejecting duplicate ids.
    ///
    /// Prerequisite references are checked when the dependency graph is
    /// built, not here, so a catalog with dangling references can still be
    /// loaded and inspected.
    pub fn new(quests: impl IntoIterator<Item = Quest>) -> Result<Self, DomainError> {
        let map = DashMap::new();
        let mut order = Vec::new();
        for quest in quests {
            let id = quest.id().clone();
            if map.insert(id.clone(), quest).is_some() {
                return Err(DomainError::DuplicateQuest(id));
            }
            order.push(id);
        }
        Ok(Self { order, quests: map })
    }

    /// Build a catalog from ingestion records, validating every field.
    pub fn from_records(records: Vec<QuestRecord>) -> Result<Self, DomainError> {
        let quests = records
            .into_iter()
            .map(Quest::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(quests)
    }

    /// Parse a JSON array of quest records.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let records: Vec<QuestRecord> = serde_json::from_str(json)
            .map_err(|e| DomainError::parse(format!("Invalid quest catalog JSON: {}", e)))?;
        Self::from_records(records)
    }

    /// Move a quest to a new lifecycle status.
    pub fn set_status(&self, id: &QuestId, status: QuestStatus) -> Result<(), DomainError> {
        let mut quest = self
            .quests
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found("Quest", id.as_str()))?;
        quest.transition_to(status)?;
        tracing::debug!(quest_id = %id, status = %status, "Quest status updated");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn collect_where(&self, predicate: impl Fn(&Quest) -> bool) -> Vec<Quest> {
        self.order
            .iter()
            .filter_map(|id| self.quests.get(id))
            .filter(|quest| predicate(quest.value()))
            .map(|quest| quest.value().clone())
            .collect()
    }
}

impl QuestCatalog for InMemoryCatalog {
    fn get_quest(&self, id: &QuestId) -> Option<Quest> {
        self.quests.get(id).map(|quest| quest.value().clone())
    }

    fn all_quests(&self) -> Vec<Quest> {
        self.collect_where(|_| true)
    }

    fn quests_by_location(&self, location: &str) -> Vec<Quest> {
        self.collect_where(|quest| quest.location() == Some(location))
    }

    fn quests_by_priority(&self, priority: Priority) -> Vec<Quest> {
        self.collect_where(|quest| quest.priority() == priority)
    }
}
