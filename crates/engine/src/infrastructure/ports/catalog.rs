//! Read-only catalog access.

use questforge_domain::{Priority, Quest, QuestId};

/// Lookup interface over the host's quest catalog.
///
/// The engine only ever reads through this trait. Every call returns owned
/// snapshots so a planning run is unaffected by later status changes.
/// `all_quests` must return quests in a stable order; that order breaks
/// ties in the planners.
#[cfg_attr(test, mockall::automock)]
pub trait QuestCatalog: Send + Sync {
    fn get_quest(&self, id: &QuestId) -> Option<Quest>;
    fn all_quests(&self) -> Vec<Quest>;
    fn quests_by_location(&self, location: &str) -> Vec<Quest>;
    fn quests_by_priority(&self, priority: Priority) -> Vec<Quest>;
}
