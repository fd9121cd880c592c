//! Forward and reverse prerequisite adjacency.

use std::collections::{BTreeSet, HashMap, HashSet};

use questforge_domain::{DomainError, Quest, QuestId};

/// Prerequisite edges between quests.
///
/// `forward[q]` lists the quests `q` requires; `reverse[q]` lists the quests
/// that require `q`. Both maps have an entry for every quest in the catalog
/// and are exact inverses of each other.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Quest ids in catalog order
    order: Vec<QuestId>,
    position: HashMap<QuestId, usize>,
    forward: HashMap<QuestId, Vec<QuestId>>,
    reverse: HashMap<QuestId, Vec<QuestId>>,
}

impl DependencyGraph {
    /// Build the graph from a catalog snapshot.
    ///
    /// Fails on the first duplicate id or dangling prerequisite, in catalog
    /// order. No partial graph is returned.
    pub fn build<'a>(quests: impl IntoIterator<Item = &'a Quest>) -> Result<Self, DomainError> {
        let quests: Vec<&Quest> = quests.into_iter().collect();

        let mut graph = Self::default();
        for quest in &quests {
            let id = quest.id().clone();
            if graph.position.contains_key(&id) {
                return Err(DomainError::DuplicateQuest(id));
            }
            graph.position.insert(id.clone(), graph.order.len());
            graph.forward.insert(id.clone(), Vec::new());
            graph.reverse.insert(id.clone(), Vec::new());
            graph.order.push(id);
        }

        for quest in &quests {
            let mut seen = HashSet::new();
            for prerequisite in quest.prerequisites() {
                if !graph.position.contains_key(prerequisite) {
                    return Err(DomainError::missing_prerequisite(
                        quest.id().clone(),
                        prerequisite.clone(),
                    ));
                }
                if !seen.insert(prerequisite) {
                    continue;
                }
                if let Some(edges) = graph.forward.get_mut(quest.id()) {
                    edges.push(prerequisite.clone());
                }
                if let Some(edges) = graph.reverse.get_mut(prerequisite) {
                    edges.push(quest.id().clone());
                }
            }
        }

        tracing::debug!(quests = graph.order.len(), "Dependency graph built");
        Ok(graph)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: &QuestId) -> bool {
        self.position.contains_key(id)
    }

    /// All quest ids, in catalog order.
    pub fn ids(&self) -> &[QuestId] {
        &self.order
    }

    /// Catalog position of a quest.
    pub fn position(&self, id: &QuestId) -> Option<usize> {
        self.position.get(id).copied()
    }

    /// The graph's own copy of `id`, for borrowing with the graph's lifetime.
    pub(super) fn key(&self, id: &QuestId) -> Option<&QuestId> {
        self.position(id).map(|index| &self.order[index])
    }

    /// Direct prerequisites of `id`; empty for unknown ids.
    pub fn prerequisites(&self, id: &QuestId) -> &[QuestId] {
        self.forward.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Quests that list `id` as a direct prerequisite; empty for unknown ids.
    pub fn dependents(&self, id: &QuestId) -> &[QuestId] {
        self.reverse.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Order `ids` so every prerequisite comes before the quests needing it.
    ///
    /// Only edges between members of `ids` are considered. Ties, and any
    /// members caught in a cycle (which are appended last), follow catalog
    /// order. Unknown and repeated ids are dropped.
    pub fn topological_order<'a>(
        &self,
        ids: impl IntoIterator<Item = &'a QuestId>,
    ) -> Vec<QuestId> {
        let members: BTreeSet<usize> = ids
            .into_iter()
            .filter_map(|id| self.position(id))
            .collect();

        let mut in_degree: HashMap<usize, usize> = members
            .iter()
            .map(|&index| {
                let degree = self
                    .prerequisites(&self.order[index])
                    .iter()
                    .filter(|p| self.position(p).is_some_and(|i| members.contains(&i)))
                    .count();
                (index, degree)
            })
            .collect();

        let mut ready: BTreeSet<usize> = in_degree
            .iter()
            .filter(|(_, &degree)| degree == 0)
            .map(|(&index, _)| index)
            .collect();

        let mut sorted = Vec::with_capacity(members.len());
        while let Some(index) = ready.pop_first() {
            sorted.push(index);
            for dependent in self.dependents(&self.order[index]) {
                let Some(dep_index) = self.position(dependent) else {
                    continue;
                };
                if let Some(degree) = in_degree.get_mut(&dep_index) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.insert(dep_index);
                    }
                }
            }
        }

        if sorted.len() < members.len() {
            let placed: HashSet<usize> = sorted.iter().copied().collect();
            sorted.extend(members.iter().filter(|i| !placed.contains(*i)));
        }

        sorted
            .into_iter()
            .map(|index| self.order[index].clone())
            .collect()
    }
}
