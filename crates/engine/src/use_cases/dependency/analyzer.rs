//! Prerequisite queries over one catalog snapshot.

use std::collections::HashMap;

use questforge_domain::{DomainError, Quest, QuestChain, QuestId};

use super::graph::DependencyGraph;
use super::traversal::{Traversal, Walk, WalkResult};
use crate::infrastructure::ports::QuestCatalog;

/// Answers dependency questions about a fixed set of quests.
///
/// Unknown ids are never an error here: they simply have no prerequisites,
/// no dependents and no chain.
pub struct PrerequisiteAnalyzer {
    quests: HashMap<QuestId, Quest>,
    graph: DependencyGraph,
    minutes_per_quest: u32,
}

impl PrerequisiteAnalyzer {
    /// Build an analyzer over `quests`, validating every prerequisite.
    pub fn new(quests: Vec<Quest>, minutes_per_quest: u32) -> Result<Self, DomainError> {
        let graph = DependencyGraph::build(&quests)?;
        let quests = quests
            .into_iter()
            .map(|quest| (quest.id().clone(), quest))
            .collect();
        Ok(Self {
            quests,
            graph,
            minutes_per_quest,
        })
    }

    /// Snapshot the whole catalog and build an analyzer over it.
    pub fn from_catalog(
        catalog: &dyn QuestCatalog,
        minutes_per_quest: u32,
    ) -> Result<Self, DomainError> {
        Self::new(catalog.all_quests(), minutes_per_quest)
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    pub fn minutes_per_quest(&self) -> u32 {
        self.minutes_per_quest
    }

    pub fn quest(&self, id: &QuestId) -> Option<&Quest> {
        self.quests.get(id)
    }

    /// All quests, in catalog order.
    pub fn quests(&self) -> Vec<&Quest> {
        self.lookup(self.graph.ids())
    }

    fn lookup(&self, ids: &[QuestId]) -> Vec<&Quest> {
        ids.iter().filter_map(|id| self.quests.get(id)).collect()
    }

    fn is_completed(&self, id: &QuestId) -> bool {
        self.quest(id).is_some_and(Quest::is_completed)
    }

    pub fn direct_prerequisites(&self, id: &QuestId) -> Vec<&Quest> {
        self.lookup(self.graph.prerequisites(id))
    }

    /// Every quest `id` transitively requires, nearest first, never `id` itself.
    pub fn all_prerequisites(&self, id: &QuestId) -> Vec<&Quest> {
        match Traversal::new(&self.graph).run(Walk::Reachable(id)) {
            WalkResult::Reachable(ids) => self.lookup(&ids),
            WalkResult::Cycles(_) => Vec::new(),
        }
    }

    pub fn dependents(&self, id: &QuestId) -> Vec<&Quest> {
        self.lookup(self.graph.dependents(id))
    }

    /// True when every direct prerequisite is completed.
    pub fn prerequisites_satisfied(&self, id: &QuestId) -> bool {
        self.graph
            .prerequisites(id)
            .iter()
            .all(|prerequisite| self.is_completed(prerequisite))
    }

    /// Direct prerequisites that are not completed yet.
    pub fn blocking_goals(&self, id: &QuestId) -> Vec<&Quest> {
        self.direct_prerequisites(id)
            .into_iter()
            .filter(|quest| !quest.is_completed())
            .collect()
    }

    /// Every transitive prerequisite that is not completed yet, ordered so
    /// prerequisites come before the quests needing them.
    pub fn transitive_blockers(&self, id: &QuestId) -> Vec<&Quest> {
        let open: Vec<&QuestId> = self
            .all_prerequisites(id)
            .into_iter()
            .filter(|quest| !quest.is_completed())
            .map(Quest::id)
            .collect();
        let ordered = self.graph.topological_order(open);
        self.lookup(&ordered)
    }

    /// Open quests whose prerequisites are all completed.
    pub fn is_eligible(&self, id: &QuestId) -> bool {
        self.quest(id)
            .is_some_and(|quest| quest.status().is_open() && self.prerequisites_satisfied(id))
    }

    /// Dependents of `id` that would become startable once `id` is completed.
    pub fn unlocked_by(&self, id: &QuestId) -> Vec<&Quest> {
        self.dependents(id)
            .into_iter()
            .filter(|dependent| dependent.status().is_open())
            .filter(|dependent| {
                self.graph
                    .prerequisites(dependent.id())
                    .iter()
                    .all(|p| p == id || self.is_completed(p))
            })
            .collect()
    }

    /// Prerequisites of `id` followed by `id`, with totals. `None` for unknown ids.
    ///
    /// Prerequisites are ordered topologically, so the chain can be worked
    /// through front to back.
    pub fn chain(&self, id: &QuestId) -> Option<QuestChain> {
        let target = self.quest(id)?.clone();
        let prerequisites = self.all_prerequisites(id);
        let ordered = self
            .graph
            .topological_order(prerequisites.iter().map(|quest| quest.id()));
        let quests = self.lookup(&ordered).into_iter().cloned().collect();
        Some(QuestChain::new(quests, target, self.minutes_per_quest))
    }

    /// Every prerequisite cycle in the catalog.
    ///
    /// Each cycle is the path from the first revisited quest back to itself,
    /// so `a -> b -> a` is reported as `[a, b, a]`.
    pub fn find_cycles(&self) -> Vec<Vec<QuestId>> {
        let cycles = match Traversal::new(&self.graph).run(Walk::BackEdges) {
            WalkResult::Cycles(cycles) => cycles,
            WalkResult::Reachable(_) => Vec::new(),
        };
        if !cycles.is_empty() {
            tracing::warn!(count = cycles.len(), "Prerequisite cycles detected");
        }
        cycles
    }
}

#[cfg(test)]
mod tests {
    use questforge_domain::{Difficulty, QuestStatus};

    use super::*;
    use crate::test_fixtures::{linear_catalog, quest};

    fn id(value: &str) -> QuestId {
        QuestId::new(value)
    }

    fn names(quests: &[&Quest]) -> Vec<String> {
        quests.iter().map(|q| q.id().to_string()).collect()
    }

    fn analyzer(quests: Vec<Quest>) -> PrerequisiteAnalyzer {
        PrerequisiteAnalyzer::new(quests, 30).unwrap()
    }

    #[test]
    fn quest_without_prerequisites_is_satisfied() {
        let analyzer = analyzer(linear_catalog());
        assert!(analyzer.prerequisites_satisfied(&id("a")));
        assert!(analyzer.blocking_goals(&id("a")).is_empty());
        assert!(analyzer.direct_prerequisites(&id("a")).is_empty());
    }

    #[test]
    fn unknown_ids_yield_empty_results() {
        let analyzer = analyzer(linear_catalog());
        let ghost = id("ghost");
        assert!(analyzer.direct_prerequisites(&ghost).is_empty());
        assert!(analyzer.all_prerequisites(&ghost).is_empty());
        assert!(analyzer.dependents(&ghost).is_empty());
        assert!(analyzer.chain(&ghost).is_none());
        assert!(!analyzer.is_eligible(&ghost));
    }

    #[test]
    fn blocking_goals_lists_only_direct_unfinished_prerequisites() {
        let analyzer = analyzer(linear_catalog());
        assert_eq!(names(&analyzer.blocking_goals(&id("c"))), vec!["b"]);
        assert!(!analyzer.prerequisites_satisfied(&id("c")));
    }

    #[test]
    fn completed_prerequisite_unblocks() {
        let analyzer = analyzer(vec![
            quest("a", &[]).with_status(QuestStatus::Completed),
            quest("b", &["a"]),
        ]);
        assert!(analyzer.prerequisites_satisfied(&id("b")));
        assert!(analyzer.blocking_goals(&id("b")).is_empty());
        assert!(analyzer.is_eligible(&id("b")));
        assert!(!analyzer.is_eligible(&id("a")));
    }

    #[test]
    fn all_prerequisites_excludes_self_and_survives_cycles() {
        let analyzer = analyzer(vec![
            quest("a", &["c"]),
            quest("b", &["a"]),
            quest("c", &["b"]),
        ]);
        let found = names(&analyzer.all_prerequisites(&id("a")));
        assert_eq!(found, vec!["c", "b"]);
        assert!(!found.contains(&"a".to_string()));
    }

    #[test]
    fn dependents_follow_reverse_edges() {
        let analyzer = analyzer(vec![
            quest("root", &[]),
            quest("left", &["root"]),
            quest("right", &["root"]),
        ]);
        assert_eq!(names(&analyzer.dependents(&id("root"))), vec!["left", "right"]);
        assert!(analyzer.dependents(&id("left")).is_empty());
    }

    #[test]
    fn chain_orders_prerequisites_before_target() {
        let analyzer = analyzer(linear_catalog());
        let chain = analyzer.chain(&id("c")).unwrap();

        let order: Vec<&str> = chain.quests().iter().map(|q| q.id().as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
        assert_eq!(chain.estimated_minutes(), 3 * 30);
        assert_eq!(chain.total_experience(), 100 + 200 + 300);
        assert_eq!(chain.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn chain_of_root_is_just_the_root() {
        let analyzer = analyzer(linear_catalog());
        let chain = analyzer.chain(&id("a")).unwrap();
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.estimated_minutes(), 30);
    }

    #[test]
    fn chain_terminates_on_cyclic_catalog() {
        let analyzer = analyzer(vec![quest("a", &["b"]), quest("b", &["a"])]);
        let chain = analyzer.chain(&id("a")).unwrap();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.target().as_str(), "a");
        assert_eq!(chain.quests().last().map(|q| q.id().as_str()), Some("a"));
    }

    #[test]
    fn find_cycles_empty_on_acyclic_catalog() {
        assert!(analyzer(linear_catalog()).find_cycles().is_empty());
    }

    #[test]
    fn find_cycles_reports_single_cycle() {
        let analyzer = analyzer(vec![quest("a", &["b"]), quest("b", &["a"]), quest("c", &[])]);
        let cycles = analyzer.find_cycles();
        assert_eq!(cycles.len(), 1);
        assert!(cycles[0].contains(&id("a")));
        assert!(cycles[0].contains(&id("b")));
    }

    #[test]
    fn transitive_blockers_skip_completed_and_are_ordered() {
        let analyzer = analyzer(vec![
            quest("d", &["c"]),
            quest("c", &["b", "x"]),
            quest("b", &["a"]),
            quest("a", &[]),
            quest("x", &[]).with_status(QuestStatus::Completed),
        ]);
        assert_eq!(
            names(&analyzer.transitive_blockers(&id("d"))),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn unlocked_by_finds_dependents_waiting_only_on_that_quest() {
        let analyzer = analyzer(vec![
            quest("key", &[]),
            quest("map", &[]),
            quest("door", &["key"]),
            quest("vault", &["key", "map"]),
        ]);
        assert_eq!(names(&analyzer.unlocked_by(&id("key"))), vec!["door"]);
    }

    #[test]
    fn dangling_reference_fails_construction() {
        let result = PrerequisiteAnalyzer::new(vec![quest("a", &["missing"])], 30);
        assert!(matches!(
            result,
            Err(DomainError::MissingPrerequisite { .. })
        ));
    }
}
