//! Cycle-safe walks over the prerequisite edges.
//!
//! Every walk shares one visited set, so no quest is expanded twice per
//! walk whatever the shape of the graph. Two walks are supported:
//! breadth-first collection of everything reachable from a start quest,
//! and depth-first search for back edges (cycles).

use std::collections::{HashSet, VecDeque};

use questforge_domain::QuestId;

use super::graph::DependencyGraph;

pub(super) enum Walk<'a> {
    /// Everything reachable from the start quest, excluding the start.
    Reachable(&'a QuestId),
    /// Every cycle, each as the path from the revisited quest back to itself.
    BackEdges,
}

pub(super) enum WalkResult {
    Reachable(Vec<QuestId>),
    Cycles(Vec<Vec<QuestId>>),
}

pub(super) struct Traversal<'g> {
    graph: &'g DependencyGraph,
    visited: HashSet<&'g QuestId>,
}

impl<'g> Traversal<'g> {
    pub(super) fn new(graph: &'g DependencyGraph) -> Self {
        Self {
            graph,
            visited: HashSet::with_capacity(graph.len()),
        }
    }

    pub(super) fn run(mut self, walk: Walk<'_>) -> WalkResult {
        match walk {
            Walk::Reachable(start) => WalkResult::Reachable(self.reachable_from(start)),
            Walk::BackEdges => WalkResult::Cycles(self.back_edges()),
        }
    }

    /// Returns true the first time `id` is seen.
    fn visit(&mut self, id: &'g QuestId) -> bool {
        self.visited.insert(id)
    }

    fn reachable_from(&mut self, start: &QuestId) -> Vec<QuestId> {
        let graph = self.graph;
        let Some(start) = graph.key(start) else {
            return Vec::new();
        };
        self.visit(start);

        let mut reached = Vec::new();
        let mut frontier = VecDeque::from([start]);
        while let Some(current) = frontier.pop_front() {
            for next in graph.prerequisites(current) {
                if self.visit(next) {
                    reached.push(next.clone());
                    frontier.push_back(next);
                }
            }
        }
        reached
    }

    fn back_edges(&mut self) -> Vec<Vec<QuestId>> {
        let graph = self.graph;
        let mut cycles = Vec::new();

        for root in graph.ids() {
            if !self.visit(root) {
                continue;
            }

            // Explicit stack: the current path plus, per depth, how many of
            // that quest's prerequisites have been explored.
            let mut path: Vec<&QuestId> = vec![root];
            let mut next_edge: Vec<usize> = vec![0];
            let mut on_path: HashSet<&QuestId> = HashSet::from([root]);

            while let Some(&current) = path.last() {
                let depth = path.len() - 1;
                let edges = graph.prerequisites(current);

                let Some(next) = edges.get(next_edge[depth]) else {
                    path.pop();
                    next_edge.pop();
                    on_path.remove(current);
                    continue;
                };
                next_edge[depth] += 1;

                if on_path.contains(next) {
                    if let Some(start) = path.iter().position(|id| *id == next) {
                        let mut cycle: Vec<QuestId> =
                            path[start..].iter().map(|id| (*id).clone()).collect();
                        cycle.push(next.clone());
                        cycles.push(cycle);
                    }
                } else if self.visit(next) {
                    path.push(next);
                    next_edge.push(0);
                    on_path.insert(next);
                }
            }
        }

        cycles
    }
}

#[cfg(test)]
mod tests {
    use questforge_domain::Quest;

    use super::*;

    fn graph(edges: &[(&str, &[&str])]) -> DependencyGraph {
        let quests: Vec<Quest> = edges
            .iter()
            .map(|(id, prerequisites)| {
                Quest::new(*id, *id).with_prerequisites(prerequisites.iter().copied())
            })
            .collect();
        DependencyGraph::build(&quests).unwrap()
    }

    fn reachable(graph: &DependencyGraph, start: &str) -> Vec<String> {
        match Traversal::new(graph).run(Walk::Reachable(&QuestId::new(start))) {
            WalkResult::Reachable(ids) => ids.iter().map(ToString::to_string).collect(),
            WalkResult::Cycles(_) => unreachable!(),
        }
    }

    fn cycles(graph: &DependencyGraph) -> Vec<Vec<String>> {
        match Traversal::new(graph).run(Walk::BackEdges) {
            WalkResult::Cycles(cycles) => cycles
                .iter()
                .map(|c| c.iter().map(ToString::to_string).collect())
                .collect(),
            WalkResult::Reachable(_) => unreachable!(),
        }
    }

    #[test]
    fn reachable_is_breadth_first_and_deduplicated() {
        let g = graph(&[
            ("top", &["left", "right"]),
            ("left", &["base"]),
            ("right", &["base"]),
            ("base", &[]),
        ]);
        assert_eq!(reachable(&g, "top"), vec!["left", "right", "base"]);
    }

    #[test]
    fn reachable_terminates_on_cycle_through_start() {
        let g = graph(&[("a", &["b"]), ("b", &["c"]), ("c", &["a"])]);
        assert_eq!(reachable(&g, "a"), vec!["b", "c"]);
    }

    #[test]
    fn reachable_from_unknown_is_empty() {
        let g = graph(&[("a", &[])]);
        assert!(reachable(&g, "missing").is_empty());
    }

    #[test]
    fn acyclic_graph_has_no_back_edges() {
        let g = graph(&[("a", &[]), ("b", &["a"]), ("c", &["a", "b"])]);
        assert!(cycles(&g).is_empty());
    }

    #[test]
    fn two_node_cycle_is_reported_once() {
        let g = graph(&[("a", &["b"]), ("b", &["a"])]);
        assert_eq!(cycles(&g), vec![vec!["a", "b", "a"]]);
    }

    #[test]
    fn cycle_path_starts_at_revisited_quest() {
        let g = graph(&[
            ("entry", &["x"]),
            ("x", &["y"]),
            ("y", &["z"]),
            ("z", &["x"]),
        ]);
        assert_eq!(cycles(&g), vec![vec!["x", "y", "z", "x"]]);
    }

    #[test]
    fn separate_cycles_are_all_found() {
        let g = graph(&[
            ("a", &["b"]),
            ("b", &["a"]),
            ("c", &["d"]),
            ("d", &["c"]),
            ("e", &[]),
        ]);
        assert_eq!(cycles(&g).len(), 2);
    }
}
