use std::collections::HashSet;
use std::sync::Arc;

use questforge_domain::{BlockedTarget, CompletionPlan, DomainError, Priority, Quest, QuestId};

use crate::infrastructure::app_settings::PlannerSettings;
use crate::repositories::Catalog;
use crate::use_cases::dependency::PrerequisiteAnalyzer;

#[derive(Debug, thiserror::Error)]
pub enum PlanningError {
    #[error("Quest catalog is invalid: {0}")]
    InvalidCatalog(#[from] DomainError),
}

/// Builds completion plans from the current catalog.
pub struct CompletionPlanner {
    catalog: Arc<Catalog>,
    settings: PlannerSettings,
}

impl CompletionPlanner {
    pub fn new(catalog: Arc<Catalog>, settings: PlannerSettings) -> Self {
        Self { catalog, settings }
    }

    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    /// Analyzer over a fresh catalog snapshot.
    pub fn analyzer(&self) -> Result<PrerequisiteAnalyzer, PlanningError> {
        Ok(self.catalog.analyzer(self.settings.minutes_per_quest)?)
    }

    /// Plan the work needed to finish `targets`.
    ///
    /// Targets that can start now are ready. A blocked target pulls in all
    /// of its unfinished transitive prerequisites: those that can start now
    /// are ready too, the rest are blocking. Quests are counted once however
    /// many targets share them. With a budget, quests are admitted ready
    /// first, then blocking, and whatever does not fit is deferred.
    pub fn optimize<I, T>(
        &self,
        targets: I,
        time_budget: Option<u32>,
    ) -> Result<CompletionPlan, PlanningError>
    where
        I: IntoIterator<Item = T>,
        T: Into<QuestId>,
    {
        let analyzer = self.analyzer()?;
        Ok(plan_targets(&analyzer, dedupe(targets), time_budget))
    }

    /// Plan every quest tagged with `location`.
    pub fn for_location(
        &self,
        location: &str,
        time_budget: Option<u32>,
    ) -> Result<CompletionPlan, PlanningError> {
        let targets = self.catalog.ids_at_location(location);
        tracing::debug!(location, quests = targets.len(), "Planning location sweep");
        self.optimize(targets, time_budget)
    }

    /// Plan every quest in the `priority` tier.
    pub fn for_priority(
        &self,
        priority: Priority,
        time_budget: Option<u32>,
    ) -> Result<CompletionPlan, PlanningError> {
        let targets = self.catalog.ids_with_priority(priority);
        tracing::debug!(priority = %priority, quests = targets.len(), "Planning priority sweep");
        self.optimize(targets, time_budget)
    }

    /// Fill `available_minutes` with the most rewarding eligible quests.
    ///
    /// Greedy: eligible quests are taken in order of reward per minute
    /// (catalog order on ties) while they fit. This approximates the
    /// knapsack optimum and can miss it.
    pub fn time_boxed(&self, available_minutes: u32) -> Result<CompletionPlan, PlanningError> {
        let analyzer = self.analyzer()?;
        let minutes = analyzer.minutes_per_quest();

        let mut candidates: Vec<&Quest> = analyzer
            .quests()
            .into_iter()
            .filter(|quest| analyzer.is_eligible(quest.id()))
            .collect();
        // Stable sort keeps catalog order among equal efficiencies.
        candidates.sort_by(|a, b| {
            let a = a.rewards().efficiency(minutes);
            let b = b.rewards().efficiency(minutes);
            b.total_cmp(&a)
        });

        let mut plan = CompletionPlan::empty(Vec::new(), Some(available_minutes));
        for quest in candidates {
            if plan.has_room_for(minutes) {
                plan.account(quest.rewards(), minutes);
                plan.ready.push(quest.id().clone());
            } else {
                plan.deferred.push(quest.id().clone());
            }
        }
        plan.targets = plan.ready.clone();

        tracing::debug!(
            available_minutes,
            accepted = plan.ready.len(),
            deferred = plan.deferred.len(),
            "Time-boxed plan built"
        );
        Ok(plan)
    }
}

fn dedupe<I, T>(targets: I) -> Vec<QuestId>
where
    I: IntoIterator<Item = T>,
    T: Into<QuestId>,
{
    let mut seen = HashSet::new();
    targets
        .into_iter()
        .map(Into::into)
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

fn plan_targets(
    analyzer: &PrerequisiteAnalyzer,
    targets: Vec<QuestId>,
    time_budget: Option<u32>,
) -> CompletionPlan {
    let mut plan = CompletionPlan::empty(targets.clone(), time_budget);
    let mut seen: HashSet<QuestId> = HashSet::new();
    let mut ready: Vec<&Quest> = Vec::new();
    let mut blocking: Vec<&Quest> = Vec::new();

    for target in &targets {
        let Some(quest) = analyzer.quest(target) else {
            tracing::warn!(quest_id = %target, "Unknown plan target ignored");
            plan.unknown_targets.push(target.clone());
            continue;
        };
        if quest.is_completed() {
            continue;
        }

        if analyzer.prerequisites_satisfied(target) {
            if seen.insert(target.clone()) {
                ready.push(quest);
            }
            continue;
        }

        for blocker in analyzer.transitive_blockers(target) {
            if !seen.insert(blocker.id().clone()) {
                continue;
            }
            if analyzer.prerequisites_satisfied(blocker.id()) {
                ready.push(blocker);
            } else {
                blocking.push(blocker);
            }
        }
        plan.blocked.push(BlockedTarget {
            quest_id: target.clone(),
            blocked_by: analyzer
                .blocking_goals(target)
                .iter()
                .map(|quest| quest.id().clone())
                .collect(),
        });
    }

    let minutes = analyzer.minutes_per_quest();
    for quest in ready {
        if plan.has_room_for(minutes) {
            plan.account(quest.rewards(), minutes);
            plan.ready.push(quest.id().clone());
        } else {
            plan.deferred.push(quest.id().clone());
        }
    }
    for quest in blocking {
        if plan.has_room_for(minutes) {
            plan.account(quest.rewards(), minutes);
            plan.blocking.push(quest.id().clone());
        } else {
            plan.deferred.push(quest.id().clone());
        }
    }

    tracing::debug!(
        targets = plan.targets.len(),
        ready = plan.ready.len(),
        blocking = plan.blocking.len(),
        blocked = plan.blocked.len(),
        deferred = plan.deferred.len(),
        total_minutes = plan.total_minutes,
        "Completion plan built"
    );
    plan
}
