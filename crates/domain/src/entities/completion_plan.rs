//! CompletionPlan - What to work on next, and what it is worth
//!
//! Plans are produced by the planning strategies in the engine. A plan is a
//! snapshot: it is never patched in place, only recomputed and saved again.

use serde::{Deserialize, Serialize};

use crate::{QuestId, Rewards};

/// A target quest that cannot be started yet, with the direct prerequisites
/// still standing in its way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedTarget {
    pub quest_id: QuestId,
    pub blocked_by: Vec<QuestId>,
}

/// A computed plan for a set of target quests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionPlan {
    /// Quests that seeded the plan, deduplicated in request order
    pub targets: Vec<QuestId>,
    /// Time budget in minutes, if one was given
    pub time_budget: Option<u32>,
    /// Quests that can be started right now, in suggested order
    pub ready: Vec<QuestId>,
    /// Unfinished prerequisites that are themselves still blocked,
    /// prerequisites first
    pub blocking: Vec<QuestId>,
    /// Targets that cannot be started yet
    #[serde(default)]
    pub blocked: Vec<BlockedTarget>,
    /// Quests left out because they did not fit the time budget
    #[serde(default)]
    pub deferred: Vec<QuestId>,
    /// Requested targets the catalog does not know
    #[serde(default)]
    pub unknown_targets: Vec<QuestId>,
    /// Rewards across `ready` and `blocking`
    pub rewards: Rewards,
    pub total_minutes: u32,
    /// Weighted reward per minute
    pub efficiency: f64,
}

impl CompletionPlan {
    /// An empty plan: no quests, zero totals.
    pub fn empty(targets: Vec<QuestId>, time_budget: Option<u32>) -> Self {
        Self {
            targets,
            time_budget,
            ready: Vec::new(),
            blocking: Vec::new(),
            blocked: Vec::new(),
            deferred: Vec::new(),
            unknown_targets: Vec::new(),
            rewards: Rewards::default(),
            total_minutes: 0,
            efficiency: 0.0,
        }
    }

    /// Whether `minutes` more fit within the budget.
    pub fn has_room_for(&self, minutes: u32) -> bool {
        match self.time_budget {
            Some(budget) => self.total_minutes.saturating_add(minutes) <= budget,
            None => true,
        }
    }

    /// Count a scheduled quest towards the totals and refresh the efficiency.
    pub fn account(&mut self, rewards: Rewards, minutes: u32) {
        self.rewards += rewards;
        self.total_minutes = self.total_minutes.saturating_add(minutes);
        self.efficiency = self.rewards.efficiency(self.total_minutes);
    }

    /// Number of quests the plan schedules.
    pub fn scheduled_count(&self) -> usize {
        self.ready.len() + self.blocking.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scheduled_count() == 0 && self.blocked.is_empty()
    }

    pub fn blocked_target(&self, quest_id: &QuestId) -> Option<&BlockedTarget> {
        self.blocked.iter().find(|b| &b.quest_id == quest_id)
    }
}
