//! QuestChain - Everything standing between a player and one target quest
//!
//! A chain is computed, never stored. It holds the target's transitive
//! prerequisites followed by the target itself, together with the totals a
//! player would earn and spend by working through all of it.

use serde::Serialize;

use crate::{Difficulty, Quest, QuestId, Rewards};

/// Ordered prerequisites of a target quest, ending with the target.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestChain {
    target: QuestId,
    quests: Vec<Quest>,
    rewards: Rewards,
    estimated_minutes: u32,
    difficulty: Difficulty,
}

impl QuestChain {
    /// Build a chain from the target's prerequisites (already ordered by the
    /// caller) and the target itself, which always ends up last.
    pub fn new(prerequisites: Vec<Quest>, target: Quest, minutes_per_quest: u32) -> Self {
        let target_id = target.id().clone();
        let mut quests: Vec<Quest> = prerequisites
            .into_iter()
            .filter(|q| q.id() != &target_id)
            .collect();
        quests.push(target);

        let rewards: Rewards = quests.iter().map(Quest::rewards).sum();
        let difficulty = quests
            .iter()
            .map(Quest::difficulty)
            .max()
            .unwrap_or_default();
        let count = u32::try_from(quests.len()).unwrap_or(u32::MAX);

        Self {
            target: target_id,
            quests,
            rewards,
            estimated_minutes: count.saturating_mul(minutes_per_quest),
            difficulty,
        }
    }

    pub fn target(&self) -> &QuestId {
        &self.target
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn rewards(&self) -> Rewards {
        self.rewards
    }

    pub fn total_experience(&self) -> u32 {
        self.rewards.experience
    }

    pub fn total_credits(&self) -> u32 {
        self.rewards.credits
    }

    pub fn estimated_minutes(&self) -> u32 {
        self.estimated_minutes
    }

    /// The most severe difficulty anywhere in the chain
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    /// Quests in the chain that are not completed yet, in chain order.
    pub fn remaining(&self) -> Vec<&Quest> {
        self.quests.iter().filter(|q| !q.is_completed()).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.quests.iter().all(Quest::is_completed)
    }

    pub fn progress_percent(&self) -> u32 {
        if self.quests.is_empty() {
            return 0;
        }
        let done = self.quests.iter().filter(|q| q.is_completed()).count();
        ((done * 100) / self.quests.len()) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuestStatus;

    fn chain() -> QuestChain {
        let a = Quest::new("a", "A")
            .with_rewards(100, 1000)
            .with_difficulty(Difficulty::Easy)
            .with_status(QuestStatus::Completed);
        let b = Quest::new("b", "B")
            .with_rewards(200, 0)
            .with_difficulty(Difficulty::Hard)
            .with_prerequisite("a");
        let c = Quest::new("c", "C")
            .with_rewards(300, 500)
            .with_prerequisite("b");
        QuestChain::new(vec![a, b], c, 30)
    }

    #[test]
    fn target_is_last() {
        let chain = chain();
        let ids: Vec<&str> = chain.quests().iter().map(|q| q.id().as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(chain.target().as_str(), "c");
    }

    #[test]
    fn totals_and_rollup() {
        let chain = chain();
        assert_eq!(chain.total_experience(), 600);
        assert_eq!(chain.total_credits(), 1500);
        assert_eq!(chain.estimated_minutes(), 90);
        assert_eq!(chain.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn progress_counts_completed_members() {
        let chain = chain();
        assert_eq!(chain.progress_percent(), 33);
        assert_eq!(chain.remaining().len(), 2);
        assert!(!chain.is_complete());
    }

    #[test]
    fn target_in_prerequisites_is_not_duplicated() {
        let target = Quest::new("t", "T");
        let chain = QuestChain::new(vec![target.clone()], target, 10);
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.estimated_minutes(), 10);
    }
}
