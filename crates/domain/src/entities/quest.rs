//! Quest entity - A single trackable objective
//!
//! Quests are supplied by an external catalog. Each one names the quests that
//! must be completed before it, which is what the dependency graph is built
//! from. The id is fixed at construction; status is the only part the host
//! changes over a quest's lifetime, through the transition methods below.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::{Difficulty, Priority, QuestId, QuestStatus, Rewards};

/// A quest in the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    id: QuestId,
    name: String,
    description: String,
    rewards: Rewards,
    difficulty: Difficulty,
    /// Planet or zone tag, if the quest is tied to one
    location: Option<String>,
    priority: Priority,
    status: QuestStatus,
    /// Quests that must be completed first, in catalog order
    prerequisites: Vec<QuestId>,
}

impl Quest {
    pub fn new(id: impl Into<QuestId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            rewards: Rewards::default(),
            difficulty: Difficulty::default(),
            location: None,
            priority: Priority::default(),
            status: QuestStatus::default(),
            prerequisites: Vec::new(),
        }
    }

    // === Accessors ===

    pub fn id(&self) -> &QuestId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn rewards(&self) -> Rewards {
        self.rewards
    }

    pub fn experience(&self) -> u32 {
        self.rewards.experience
    }

    pub fn credits(&self) -> u32 {
        self.rewards.credits
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn status(&self) -> QuestStatus {
        self.status
    }

    pub fn prerequisites(&self) -> &[QuestId] {
        &self.prerequisites
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    // === Builder Methods ===

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_rewards(mut self, experience: u32, credits: u32) -> Self {
        self.rewards = Rewards::new(experience, credits);
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the status directly (used when loading from a catalog).
    pub fn with_status(mut self, status: QuestStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_prerequisite(mut self, prerequisite: impl Into<QuestId>) -> Self {
        self.prerequisites.push(prerequisite.into());
        self
    }

    pub fn with_prerequisites<I, T>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<QuestId>,
    {
        self.prerequisites
            .extend(prerequisites.into_iter().map(Into::into));
        self
    }

    // === Lifecycle ===

    pub fn start(&mut self) -> Result<(), DomainError> {
        self.transition_to(QuestStatus::InProgress)
    }

    pub fn complete(&mut self) -> Result<(), DomainError> {
        self.transition_to(QuestStatus::Completed)
    }

    pub fn skip(&mut self) -> Result<(), DomainError> {
        self.transition_to(QuestStatus::Skipped)
    }

    pub fn fail(&mut self) -> Result<(), DomainError> {
        self.transition_to(QuestStatus::Failed)
    }

    pub fn reset(&mut self) {
        self.status = QuestStatus::NotStarted;
    }

    /// Move to `next`, rejecting steps the lifecycle does not allow.
    pub fn transition_to(&mut self, next: QuestStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::invalid_state_transition(format!(
                "quest {} cannot move from {} to {}",
                self.id, self.status, next
            )));
        }
        self.status = next;
        Ok(())
    }
}

/// Catalog ingestion record.
///
/// Classification fields arrive as free strings; converting into [`Quest`]
/// is where they are validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub experience: u32,
    #[serde(default)]
    pub credits: u32,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

fn default_difficulty() -> String {
    Difficulty::default().to_string()
}

fn default_priority() -> String {
    Priority::default().to_string()
}

fn default_status() -> String {
    QuestStatus::default().to_string()
}

impl TryFrom<QuestRecord> for Quest {
    type Error = DomainError;

    fn try_from(record: QuestRecord) -> Result<Self, Self::Error> {
        let id = record.id.trim();
        if id.is_empty() {
            return Err(DomainError::validation("Quest id cannot be empty"));
        }
        let quest = Quest::new(id, record.name)
            .with_description(record.description)
            .with_rewards(record.experience, record.credits)
            .with_difficulty(record.difficulty.parse()?)
            .with_priority(record.priority.parse()?)
            .with_status(record.status.parse()?)
            .with_prerequisites(record.prerequisites.iter().map(|p| p.trim().to_string()));

        Ok(match record.location.filter(|l| !l.trim().is_empty()) {
            Some(location) => quest.with_location(location),
            None => quest,
        })
    }
}

impl From<&Quest> for QuestRecord {
    fn from(quest: &Quest) -> Self {
        Self {
            id: quest.id.to_string(),
            name: quest.name.clone(),
            description: quest.description.clone(),
            experience: quest.rewards.experience,
            credits: quest.rewards.credits,
            difficulty: quest.difficulty.to_string(),
            location: quest.location.clone(),
            priority: quest.priority.to_string(),
            status: quest.status.to_string(),
            prerequisites: quest.prerequisites.iter().map(ToString::to_string).collect(),
        }
    }
}
