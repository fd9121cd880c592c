use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Lifecycle status of a quest, as tracked by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Skipped,
    Failed,
}

impl QuestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestStatus::NotStarted => "not_started",
            QuestStatus::InProgress => "in_progress",
            QuestStatus::Completed => "completed",
            QuestStatus::Skipped => "skipped",
            QuestStatus::Failed => "failed",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, QuestStatus::Completed)
    }

    /// Whether the quest still counts as something to work on.
    ///
    /// Skipped quests are set aside deliberately and are not offered again.
    pub fn is_open(&self) -> bool {
        !matches!(self, QuestStatus::Completed | QuestStatus::Skipped)
    }

    /// Check whether moving from `self` to `next` is a legal lifecycle step.
    pub fn can_transition_to(&self, next: QuestStatus) -> bool {
        use QuestStatus::*;
        match (self, next) {
            (_, NotStarted) => true,
            (NotStarted | Failed, InProgress) => true,
            (NotStarted | InProgress, Completed) => true,
            (NotStarted | InProgress | Failed, Skipped) => true,
            (InProgress, Failed) => true,
            _ => false,
        }
    }
}

impl fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QuestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect();
        match normalized.as_str() {
            "notstarted" | "pending" => Ok(QuestStatus::NotStarted),
            "inprogress" | "active" => Ok(QuestStatus::InProgress),
            "completed" | "complete" | "done" => Ok(QuestStatus::Completed),
            "skipped" => Ok(QuestStatus::Skipped),
            "failed" => Ok(QuestStatus::Failed),
            _ => Err(DomainError::parse(format!("Invalid quest status: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_common_spellings() {
        assert_eq!(
            "not-started".parse::<QuestStatus>().unwrap(),
            QuestStatus::NotStarted
        );
        assert_eq!(
            "In Progress".parse::<QuestStatus>().unwrap(),
            QuestStatus::InProgress
        );
        assert_eq!(
            "completed".parse::<QuestStatus>().unwrap(),
            QuestStatus::Completed
        );
        assert!("abandoned".parse::<QuestStatus>().is_err());
    }

    #[test]
    fn completed_is_terminal_except_for_reset() {
        let status = QuestStatus::Completed;
        assert!(!status.can_transition_to(QuestStatus::InProgress));
        assert!(!status.can_transition_to(QuestStatus::Skipped));
        assert!(!status.can_transition_to(QuestStatus::Completed));
        assert!(status.can_transition_to(QuestStatus::NotStarted));
    }

    #[test]
    fn failed_quests_can_be_retried() {
        assert!(QuestStatus::Failed.can_transition_to(QuestStatus::InProgress));
        assert!(!QuestStatus::NotStarted.can_transition_to(QuestStatus::Failed));
    }

    #[test]
    fn open_excludes_completed_and_skipped() {
        assert!(QuestStatus::NotStarted.is_open());
        assert!(QuestStatus::Failed.is_open());
        assert!(!QuestStatus::Completed.is_open());
        assert!(!QuestStatus::Skipped.is_open());
    }
}
