extern crate self as questforge_domain;

pub mod entities;
pub mod error;
pub mod ids;
pub mod types;
pub mod value_objects;

pub use entities::{BlockedTarget, CompletionPlan, PlanRecord, Quest, QuestChain, QuestRecord};

pub use error::DomainError;

pub use ids::{PlanId, QuestId};

pub use types::{Difficulty, Priority, QuestStatus};

pub use value_objects::{Rewards, CREDIT_WEIGHT_DIVISOR};
