//! Domain entities - Core business objects with identity

mod completion_plan;
mod plan_record;
mod quest;
mod quest_chain;

pub use completion_plan::{BlockedTarget, CompletionPlan};
pub use plan_record::PlanRecord;
pub use quest::{Quest, QuestRecord};
pub use quest_chain::QuestChain;
