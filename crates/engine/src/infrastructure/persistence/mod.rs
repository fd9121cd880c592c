//! Plan persistence adapters
//!
//! Implementations of the [`PlanStore`](crate::infrastructure::ports::PlanStore)
//! port. The in-memory store backs tests and short-lived sessions; the JSON
//! file store keeps plans across runs.

mod json_file_plan_store;
mod memory_plan_store;

pub use json_file_plan_store::JsonFilePlanStore;
pub use memory_plan_store::InMemoryPlanStore;
