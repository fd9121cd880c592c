//! Completion planning use cases.
//!
//! Every call snapshots the catalog, builds a fresh analyzer and returns a
//! new plan. Nothing here writes to the catalog or the plan store.

mod planner;
mod recommend;

pub use planner::{CompletionPlanner, PlanningError};
pub use recommend::Recommendation;
