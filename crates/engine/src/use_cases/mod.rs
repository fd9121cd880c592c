//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area.
//! Use cases read the catalog and plan store through the repository wrappers.

pub mod dependency;
pub mod planning;
pub mod plans;

pub use dependency::{DependencyGraph, PrerequisiteAnalyzer};
pub use planning::{CompletionPlanner, PlanningError, Recommendation};
pub use plans::{ImportReport, PlanBundle, PlanLibrary, PlanLibraryError, SkippedPlan};
