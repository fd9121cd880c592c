//! Quest dependency analysis.
//!
//! The graph is derived from a catalog snapshot and never edited in place;
//! to reflect catalog changes, build a new [`PrerequisiteAnalyzer`].
//!
//! Cyclic catalogs are legal input. [`PrerequisiteAnalyzer::find_cycles`]
//! reports them, and every other query stays finite on them because all
//! traversals go through the same visited-set walker in `traversal`.

mod analyzer;
mod graph;
mod traversal;

pub use analyzer::PrerequisiteAnalyzer;
pub use graph::DependencyGraph;
