//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Catalog access (the host owns quest definitions and status)
//! - Plan persistence (could swap memory -> file -> remote service)
//! - Clock (for testing)

mod catalog;
mod error;
mod repos;
mod testing;

// =============================================================================
// Catalog Port
// =============================================================================
pub use catalog::QuestCatalog;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::PlanStore;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use catalog::MockQuestCatalog;

#[cfg(test)]
pub use repos::MockPlanStore;

#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
