//! Repository port traits for plan persistence.

use async_trait::async_trait;
use questforge_domain::PlanRecord;

use super::error::RepoError;

// =============================================================================
// Plan Storage
// =============================================================================

/// Named plan storage.
///
/// `save` replaces any record already stored under the same name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanStore: Send + Sync {
    async fn save(&self, record: &PlanRecord) -> Result<(), RepoError>;
    async fn load(&self, name: &str) -> Result<Option<PlanRecord>, RepoError>;
    /// Names of all stored plans, sorted.
    async fn list(&self) -> Result<Vec<String>, RepoError>;
    /// Returns whether a plan was removed.
    async fn delete(&self, name: &str) -> Result<bool, RepoError>;
}
