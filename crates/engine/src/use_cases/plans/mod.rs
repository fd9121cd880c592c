//! Saved plan use cases.
//!
//! Naming, loading and deleting plans, plus moving them in and out of the
//! store as JSON bundles.

mod bundle;

use std::sync::Arc;

use questforge_domain::{CompletionPlan, PlanRecord};
use serde_json::Value;

pub use bundle::{BundleMetadata, ImportReport, PlanBundle, SkippedPlan, BUNDLE_FORMAT_VERSION};

use crate::infrastructure::ports::RepoError;
use crate::repositories::Plans;

#[derive(Debug, thiserror::Error)]
pub enum PlanLibraryError {
    #[error("Plan name must not be empty")]
    InvalidName,
    #[error("Invalid plan bundle: {0}")]
    InvalidBundle(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Save, load, export and import named plans.
pub struct PlanLibrary {
    plans: Arc<Plans>,
}

impl PlanLibrary {
    pub fn new(plans: Arc<Plans>) -> Self {
        Self { plans }
    }

    /// Save `plan` under `name`, replacing any plan of that name.
    pub async fn save(
        &self,
        name: &str,
        plan: CompletionPlan,
    ) -> Result<PlanRecord, PlanLibraryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlanLibraryError::InvalidName);
        }
        let record = self.plans.save(name, plan).await?;
        tracing::info!(
            plan_name = %name,
            plan_id = %record.id(),
            quests = record.plan().scheduled_count(),
            "Plan saved"
        );
        Ok(record)
    }

    pub async fn load(&self, name: &str) -> Result<Option<PlanRecord>, PlanLibraryError> {
        Ok(self.plans.load(name.trim()).await?)
    }

    /// Names of every saved plan, sorted.
    pub async fn list(&self) -> Result<Vec<String>, PlanLibraryError> {
        Ok(self.plans.list().await?)
    }

    /// Returns whether a plan of that name existed.
    pub async fn delete(&self, name: &str) -> Result<bool, PlanLibraryError> {
        let removed = self.plans.delete(name.trim()).await?;
        if removed {
            tracing::info!(plan_name = %name, "Plan deleted");
        }
        Ok(removed)
    }

    /// Collect the named plans into a bundle. Unknown names are skipped.
    pub async fn export_bundle(&self, names: &[String]) -> Result<PlanBundle, PlanLibraryError> {
        let mut records = Vec::with_capacity(names.len());
        for name in names {
            match self.plans.load(name).await? {
                Some(record) => records.push(record),
                None => tracing::warn!(plan_name = %name, "Export skipped unknown plan"),
            }
        }
        Ok(PlanBundle::new(records, self.plans.now()))
    }

    /// Export the named plans as a JSON bundle.
    pub async fn export(&self, names: &[String]) -> Result<String, PlanLibraryError> {
        let bundle = self.export_bundle(names).await?;
        tracing::info!(plans = bundle.plans.len(), "Plans exported");
        Ok(serde_json::to_string_pretty(&bundle)?)
    }

    /// Import every readable plan from a JSON bundle.
    ///
    /// Entries that do not parse as plans are skipped and reported; the
    /// rest are stored, replacing plans of the same name. A document that
    /// is not JSON, or has no `plans` array, fails the whole import.
    pub async fn import(&self, json: &str) -> Result<ImportReport, PlanLibraryError> {
        let document: Value = serde_json::from_str(json)
            .map_err(|e| PlanLibraryError::InvalidBundle(e.to_string()))?;
        let Some(entries) = document.get("plans").and_then(Value::as_array) else {
            return Err(PlanLibraryError::InvalidBundle(
                "missing plans array".to_string(),
            ));
        };

        let mut report = ImportReport::default();
        for (index, entry) in entries.iter().enumerate() {
            let name = entry
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string);

            let record = match serde_json::from_value::<PlanRecord>(entry.clone()) {
                Ok(record) => record,
                Err(e) => {
                    skip(&mut report, index, name, e.to_string());
                    continue;
                }
            };
            // Stored names are trimmed, as in `save`, so `load` can find them.
            let trimmed = record.name().trim().to_string();
            if trimmed.is_empty() {
                skip(&mut report, index, name, "empty plan name".to_string());
                continue;
            }
            let record = record.with_name(trimmed);

            self.plans.put_record(&record).await?;
            report.imported.push(record.name().to_string());
        }

        tracing::info!(
            imported = report.imported.len(),
            skipped = report.skipped.len(),
            "Plans imported"
        );
        Ok(report)
    }
}

fn skip(report: &mut ImportReport, index: usize, name: Option<String>, reason: String) {
    tracing::warn!(index, plan_name = ?name, reason = %reason, "Skipping plan bundle entry");
    report.skipped.push(SkippedPlan {
        index,
        name,
        reason,
    });
}
